use serde::{Deserialize, Serialize};

/// Salary breakdown computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub gross_monthly_salary: f64,
    pub net_monthly_salary: f64,
    pub monthly_social_security: f64,
    pub monthly_total_tax: f64,
    pub annual_gross_salary: f64,
    pub annual_social_security: f64,
    pub annual_taxable_income: f64,
    pub annual_total_tax: f64,
    pub annual_net_salary: f64,
    pub formatted_net_monthly_salary: String,
    pub calculation_date: String,
}
