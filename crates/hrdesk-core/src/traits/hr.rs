//! Authenticated resource API trait.

use async_trait::async_trait;

use crate::types::{
    AssistantAnswer, Document, Employee, EmployeeUpdate, NewEmployee, Payslip, Upload,
    UploadedDocument,
};
use crate::{AuthToken, Result};

/// Employee, document, payslip and assistant operations.
///
/// Every call carries the session's bearer token. A rejected token surfaces
/// as an error for which [`Error::is_unauthorized`](crate::Error::is_unauthorized)
/// is true.
#[async_trait]
pub trait HrApi: Send + Sync {
    /// List all employees visible to the token's user.
    async fn list_employees(&self, token: &AuthToken) -> Result<Vec<Employee>>;

    /// Fetch a single employee.
    async fn get_employee(&self, id: &str, token: &AuthToken) -> Result<Employee>;

    /// Create an employee.
    async fn create_employee(&self, employee: &NewEmployee, token: &AuthToken)
    -> Result<Employee>;

    /// Apply a partial update to an employee.
    async fn update_employee(
        &self,
        id: &str,
        update: &EmployeeUpdate,
        token: &AuthToken,
    ) -> Result<Employee>;

    /// Delete an employee.
    async fn delete_employee(&self, id: &str, token: &AuthToken) -> Result<()>;

    /// Attach a CV to an employee.
    async fn upload_employee_cv(
        &self,
        id: &str,
        file: Upload,
        token: &AuthToken,
    ) -> Result<Employee>;

    /// List stored documents.
    async fn list_documents(&self, token: &AuthToken) -> Result<Vec<Document>>;

    /// Upload a document.
    async fn upload_document(&self, file: Upload, token: &AuthToken) -> Result<UploadedDocument>;

    /// Delete a document.
    async fn delete_document(&self, id: &str, token: &AuthToken) -> Result<()>;

    /// Download a document's contents.
    async fn download_document(&self, id: &str, token: &AuthToken) -> Result<Vec<u8>>;

    /// Fetch the payslip computed for an employee.
    async fn get_payslip(&self, employee_id: &str, token: &AuthToken) -> Result<Payslip>;

    /// Ask the HR assistant a question.
    async fn ask(&self, question: &str, token: &AuthToken) -> Result<AssistantAnswer>;
}
