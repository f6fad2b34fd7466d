//! Payslip subcommands.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;

use hrdesk_core::access::{can_view_employee_record, scope_employees};
use hrdesk_core::{HrApi, Payslip};

use crate::cli::Settings;
use crate::commands::employees::matches_search;
use crate::context::AppContext;
use crate::output;

const ROUTE: &str = "/dashboard/payslips";

#[derive(Args, Debug)]
pub struct PayslipsCommand {
    #[command(subcommand)]
    pub command: PayslipsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PayslipsSubcommand {
    /// List the employees whose payslips you may view
    List(ListArgs),

    /// Show the salary breakdown for one employee
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show employees whose name, email or job title contains this
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Employee ID
    pub employee_id: String,

    /// Print the payslip as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(cmd: PayslipsCommand, settings: &Settings) -> Result<()> {
    let mut ctx = AppContext::open(settings).await?;

    match cmd.command {
        PayslipsSubcommand::List(args) => list(&mut ctx, args).await,
        PayslipsSubcommand::Show(args) => show(&mut ctx, args).await,
    }
}

async fn list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    let result = ctx.api().list_employees(&grant.token).await;
    let mut employees = scope_employees(&grant.user, ctx.settle(result)?);
    if let Some(query) = &args.search {
        employees.retain(|employee| matches_search(employee, query));
    }

    if employees.is_empty() {
        output::note("No employees found.");
        return Ok(());
    }

    for employee in &employees {
        println!(
            "{}  {}  {}",
            employee.id.dimmed(),
            employee.name,
            employee.email
        );
    }

    Ok(())
}

async fn show(ctx: &mut AppContext, args: ShowArgs) -> Result<()> {
    let grant = ctx.require(&format!("{}/{}", ROUTE, args.employee_id))?;

    let result = ctx.api().get_employee(&args.employee_id, &grant.token).await;
    let employee = ctx.settle(result)?;
    if !can_view_employee_record(&grant.user, &employee) {
        bail!("You may only view your own payslip.");
    }

    let result = ctx.api().get_payslip(&args.employee_id, &grant.token).await;
    let payslip = ctx.settle(result)?;

    if args.json {
        return output::json_pretty(&payslip);
    }

    output::field("Employee", &format!("{} <{}>", employee.name, employee.email));
    output::field("Calculated", &payslip.calculation_date);
    println!();
    print_payslip(&payslip);
    Ok(())
}

fn print_payslip(payslip: &Payslip) {
    let amount = |value: f64| format!("{:.2}", value);

    println!("{}", "Monthly".bold());
    output::field("  Gross", &amount(payslip.gross_monthly_salary));
    output::field("  Social security", &amount(payslip.monthly_social_security));
    output::field("  Tax", &amount(payslip.monthly_total_tax));
    output::field("  Net", &payslip.formatted_net_monthly_salary);
    println!();
    println!("{}", "Annual".bold());
    output::field("  Gross", &amount(payslip.annual_gross_salary));
    output::field("  Social security", &amount(payslip.annual_social_security));
    output::field("  Taxable income", &amount(payslip.annual_taxable_income));
    output::field("  Tax", &amount(payslip.annual_total_tax));
    output::field("  Net", &amount(payslip.annual_net_salary));
}
