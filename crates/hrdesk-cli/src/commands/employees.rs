//! Employee management subcommands.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;

use hrdesk_core::{Employee, EmployeeUpdate, HrApi, NewEmployee, Upload};

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

const ROUTE: &str = "/dashboard/employees";

#[derive(Args, Debug)]
pub struct EmployeesCommand {
    #[command(subcommand)]
    pub command: EmployeesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EmployeesSubcommand {
    /// List employees
    List(ListArgs),

    /// Show one employee
    Show(ShowArgs),

    /// Add an employee
    Create(CreateArgs),

    /// Change fields of an employee
    Update(UpdateArgs),

    /// Remove an employee
    Delete(DeleteArgs),

    /// Attach a CV to an employee
    UploadCv(UploadCvArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show employees whose name, email or job title contains this
    #[arg(long)]
    pub search: Option<String>,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Employee ID
    pub id: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Job title
    #[arg(long)]
    pub role: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: String,

    #[arg(long)]
    pub salary: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub phone_number: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Employee ID
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Job title
    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub date_of_birth: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone_number: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Employee ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct UploadCvArgs {
    /// Employee ID
    pub id: String,

    /// CV file to upload
    pub file: PathBuf,
}

pub async fn handle(cmd: EmployeesCommand, settings: &Settings) -> Result<()> {
    let mut ctx = AppContext::open(settings).await?;

    match cmd.command {
        EmployeesSubcommand::List(args) => list(&mut ctx, args).await,
        EmployeesSubcommand::Show(args) => show(&mut ctx, args).await,
        EmployeesSubcommand::Create(args) => create(&mut ctx, args).await,
        EmployeesSubcommand::Update(args) => update(&mut ctx, args).await,
        EmployeesSubcommand::Delete(args) => delete(&mut ctx, args).await,
        EmployeesSubcommand::UploadCv(args) => upload_cv(&mut ctx, args).await,
    }
}

async fn list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    let result = ctx.api().list_employees(&grant.token).await;
    let mut employees = ctx.settle(result)?;
    if let Some(query) = &args.search {
        employees.retain(|employee| matches_search(employee, query));
    }

    if args.json {
        return output::json_pretty(&employees);
    }

    if employees.is_empty() {
        output::note("No employees found.");
        return Ok(());
    }

    for employee in &employees {
        println!(
            "{}  {}  {}  {}",
            employee.id.dimmed(),
            employee.name,
            employee.email,
            employee.role.dimmed()
        );
    }

    Ok(())
}

async fn show(ctx: &mut AppContext, args: ShowArgs) -> Result<()> {
    let grant = ctx.require(&format!("{}/{}", ROUTE, args.id))?;

    let result = ctx.api().get_employee(&args.id, &grant.token).await;
    let employee = ctx.settle(result)?;

    if args.json {
        return output::json_pretty(&employee);
    }

    print_employee(&employee);
    Ok(())
}

async fn create(ctx: &mut AppContext, args: CreateArgs) -> Result<()> {
    let grant = ctx.require(&format!("{}/new", ROUTE))?;

    let new = NewEmployee {
        name: args.name,
        email: args.email,
        role: args.role,
        date_of_birth: args.date_of_birth,
        salary: args.salary,
        address: args.address,
        phone_number: args.phone_number,
        document_id: None,
    };

    let result = ctx.api().create_employee(&new, &grant.token).await;
    let employee = ctx.settle(result)?;

    output::success("Employee created");
    println!();
    print_employee(&employee);
    Ok(())
}

async fn update(ctx: &mut AppContext, args: UpdateArgs) -> Result<()> {
    let grant = ctx.require(&format!("{}/{}/edit", ROUTE, args.id))?;

    let changes = EmployeeUpdate {
        name: args.name,
        email: args.email,
        role: args.role,
        date_of_birth: args.date_of_birth,
        salary: args.salary,
        address: args.address,
        phone_number: args.phone_number,
        document_id: None,
    };
    if changes.is_empty() {
        bail!("Nothing to update. Pass at least one field such as --salary.");
    }

    let result = ctx
        .api()
        .update_employee(&args.id, &changes, &grant.token)
        .await;
    let employee = ctx.settle(result)?;

    output::success("Employee updated");
    println!();
    print_employee(&employee);
    Ok(())
}

async fn delete(ctx: &mut AppContext, args: DeleteArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    if !args.force && !output::confirm(&format!("Delete employee {}?", args.id))? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let result = ctx.api().delete_employee(&args.id, &grant.token).await;
    ctx.settle(result)?;

    output::success(&format!("Deleted employee {}", args.id));
    Ok(())
}

async fn upload_cv(ctx: &mut AppContext, args: UploadCvArgs) -> Result<()> {
    let grant = ctx.require(&format!("{}/{}/upload-cv", ROUTE, args.id))?;

    let upload = Upload::from_path(&args.file)?;
    output::note(&format!("Uploading {}...", upload.file_name));

    let result = ctx
        .api()
        .upload_employee_cv(&args.id, upload, &grant.token)
        .await;
    let employee = ctx.settle(result)?;

    output::success("CV uploaded");
    if let Some(document_id) = &employee.document_id {
        output::field("Document", document_id);
    }
    Ok(())
}

/// Case-insensitive match on name, email or job title.
pub(crate) fn matches_search(employee: &Employee, query: &str) -> bool {
    let query = query.to_lowercase();
    [&employee.name, &employee.email, &employee.role]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

fn print_employee(employee: &Employee) {
    output::field("ID", &employee.id);
    output::field("Name", &employee.name);
    output::field("Email", &employee.email);
    output::field("Job title", &employee.role);
    output::field("Date of birth", &employee.date_of_birth);
    output::field("Salary", &employee.salary);
    output::field("Address", &employee.address);
    output::field("Phone", &employee.phone_number);
    if let Some(document_id) = &employee.document_id {
        output::field("CV document", document_id);
    }
}
