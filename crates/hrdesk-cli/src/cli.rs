//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    assistant::AssistantCommand, auth::AuthCommand, documents::DocumentsCommand,
    employees::EmployeesCommand, payslips::PayslipsCommand,
};

/// Command-line client for the HR management backend.
#[derive(Parser, Debug)]
#[command(name = "hrdesk")]
#[command(author, version = env!("HRDESK_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Backend base URL
    #[arg(
        long,
        env = "HRDESK_API_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    pub api_url: String,

    /// Where the session is saved (defaults to the user data directory)
    #[arg(long, env = "HRDESK_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    /// Give up on requests after this many seconds
    #[arg(long, env = "HRDESK_TIMEOUT", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The options every command needs to reach the backend.
    pub fn settings(&self) -> Settings {
        Settings {
            api_url: self.api_url.clone(),
            session_file: self.session_file.clone(),
            timeout: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, sign up, log out and inspect the session
    Auth(AuthCommand),

    /// Manage employee records (hr only)
    Employees(EmployeesCommand),

    /// Manage company documents
    Documents(DocumentsCommand),

    /// View payslips
    Payslips(PayslipsCommand),

    /// Ask the HR assistant (hr only)
    Assistant(AssistantCommand),
}

/// Connection settings shared by all commands.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub session_file: Option<PathBuf>,
    pub timeout: Option<u64>,
}
