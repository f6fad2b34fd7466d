//! hrdesk - command-line client for the HR management backend.
//!
//! Every command restores the saved session first, checks the caller's role
//! against the route the command belongs to, and only then talks to the
//! backend.

mod cli;
mod commands;
mod context;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{assistant, auth, documents, employees, payslips};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let settings = cli.settings();
    let result = match cli.command {
        Commands::Auth(cmd) => auth::handle(cmd, &settings).await,
        Commands::Employees(cmd) => employees::handle(cmd, &settings).await,
        Commands::Documents(cmd) => documents::handle(cmd, &settings).await,
        Commands::Payslips(cmd) => payslips::handle(cmd, &settings).await,
        Commands::Assistant(cmd) => assistant::handle(cmd, &settings).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
