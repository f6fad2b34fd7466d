//! Signup command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hrdesk_core::{Registration, Role};

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Display name
    #[arg(long)]
    pub username: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "HRDESK_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// One of hr, finance or employee
    #[arg(long, default_value = "employee")]
    pub role: Role,
}

pub async fn run(args: SignupArgs, settings: &Settings) -> Result<()> {
    let ctx = AppContext::open(settings).await?;

    output::note("Creating account...");

    let registration = Registration::new(args.username, args.email, args.password, args.role);
    let user = ctx
        .session()
        .signup(registration)
        .await
        .context("Sign up failed")?;

    output::success("Account created");
    println!();
    output::field("Username", &user.username);
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());
    println!();
    output::note("Run 'hrdesk auth login' to start a session.");

    Ok(())
}
