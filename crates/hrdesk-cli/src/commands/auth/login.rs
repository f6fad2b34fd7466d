//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hrdesk_core::Credentials;
use hrdesk_core::access::LANDING_ROUTE;

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "HRDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, settings: &Settings) -> Result<()> {
    let mut ctx = AppContext::open(settings).await?;

    output::note("Logging in...");

    let user = ctx
        .session_mut()
        .login(Credentials::new(args.email, args.password))
        .await
        .context("Login failed")?;

    output::success("Logged in successfully");
    println!();
    output::field("Username", &user.username);
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());
    output::field("Home", LANDING_ROUTE);

    Ok(())
}
