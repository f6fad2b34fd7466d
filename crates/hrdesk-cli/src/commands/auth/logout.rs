//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, settings: &Settings) -> Result<()> {
    let mut ctx = AppContext::open(settings).await?;

    ctx.session_mut()
        .logout()
        .context("Failed to remove saved session")?;

    output::success("Logged out");
    Ok(())
}
