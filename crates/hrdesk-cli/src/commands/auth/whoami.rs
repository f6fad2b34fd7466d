//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the user as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, settings: &Settings) -> Result<()> {
    let ctx = AppContext::open(settings).await?;

    let user = ctx
        .session()
        .user()
        .context("No active session. Run 'hrdesk auth login' first.")?;

    if args.json {
        return output::json_pretty(user);
    }

    output::field("Username", &user.username);
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());
    output::field("API", &ctx.api().url().to_string());

    Ok(())
}
