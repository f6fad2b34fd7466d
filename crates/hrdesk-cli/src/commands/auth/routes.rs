//! Routes command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hrdesk_core::access;

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Print the routes as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RouteEntry {
    label: &'static str,
    path: &'static str,
}

pub async fn run(args: RoutesArgs, settings: &Settings) -> Result<()> {
    let ctx = AppContext::open(settings).await?;

    let user = ctx
        .session()
        .user()
        .context("No active session. Run 'hrdesk auth login' first.")?;

    let routes: Vec<RouteEntry> = access::visible_routes(user)
        .map(|route| RouteEntry {
            label: route.label,
            path: route.path,
        })
        .collect();

    if args.json {
        return output::json_pretty(&routes);
    }

    for route in &routes {
        output::field(route.label, route.path);
    }

    Ok(())
}
