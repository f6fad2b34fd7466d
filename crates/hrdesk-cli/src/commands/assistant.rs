//! HR assistant subcommand.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;

use hrdesk_core::HrApi;

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

const ROUTE: &str = "/dashboard/assistant";

#[derive(Args, Debug)]
pub struct AssistantCommand {
    #[command(subcommand)]
    pub command: AssistantSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AssistantSubcommand {
    /// Ask a question about company documents and policy
    Ask(AskArgs),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question, as one or more words
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(cmd: AssistantCommand, settings: &Settings) -> Result<()> {
    let mut ctx = AppContext::open(settings).await?;

    match cmd.command {
        AssistantSubcommand::Ask(args) => ask(&mut ctx, args).await,
    }
}

async fn ask(ctx: &mut AppContext, args: AskArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    let question = args.question.join(" ");
    let question = question.trim();
    if question.is_empty() {
        bail!("Question must not be empty");
    }

    output::note("Thinking...");

    let result = ctx.api().ask(question, &grant.token).await;
    let answer = ctx.settle(result)?;

    if args.json {
        return output::json_pretty(&answer);
    }

    println!("{}", answer.answer);

    if let Some(sources) = answer.sources.as_ref().filter(|s| !s.is_empty()) {
        println!();
        println!("{}", "Sources".dimmed());
        for source in sources {
            println!("  - {}", source);
        }
    }

    Ok(())
}
