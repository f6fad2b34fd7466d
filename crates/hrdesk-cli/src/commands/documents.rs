//! Document subcommands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use colored::Colorize;

use hrdesk_core::{HrApi, Upload};

use crate::cli::Settings;
use crate::context::AppContext;
use crate::output;

const ROUTE: &str = "/dashboard/documents";

#[derive(Args, Debug)]
pub struct DocumentsCommand {
    #[command(subcommand)]
    pub command: DocumentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DocumentsSubcommand {
    /// List uploaded documents
    List(ListArgs),

    /// Upload a PDF
    Upload(UploadArgs),

    /// Delete a document
    Delete(DeleteArgs),

    /// Save a document to disk
    Download(DownloadArgs),

    /// Print the URL a document can be downloaded from
    Url(UrlArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// File to upload
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Document ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Document ID
    pub id: String,

    /// Where to write the file (defaults to <ID>.pdf)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Document ID
    pub id: String,
}

pub async fn handle(cmd: DocumentsCommand, settings: &Settings) -> Result<()> {
    let mut ctx = AppContext::open(settings).await?;

    match cmd.command {
        DocumentsSubcommand::List(args) => list(&mut ctx, args).await,
        DocumentsSubcommand::Upload(args) => upload(&mut ctx, args).await,
        DocumentsSubcommand::Delete(args) => delete(&mut ctx, args).await,
        DocumentsSubcommand::Download(args) => download(&mut ctx, args).await,
        DocumentsSubcommand::Url(args) => url(&ctx, args),
    }
}

async fn list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    let result = ctx.api().list_documents(&grant.token).await;
    let documents = ctx.settle(result)?;

    if args.json {
        return output::json_pretty(&documents);
    }

    if documents.is_empty() {
        output::note("No documents found.");
        return Ok(());
    }

    for document in &documents {
        println!("{}  {}", document.id.dimmed(), document.filename);
    }

    Ok(())
}

async fn upload(ctx: &mut AppContext, args: UploadArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    let upload = Upload::from_path(&args.file)?;
    let file_name = upload.file_name.clone();
    output::note(&format!("Uploading {}...", file_name));

    let result = ctx.api().upload_document(upload, &grant.token).await;
    let uploaded = ctx.settle(result)?;

    output::success(&format!("Uploaded {}", file_name));
    output::field("ID", &uploaded.file_id);
    Ok(())
}

async fn delete(ctx: &mut AppContext, args: DeleteArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    if !args.force && !output::confirm(&format!("Delete document {}?", args.id))? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let result = ctx.api().delete_document(&args.id, &grant.token).await;
    ctx.settle(result)?;

    output::success(&format!("Deleted document {}", args.id));
    Ok(())
}

async fn download(ctx: &mut AppContext, args: DownloadArgs) -> Result<()> {
    let grant = ctx.require(ROUTE)?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.pdf", args.id)));
    if path.exists() && !args.force {
        bail!("{} already exists. Pass --force to overwrite.", path.display());
    }

    let result = ctx.api().download_document(&args.id, &grant.token).await;
    let bytes = ctx.settle(result)?;

    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    output::success(&format!("Saved {} ({} bytes)", path.display(), bytes.len()));
    Ok(())
}

fn url(ctx: &AppContext, args: UrlArgs) -> Result<()> {
    ctx.require(ROUTE)?;

    println!("{}", ctx.api().document_download_url(&args.id));
    Ok(())
}
