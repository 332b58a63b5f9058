//! Command-line interface: two entry points sharing the same selection and
//! rendering pipeline, differing only in their output sink.
//!
//! All configuration comes from the environment (see [`crate::inputs`]); the
//! CLI surface only chooses which entry point runs. Each arm is a
//! straight-line procedure: resolve inputs, select the newest report, read
//! it, render, sink. Errors propagate with `?` to the single boundary in
//! `main`, which reports one fatal message per failed run.

use std::fs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::inputs::{ConvertInputs, UploadInputs};
use crate::publish::{upload, write_local, S3Publisher};
use crate::render::render;
use crate::report::most_recent_report;
use crate::styles::resolve_stylesheet;

/// CLI for vpat-publish: render the newest VPAT report and publish it.
#[derive(Parser)]
#[clap(
    name = "vpat-publish",
    version,
    about = "Render the most recent VPAT markdown report to styled HTML and publish it"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the newest report and write vpat.html next to the checkout
    Convert,
    /// Render the newest report and upload it to the configured S3 bucket
    Upload,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert => convert().await,
        Commands::Upload => upload_report().await,
    }
}

async fn convert() -> Result<()> {
    let inputs = ConvertInputs::from_env()?;
    let report = most_recent_report(&inputs.report_dir)?;
    let markdown = fs::read_to_string(&report)?;
    let stylesheet = resolve_stylesheet(inputs.stylesheet.as_deref())?;
    let html = render(&markdown, &stylesheet, &inputs.product_name);

    let destination = write_local(&html)?;
    info!("Converted {} to {}", report.display(), destination.display());
    Ok(())
}

async fn upload_report() -> Result<()> {
    let inputs = UploadInputs::from_env()?;
    let report = most_recent_report(&inputs.report_dir)?;
    let markdown = fs::read_to_string(&report)?;
    let stylesheet = resolve_stylesheet(inputs.stylesheet.as_deref())?;
    let html = render(&markdown, &stylesheet, &inputs.product_name);

    let store = S3Publisher::connect(&inputs.aws).await;
    upload(
        &store,
        &report,
        &inputs.aws.bucket,
        &inputs.object_key(),
        &html,
    )
    .await
}
