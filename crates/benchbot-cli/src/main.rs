//! benchbot - benchmark reporting for labeled pull requests
//!
//! The `benchbot` command turns a `benchmark` label on a pull request into
//! a results comment: it runs the iai and criterion harnesses against the
//! proposed code and posts both captured outputs back to the PR.
//!
//! ## Commands
//!
//! - `run`: evaluate a trigger event and, if it carries the marker label,
//!   benchmark and comment
//! - `tools`: report availability of the benchmark tooling

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

use benchbot_github::GithubClient;
use benchbot_pipeline::{
    init_tracing, BenchPipeline, BenchTarget, HarnessSchedule, PipelineOutcome, Provisioner,
    TriggerEvent, TriggerGate, MARKER_LABEL,
};

#[derive(Parser)]
#[command(name = "benchbot")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Benchmark reporting for labeled pull requests", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a trigger event and report benchmark results on the PR
    Run {
        /// Webhook payload file (e.g. the file $GITHUB_EVENT_PATH points at)
        #[arg(long, conflicts_with_all = ["label", "owner", "repo", "number"])]
        event_file: Option<PathBuf>,

        /// Label name carried by the event
        #[arg(long)]
        label: Option<String>,

        /// Repository owner
        #[arg(long)]
        owner: Option<String>,

        /// Repository name
        #[arg(long)]
        repo: Option<String>,

        /// Pull request number
        #[arg(long)]
        number: Option<u64>,

        /// Package containing the benchmark entry points
        #[arg(short, long)]
        package: String,

        /// Criterion bench target name
        #[arg(long, default_value = "proof_criterion")]
        criterion_bench: String,

        /// Iai bench target name
        #[arg(long, default_value = "proof_iai")]
        iai_bench: String,

        /// Label that arms the pipeline
        #[arg(long, default_value = MARKER_LABEL)]
        marker_label: String,

        /// Skip the tool availability probes (tooling provisioned externally)
        #[arg(long)]
        skip_tool_check: bool,
    },

    /// Report availability of the benchmark tooling
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Run {
            event_file,
            label,
            owner,
            repo,
            number,
            package,
            criterion_bench,
            iai_bench,
            marker_label,
            skip_tool_check,
        } => {
            let event = resolve_event(event_file.as_deref(), label, owner, repo, number)?;
            cmd_run(
                &event,
                &package,
                &criterion_bench,
                &iai_bench,
                &marker_label,
                skip_tool_check,
            )
            .await
        }
        Commands::Tools => cmd_tools().await,
    }
}

/// Build the trigger event from a payload file or explicit flags.
fn resolve_event(
    event_file: Option<&Path>,
    label: Option<String>,
    owner: Option<String>,
    repo: Option<String>,
    number: Option<u64>,
) -> Result<TriggerEvent> {
    if let Some(path) = event_file {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {:?}", path))?;
        return TriggerEvent::from_payload(&payload).context("failed to decode event payload");
    }

    match (label, owner, repo, number) {
        (Some(label), Some(owner), Some(repo), Some(number)) => {
            Ok(TriggerEvent::attached(&label, &owner, &repo, number))
        }
        _ => bail!("either --event-file or all of --label, --owner, --repo, --number are required"),
    }
}

/// Run the pipeline for one event and print the outcome.
async fn cmd_run(
    event: &TriggerEvent,
    package: &str,
    criterion_bench: &str,
    iai_bench: &str,
    marker_label: &str,
    skip_tool_check: bool,
) -> Result<()> {
    let target = BenchTarget::new(package).with_benches(criterion_bench, iai_bench);
    let schedule = HarnessSchedule::for_target(&target);

    let provisioner = if skip_tool_check {
        Provisioner::none()
    } else {
        Provisioner::standard()
    };

    let publisher = Arc::new(GithubClient::from_env());
    let pipeline = BenchPipeline::new(
        TriggerGate::new(marker_label),
        provisioner,
        schedule,
        publisher,
    );

    match pipeline
        .run(event)
        .await
        .context("benchmark pipeline failed")?
    {
        PipelineOutcome::Skipped { label } => {
            println!("Label '{}' does not arm the pipeline; nothing to do.", label);
        }
        PipelineOutcome::Published {
            run_id,
            request,
            duration_ms,
        } => {
            println!("Run ID: {}", run_id);
            println!(
                "Comment created on {}/{}#{}",
                request.owner, request.repo, request.number
            );
            println!("Duration: {}ms", duration_ms);
        }
    }

    Ok(())
}

/// Probe and print benchmark tooling availability.
async fn cmd_tools() -> Result<()> {
    println!("Benchmark tooling:");

    for probe in Provisioner::standard().probes() {
        let status = if probe.is_available().await {
            "✓"
        } else {
            "✗"
        };
        println!("  {} {}", status, probe.tool);
    }

    Ok(())
}
