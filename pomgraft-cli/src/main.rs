mod config;
mod discover;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use pomgraft_core::adapters::{FsBackup, FsWriter};
use pomgraft_core::{IntegrationOutcome, IntegrationSettings, integrate_files};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "pomgraft",
    version,
    about = "Injects build-instrumentation plugins into Maven POM files."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Integrate the agent plugin into every matching POM.
    Integrate(IntegrateArgs),
    /// Dry-run: report what integrate would change, as unified diffs.
    Check(IntegrateArgs),
}

#[derive(Debug, Parser)]
struct IntegrateArgs {
    /// Folder to search for build files (repeatable; default: current directory).
    #[arg(long = "folder")]
    folders: Vec<Utf8PathBuf>,

    /// Glob pattern for build files, relative to each folder.
    #[arg(long, default_value = "**/pom.xml")]
    pattern: String,

    /// Configuration file (default: <folder>/pomgraft.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Instrumentation collector endpoint; overrides the config file.
    #[arg(long)]
    server: Option<String>,

    /// Customer identifier; overrides the config file.
    #[arg(long)]
    customer_id: Option<String>,

    /// Application name; overrides the config file.
    #[arg(long)]
    app_name: Option<String>,

    /// Branch name; overrides the config file.
    #[arg(long)]
    branch: Option<String>,

    /// Agent plugin version to pin instead of the built-in default.
    #[arg(long)]
    plugin_version: Option<String>,

    /// Skip the pre-mutation backup copies.
    #[arg(long, default_value_t = false)]
    no_backup: bool,

    /// Report what would change without writing anything.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Write the mutated POM here instead of in place. Requires that
    /// exactly one file matches.
    #[arg(long)]
    target: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Integrate(args) => cmd_integrate(args, false),
        Command::Check(args) => cmd_integrate(args, true),
    }
}

fn cmd_integrate(args: IntegrateArgs, dry_run: bool) -> anyhow::Result<()> {
    let dry_run = dry_run || args.dry_run;
    let folders = if args.folders.is_empty() {
        vec![Utf8PathBuf::from(".")]
    } else {
        args.folders.clone()
    };

    let file_config = config::load_or_default(args.config.as_deref(), &folders[0])
        .context("load pomgraft.toml config")?;

    let mut agent = file_config.agent;
    if args.server.is_some() {
        agent.server_url = args.server.clone();
    }
    if args.customer_id.is_some() {
        agent.customer_id = args.customer_id.clone();
    }
    if args.app_name.is_some() {
        agent.app_name = args.app_name.clone();
    }
    if args.branch.is_some() {
        agent.branch_name = args.branch.clone();
    }

    let settings = IntegrationSettings {
        backup: file_config.backups.enabled && !args.no_backup,
        backup_suffix: file_config.backups.suffix,
        dry_run,
        version_override: args.plugin_version.clone(),
    };
    debug!(
        "settings: backup={}, dry_run={}, version_override={:?}",
        settings.backup, settings.dry_run, settings.version_override
    );

    let mut files = discover::discover_poms(&folders, &args.pattern)?;
    if files.is_empty() {
        println!("no build files matched '{}'", args.pattern);
        return Ok(());
    }
    if let Some(target) = &args.target {
        anyhow::ensure!(
            files.len() == 1,
            "--target requires exactly one matching file, found {}",
            files.len()
        );
        files[0].target = Some(target.clone());
    }

    let reports = integrate_files(&agent, &settings, &files, &FsBackup, &FsWriter);

    let mut integrated = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;
    for report in &reports {
        match &report.outcome {
            IntegrationOutcome::Integrated => {
                integrated += 1;
                if dry_run {
                    println!("would integrate {}", report.source);
                } else {
                    println!("integrated {}", report.source);
                }
            }
            IntegrationOutcome::SkippedAlreadyPresent { found_in } => {
                skipped += 1;
                println!("skipped {} (already integrated: {found_in})", report.source);
            }
            IntegrationOutcome::SkippedInvalid { reason } => {
                skipped += 1;
                println!("skipped {} ({reason})", report.source);
            }
            IntegrationOutcome::Failed { error } => {
                failed += 1;
                println!("FAILED {} ({error})", report.source);
            }
        }
        if let Some(patch) = &report.patch
            && !patch.is_empty()
        {
            println!("{patch}");
        }
    }
    println!("{integrated} integrated, {skipped} skipped, {failed} failed");

    if failed > 0 {
        anyhow::bail!("{failed} file(s) failed to integrate");
    }
    Ok(())
}
