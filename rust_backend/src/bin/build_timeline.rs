//! Build the API timeline from a directory of release snapshots.
//!
//! ```text
//! build-timeline --data-dir data --output public/timeline.json
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

use kube_api_timeline::config::TimelineConfig;
use kube_api_timeline::io::{write_timeline_json, ReleaseLoader};
use kube_api_timeline::services::{create_timeline_with_options, summarize};

#[derive(Debug, Parser)]
#[command(name = "build-timeline", version, about = "Build the Kubernetes API timeline")]
struct Args {
    /// Configuration file (defaults to timeline.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding one sub-directory per release
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output JSON file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of most recent releases that are not archived
    #[arg(long)]
    recent_releases: Option<usize>,

    /// Also flag releases introducing a more mature API version
    #[arg(long)]
    detect_maturity_upgrades: bool,

    /// Evaluate support status at this instant (RFC 3339) instead of now
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

fn load_config(args: &Args) -> Result<TimelineConfig> {
    let mut config = match &args.config {
        Some(path) => TimelineConfig::from_file(path)?,
        None => TimelineConfig::from_default_location()?.unwrap_or_default(),
    };

    if let Some(dir) = &args.data_dir {
        config.data.directory = dir.clone();
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    if let Some(recent) = args.recent_releases {
        config.timeline.recent_releases = recent;
    }
    if args.detect_maturity_upgrades {
        config.timeline.detect_maturity_upgrades = true;
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let now = args.now.unwrap_or_else(Utc::now);

    log::info!("Data directory: {}", config.data.directory.display());
    log::info!("Output file: {}", config.output.path.display());

    let releases = ReleaseLoader::discover(&config.data.directory)?;
    let timeline = create_timeline_with_options(&releases, now, &config.options())
        .context("Failed to build timeline")?;

    let summary = summarize(&timeline);
    log::info!(
        "{} releases ({} supported, {} archived), {} API groups, {} versions, {} resources",
        summary.total_releases,
        summary.supported_releases,
        summary.archived_releases,
        summary.api_groups,
        summary.api_versions,
        summary.api_resources
    );

    write_timeline_json(&timeline, &config.output.path, config.output.pretty)
        .with_context(|| format!("Failed to write {}", config.output.path.display()))?;

    Ok(())
}
