//! SprintPlan - preview host
//!
//! Loads a profile (and optionally a catalog, feedback history and engine
//! configuration), generates a program and prints it as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sprintplan::planning::analyze_distribution;
use sprintplan::storage::config::{load_config, load_config_from};
use sprintplan::{Catalog, FeedbackEntry, MacrocycleDriver, UserProfile};

#[derive(Parser)]
#[command(name = "sprintplan", version, about = "Generate an adaptive sprint training program")]
struct Args {
    /// Athlete profile (TOML)
    #[arg(long)]
    profile: PathBuf,

    /// Engine configuration (TOML); defaults to the data directory config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Template catalog (TOML or JSON); defaults to the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Feedback history (JSON array, oldest first)
    #[arg(long)]
    feedback: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Program length in weeks
    #[arg(long)]
    weeks: Option<u32>,

    /// Print a usage summary instead of the schedule
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting SprintPlan v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("loading engine configuration")?;
    if let Some(seed) = args.seed {
        config.program.seed = Some(seed);
    }
    if let Some(weeks) = args.weeks {
        config.program.weeks = weeks;
    }

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let profile_text = std::fs::read_to_string(&args.profile)
        .with_context(|| format!("reading profile {}", args.profile.display()))?;
    let profile: UserProfile = toml::from_str(&profile_text).context("parsing profile")?;

    let feedback: Vec<FeedbackEntry> = match &args.feedback {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading feedback {}", path.display()))?;
            serde_json::from_str(&text).context("parsing feedback history")?
        }
        None => Vec::new(),
    };

    let program = MacrocycleDriver::new(&catalog, &config)
        .generate_configured(&profile, &feedback, &[])
        .context("generating program")?;

    let output = if args.summary {
        serde_json::to_string_pretty(&analyze_distribution(&program, &catalog))?
    } else {
        serde_json::to_string_pretty(&program)?
    };
    println!("{output}");

    Ok(())
}
