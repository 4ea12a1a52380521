mod commands;
mod serve;
mod watch;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokmoney_core::{AppConfig, DiscoveryProfile, Rpm};
use tokmoney_scraper::Discovery;

#[derive(Debug, Parser)]
#[command(name = "tokmoney")]
#[command(about = "Estimate creator earnings and monetization eligibility from saved profile pages")]
struct Cli {
    /// YAML discovery profile overriding the built-in selectors
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse count strings such as "1.2M" or "12,3K vues"
    Parse {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Estimate earnings for a view count
    Estimate {
        /// View count, with or without suffix (e.g., 1.2M)
        #[arg(long)]
        views: String,
        /// Treat the post as an image (never monetized)
        #[arg(long)]
        image: bool,
        /// Preset name (low, medium, high) or a positive rate
        #[arg(long)]
        rpm: Option<Rpm>,
    },
    /// Estimate earnings for every video tile on a saved page
    Analyze {
        page: PathBuf,
        /// Preset name (low, medium, high) or a positive rate
        #[arg(long)]
        rpm: Option<Rpm>,
        /// Page URL, checked to be a creator profile
        #[arg(long)]
        url: Option<String>,
        /// Print the scan report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check monetization eligibility of a saved profile page
    Eligibility {
        page: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Answer JSON requests read line by line from stdin
    Serve {
        #[arg(long)]
        page: PathBuf,
    },
    /// Re-analyze a page file every time it changes
    Watch {
        page: PathBuf,
        #[arg(long)]
        rpm: Option<Rpm>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tokmoney_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config);

    let cli = Cli::parse();
    let discovery = load_discovery(cli.profile.as_ref().or(config.profile_path.as_ref()))?;

    match cli.command {
        Commands::Parse { text } => commands::run_parse(&text),
        Commands::Estimate { views, image, rpm } => {
            commands::run_estimate(&views, !image, rpm.unwrap_or(config.default_rpm));
        }
        Commands::Analyze {
            page,
            rpm,
            url,
            json,
        } => {
            let mut settings = config.analysis_settings();
            if let Some(rpm) = rpm {
                settings.rpm = rpm;
            }
            commands::run_analyze(&page, &discovery, &settings, url.as_deref(), json)?;
        }
        Commands::Eligibility { page, json } => commands::run_eligibility(&page, &discovery, json)?,
        Commands::Serve { page } => serve::run_serve(&page, discovery, &config).await?,
        Commands::Watch { page, rpm } => {
            let mut settings = config.analysis_settings();
            if let Some(rpm) = rpm {
                settings.rpm = rpm;
            }
            watch::run_watch(&page, discovery, settings, &config).await;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable for `serve` and `--json`.
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_discovery(profile_path: Option<&PathBuf>) -> anyhow::Result<Discovery> {
    let profile = match profile_path {
        Some(path) => tokmoney_core::load_profile(path)
            .with_context(|| format!("failed to load discovery profile {}", path.display()))?,
        None => DiscoveryProfile::default(),
    };
    Discovery::from_profile(&profile).context("failed to compile discovery profile")
}
