mod config;
mod error;
mod extract;
mod fetch;
mod model;
mod output;
mod selectors;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::Settings;
use crate::extract::Extractor;

#[derive(Parser)]
#[command(name = "teams_scraper", about = "Extract team listings from a hockey directory page into JSON")]
struct Cli {
    /// Page to fetch (default: https://www.eliteprospects.com/teams)
    #[arg(long)]
    url: Option<String>,

    /// Parse a saved HTML file instead of fetching
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Where to write the JSON (default: teams.json)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Settings file (TOML); TEAMS_* env vars still apply on top
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.url {
            settings.url = url.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if self.pretty {
            settings.pretty = true;
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

/// Extract per `settings` and write the JSON. Returns the path written.
fn run(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let extractor = Extractor::from_settings(settings)?;
    let sections = match &cli.input {
        Some(path) => {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            extractor.extract_html(&html)?
        }
        None => extractor.extract(&settings.url)?,
    };

    output::write_json(&settings.output, &sections, settings.pretty)?;
    Ok(settings.output.clone())
}

fn main() -> Result<()> {
    init_tracing();
    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);
    info!(settings_loaded = ?settings, "Starting team extraction");

    let written = run(&cli, &settings)?;
    info!(elapsed = ?t0.elapsed(), "Done");

    println!(
        "Team data extracted and saved to {} successfully!",
        written.display()
    );
    Ok(())
}

// ── Tests ──
