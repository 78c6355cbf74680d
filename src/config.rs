use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::selectors::SelectorConfig;

pub const DEFAULT_URL: &str = "https://www.eliteprospects.com/teams";
pub const DEFAULT_OUTPUT: &str = "teams.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const ENV_PREFIX: &str = "TEAMS";

/// Serializes tests that read or write `TEAMS_*` process env vars.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub url: String,
    pub output: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub pretty: bool,
    pub selectors: SelectorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            url: DEFAULT_URL.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("teams-scraper/", env!("CARGO_PKG_VERSION")).into(),
            pretty: false,
            selectors: SelectorConfig::default(),
        }
    }
}

impl Settings {
    /// Defaults, then the optional settings file, then `TEAMS_*` env vars.
    /// Nested selector keys use a double underscore: `TEAMS_SELECTORS__HEADER`.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .context("Failed to load settings")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── Tests ──
