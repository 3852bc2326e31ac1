//! Application configuration
//!
//! Loaded from `.gh-dependabot.toml`. Command line flags take precedence
//! over values found here.

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Organization to query, e.g. "einride"
    #[serde(default)]
    pub org: Option<String>,

    /// Team whose review was requested, e.g. "einride/team-transport-execution"
    #[serde(default)]
    pub team: Option<String>,

    /// Only show pull requests that bump the same package more than once
    #[serde(default)]
    pub dupes: bool,

    /// Body of the approving review submitted before a merge
    #[serde(default = "default_approval_message")]
    pub approval_message: String,

    /// How often the UI redraws while idle (spinner speed)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Results requested per search page (GitHub caps this at 100)
    #[serde(default = "default_search_page_size")]
    pub search_page_size: u8,

    /// Number of status messages kept in the status bar history
    #[serde(default = "default_status_history")]
    pub status_history: usize,
}

fn default_approval_message() -> String {
    "Approved with gh-dependabot".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_search_page_size() -> u8 {
    100
}

fn default_status_history() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            org: None,
            team: None,
            dupes: false,
            approval_message: default_approval_message(),
            tick_rate_ms: default_tick_rate_ms(),
            search_page_size: default_search_page_size(),
            status_history: default_status_history(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}
