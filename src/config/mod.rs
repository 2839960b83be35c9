#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 1000;

/// Effective settings after layering defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub default_limit: u32,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn with_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(base_url) = &file.api.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(limit) = file.list.default_limit {
            self.default_limit = limit;
        }
        if let Some(verbose) = file.logging.verbose {
            self.verbose = verbose;
        }
        if let Some(json) = file.logging.json {
            self.json_logs = json;
        }
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("default_limit", self.default_limit, 1, MAX_LIMIT)?;
        Ok(())
    }
}
