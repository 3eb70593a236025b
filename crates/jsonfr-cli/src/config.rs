//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key is optional;
//! command-line flags override the file.
//!
//! ```yaml
//! match_whole: false
//! diff_mode: dense
//! pretty: true
//! markup:
//!   insert_open: "<ins>"
//!   insert_close: "</ins>"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use jsonfr_replace::{DiffMode, ReplaceOptions};

/// Settings loaded from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    #[serde(flatten)]
    pub options: ReplaceOptions,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            options: ReplaceOptions::default(),
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn options_with(
        &self,
        match_whole: Option<bool>,
        diff_mode: Option<DiffMode>,
    ) -> ReplaceOptions {
        let mut options = self.options.clone();
        if let Some(match_whole) = match_whole {
            options.match_whole = match_whole;
        }
        if let Some(mode) = diff_mode {
            options.diff_mode = mode;
        }
        options
    }
}
