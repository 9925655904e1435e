//! Presentation settings for `flagctl`.
//!
//! Loaded from the YAML file named by `--config`. The file only affects how
//! `flagctl` prints and logs; it never supplies flag values.
//!
//! ```yaml
//! format: table
//! log_level: info
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::OutputFormat;

/// Settings read from a `flagctl` config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default output format for `flags` when `--format` is not given.
    pub format: OutputFormat,
    /// Tracing filter used when neither `RUST_LOG` nor `--verbose` is set.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
