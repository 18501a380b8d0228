//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable              | Default | Meaning                                  |
//! |-----------------------|---------|------------------------------------------|
//! | `SHOPCART_ITEMS_PATH` | unset   | JSON items file; unset = built-in sample |
//! | `SHOPCART_OUTPUT`     | `table` | `table` or `json`                        |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const ITEMS_PATH_VAR: &str = "SHOPCART_ITEMS_PATH";
pub const OUTPUT_VAR: &str = "SHOPCART_OUTPUT";

/// What gets printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The rendered ticket text.
    #[default]
    Table,
    /// The `TicketSummary` as pretty JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(OUTPUT_VAR.to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopcartConfig {
    /// Items file to load instead of the sample set
    pub items_path: Option<PathBuf>,

    /// Output format
    pub output: OutputFormat,
}

impl ShopcartConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let items_path = match lookup(ITEMS_PATH_VAR) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(ITEMS_PATH_VAR.to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let output = lookup(OUTPUT_VAR)
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(ShopcartConfig { items_path, output })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
