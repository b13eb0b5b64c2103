//! Generator configuration.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! input: device/fqnames.txt
//! output: out/framework_compatibility_matrix.xml
//! skip_invalid: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "fqnames.txt";
pub const DEFAULT_OUTPUT: &str = "framework_compatibility_matrix.xml";

/// Path value meaning stdin for `input` and stdout for `output`.
pub const STDIO_PATH: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// fqname list, one identifier per line
    pub input: PathBuf,
    /// Rendered compatibility matrix
    pub output: PathBuf,
    /// Skip malformed lines instead of aborting the run
    pub skip_invalid: bool,
    /// Fail the run when a HAL is declared as both HIDL and AIDL
    pub strict_conflicts: bool,
    /// Optional JSON run report
    pub report: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            skip_invalid: false,
            strict_conflicts: false,
            report: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

pub(crate) fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}
