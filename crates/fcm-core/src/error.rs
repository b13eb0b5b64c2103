//! Unified Error Model
use crate::config::ConfigError;
use fcm_registry::KindConflict;
use hal_fqname::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcmError {
    #[error("IO/{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PARSE/line {line}: `{text}`: {source}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseError,
    },

    #[error("CONFLICT/{0}")]
    Conflict(#[from] KindConflict),

    #[error("CONFIG/{0}")]
    Config(#[from] ConfigError),

    #[error("REPORT/{0}")]
    Report(#[from] serde_json::Error),
}

impl FcmError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
