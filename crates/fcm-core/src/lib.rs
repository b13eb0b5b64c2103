//! FCM Core: config, error model and the fqnames → compatibility matrix runner.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::{ConfigError, GeneratorConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use error::FcmError;
pub use report::{KindCounts, RunReport};
pub use runner::{Generated, Generator};
