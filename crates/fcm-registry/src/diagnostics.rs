//! Diagnostics sink handed to the registry, serializer and runner.
//!
//! Nothing in the core logs on its own; every warning or notice goes through
//! a [`Diagnostics`] implementation chosen by the caller.
use crate::merge::KindConflict;
use hal_fqname::ParseError;

pub trait Diagnostics {
    /// A HAL name was redeclared with another protocol kind; the new data was dropped.
    fn kind_conflict(&mut self, conflict: &KindConflict);

    /// A malformed line was skipped (only in skip-and-continue mode).
    fn invalid_line(&mut self, line: usize, text: &str, error: &ParseError);

    fn notice(&mut self, message: &str);
}

/// Forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn kind_conflict(&mut self, conflict: &KindConflict) {
        tracing::warn!(hal = %conflict.name, "{}", conflict);
    }

    fn invalid_line(&mut self, line: usize, text: &str, error: &ParseError) {
        tracing::warn!(line, "skipping malformed fqname `{}`: {}", text, error);
    }

    fn notice(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CollectedDiagnostics {
    pub conflicts: Vec<KindConflict>,
    pub invalid_lines: Vec<(usize, String, ParseError)>,
    pub notices: Vec<String>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty() && self.invalid_lines.is_empty() && self.notices.is_empty()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn kind_conflict(&mut self, conflict: &KindConflict) {
        self.conflicts.push(conflict.clone());
    }

    fn invalid_line(&mut self, line: usize, text: &str, error: &ParseError) {
        self.invalid_lines.push((line, text.to_string(), error.clone()));
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
