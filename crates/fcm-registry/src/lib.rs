//! FCM Registry: folds parsed HAL entries into one record per HAL name.
pub mod compat;
pub mod diagnostics;
pub mod merge;

pub use compat::{CompatMatrix, MergeOutcome};
pub use diagnostics::{CollectedDiagnostics, Diagnostics, TracingDiagnostics};
pub use merge::{merge_entry, merge_interface, merge_version, KindConflict, MergeError};
