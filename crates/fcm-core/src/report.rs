//! Run Report: what one generator pass read, merged and dropped
use fcm_registry::{CompatMatrix, KindConflict};
use hal_fqname::ProtocolKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Every input line, including blanks and comments
    pub lines_read: usize,
    /// Blank and `#` comment lines
    pub lines_ignored: usize,
    /// Malformed lines skipped in skip-invalid mode
    pub lines_skipped: usize,
    /// HAL blocks in the rendered matrix
    pub entries: usize,
    pub kinds: KindCounts,
    #[serde(default)]
    pub conflicts: Vec<KindConflict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub hidl: usize,
    pub aidl: usize,
}

impl KindCounts {
    pub fn tally(matrix: &CompatMatrix) -> Self {
        let mut counts = Self::default();
        for entry in matrix.entries() {
            match entry.kind {
                ProtocolKind::Hidl => counts.hidl += 1,
                ProtocolKind::Aidl => counts.aidl += 1,
            }
        }
        counts
    }
}

impl RunReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
