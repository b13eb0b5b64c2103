//! Merge rules for entries sharing a HAL name.
use hal_fqname::{Entry, InterfaceRecord, ProtocolKind, VersionRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The same HAL name was declared with both HIDL and AIDL.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("conflicting HAL types for entry {name}: {existing} vs {incoming}")]
pub struct KindConflict {
    pub name: String,
    pub existing: ProtocolKind,
    pub incoming: ProtocolKind,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("cannot merge entry `{incoming}` into `{existing}`")]
    NameMismatch { existing: String, incoming: String },
    #[error(transparent)]
    KindConflict(#[from] KindConflict),
}

/// Keeps the larger minor of two records with the same major.
/// Returns whether `existing` changed.
pub fn merge_version(existing: &mut VersionRecord, incoming: &VersionRecord) -> bool {
    debug_assert_eq!(existing.major, incoming.major);
    if incoming.minor > existing.minor {
        existing.minor = incoming.minor;
        true
    } else {
        false
    }
}

/// Appends the instances `existing` does not have yet, in `incoming`'s order.
/// Returns how many were appended.
pub fn merge_interface(existing: &mut InterfaceRecord, incoming: InterfaceRecord) -> usize {
    let mut added = 0;
    for instance in incoming.instances {
        if !existing.contains(&instance) {
            existing.instances.push(instance);
            added += 1;
        }
    }
    added
}

/// Folds `incoming` into `existing`. On error `existing` is left untouched.
pub fn merge_entry(existing: &mut Entry, incoming: Entry) -> Result<(), MergeError> {
    if existing.name != incoming.name {
        return Err(MergeError::NameMismatch {
            existing: existing.name.clone(),
            incoming: incoming.name,
        });
    }

    fold_entry(existing, incoming)?;
    Ok(())
}

/// [`merge_entry`] for callers that already matched the entries by name.
pub(crate) fn fold_entry(existing: &mut Entry, incoming: Entry) -> Result<(), KindConflict> {
    if existing.kind != incoming.kind {
        return Err(KindConflict {
            name: incoming.name,
            existing: existing.kind,
            incoming: incoming.kind,
        });
    }

    for version in incoming.versions {
        match existing.version_mut(version.major) {
            Some(current) => {
                merge_version(current, &version);
            }
            None => existing.versions.push(version),
        }
    }

    for interface in incoming.interfaces {
        match existing.interface_mut(&interface.name) {
            Some(current) => {
                merge_interface(current, interface);
            }
            None => existing.interfaces.push(interface),
        }
    }

    Ok(())
}
