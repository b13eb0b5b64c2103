//! Compatibility Matrix: one canonical entry per HAL name
use crate::diagnostics::Diagnostics;
use crate::merge::{fold_entry, KindConflict};
use hal_fqname::Entry;
use serde::Serialize;
use std::collections::HashMap;

/// What `register` did with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// First entry for this HAL name.
    Inserted,
    /// Folded into the existing entry.
    Merged,
    /// Protocol kind mismatch; the incoming entry was discarded.
    Conflict(KindConflict),
}

/// Entry registry keyed by HAL name, iterated in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompatMatrix {
    entries: Vec<Entry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CompatMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix by registering every entry in order.
    pub fn from_entries<I>(entries: I, diagnostics: &mut dyn Diagnostics) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut matrix = Self::new();
        for entry in entries {
            matrix.register(entry, diagnostics);
        }
        matrix
    }

    pub fn register(&mut self, entry: Entry, diagnostics: &mut dyn Diagnostics) -> MergeOutcome {
        let Some(slot) = self.index.get(&entry.name).copied() else {
            self.index.insert(entry.name.clone(), self.entries.len());
            self.entries.push(entry);
            return MergeOutcome::Inserted;
        };

        match fold_entry(&mut self.entries[slot], entry) {
            Ok(()) => MergeOutcome::Merged,
            Err(conflict) => {
                diagnostics.kind_conflict(&conflict);
                MergeOutcome::Conflict(conflict)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
