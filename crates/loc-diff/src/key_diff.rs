//! Set difference of key paths between a reference and a target document.

use std::collections::BTreeSet;

use loc_types::{KeyPath, Node};

use crate::paths::collect_paths;

/// The keys a target lacks and the keys it has beyond the reference.
///
/// Both lists are sorted lexicographically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Paths in the reference but not in the target.
    pub missing: Vec<KeyPath>,
    /// Paths in the target but not in the reference.
    pub extra: Vec<KeyPath>,
}

impl KeyDiff {
    /// Create an empty key diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if both documents have the same key paths.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// Total number of differing paths.
    pub fn len(&self) -> usize {
        self.missing.len() + self.extra.len()
    }
}

/// Compare two path sets.
pub fn diff_paths(reference: &BTreeSet<KeyPath>, target: &BTreeSet<KeyPath>) -> KeyDiff {
    KeyDiff {
        missing: reference.difference(target).cloned().collect(),
        extra: target.difference(reference).cloned().collect(),
    }
}

/// Compare the key paths of two documents.
pub fn diff_documents(reference: &Node, target: &Node) -> KeyDiff {
    diff_paths(&collect_paths(reference), &collect_paths(target))
}
