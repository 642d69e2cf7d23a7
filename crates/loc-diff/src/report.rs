//! Plain-text rendering of a [`KeyDiff`].
//!
//! ```text
//! --- MISSING KEYS IN fr (1) ---
//! [-] b.c
//!
//! --- EXTRA KEYS IN fr (1) ---
//! [+] b.d
//! ```

use std::fmt;

use crate::key_diff::KeyDiff;

/// Marker for a path the target lacks.
pub const MISSING_MARKER: &str = "[-]";
/// Marker for a path only the target has.
pub const EXTRA_MARKER: &str = "[+]";

/// A key diff labelled with the target locale, ready for display.
#[derive(Clone, Copy, Debug)]
pub struct KeyDiffReport<'a> {
    diff: &'a KeyDiff,
    target: &'a str,
}

impl<'a> KeyDiffReport<'a> {
    pub fn new(diff: &'a KeyDiff, target: &'a str) -> Self {
        Self { diff, target }
    }
}

impl fmt::Display for KeyDiffReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "--- MISSING KEYS IN {} ({}) ---",
            self.target,
            self.diff.missing.len()
        )?;
        for path in &self.diff.missing {
            writeln!(f, "{MISSING_MARKER} {path}")?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "--- EXTRA KEYS IN {} ({}) ---",
            self.target,
            self.diff.extra.len()
        )?;
        for path in &self.diff.extra {
            writeln!(f, "{EXTRA_MARKER} {path}")?;
        }
        Ok(())
    }
}
