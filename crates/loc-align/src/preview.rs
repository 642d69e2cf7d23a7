//! Line diff between a translation file and its aligned form.
//!
//! Uses the `similar` crate (Myers diff algorithm) to render a unified diff
//! with three lines of context.

use similar::TextDiff;

const CONTEXT_LINES: usize = 3;

/// Render a unified diff from `before` to `after`.
///
/// The headers name the two sides. Returns an empty string when the texts
/// are identical.
pub fn preview(before_label: &str, after_label: &str, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }
    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(before_label, after_label)
        .to_string()
}
