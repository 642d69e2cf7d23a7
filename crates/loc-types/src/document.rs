//! Reading and writing locale documents.
//!
//! Output uses two-space indentation and keeps non-ASCII characters as-is,
//! with no trailing newline.

use std::fs;
use std::path::Path;

use crate::error::{LocaleError, LocaleResult};
use crate::node::Node;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> LocaleResult<String> {
    fs::read_to_string(path).map_err(|source| LocaleError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse document text; `path` is only used to label errors.
pub fn parse(path: &Path, text: &str) -> LocaleResult<Node> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    serde_json::from_str(text).map_err(|source| LocaleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the document at `path`.
pub fn load(path: &Path) -> LocaleResult<Node> {
    let text = read_text(path)?;
    parse(path, &text)
}

/// Encode a document as JSON indented by two spaces.
///
/// Numbers are written with the exact text they were parsed from.
pub fn to_pretty_string(node: &Node) -> LocaleResult<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Write already-encoded text to `path`, creating or truncating it.
pub fn write_text(path: &Path, text: &str) -> LocaleResult<()> {
    fs::write(path, text).map_err(|source| LocaleError::Write {
        path: path.to_path_buf(),
        source,
    })
}
