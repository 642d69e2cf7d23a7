//! Key-path diff between translation files.
//!
//! Every mapping entry of a document, intermediate or leaf, is named by its
//! dotted key path. Comparing the path sets of a reference and a target
//! yields the keys the target is missing and the keys it has in excess.
//!
//! # Key Types
//!
//! - [`collect_paths`] -- All key paths in a document
//! - [`KeyDiff`] / [`diff_paths`] / [`diff_documents`] -- Missing and extra paths
//! - [`KeyDiffReport`] -- Human-readable report
//! - [`diff_files`] -- Compare two files on disk

pub mod files;
pub mod key_diff;
pub mod paths;
pub mod report;

pub use files::diff_files;
pub use key_diff::{diff_documents, diff_paths, KeyDiff};
pub use paths::collect_paths;
pub use report::KeyDiffReport;
