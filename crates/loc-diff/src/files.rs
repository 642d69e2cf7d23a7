use std::path::Path;

use loc_types::{document, LocaleResult};
use tracing::info;

use crate::key_diff::{diff_documents, KeyDiff};

/// Load both files and compare their key paths.
pub fn diff_files(reference_path: &Path, target_path: &Path) -> LocaleResult<KeyDiff> {
    let reference = document::load(reference_path)?;
    let target = document::load(target_path)?;
    let diff = diff_documents(&reference, &target);

    info!(
        reference = %reference_path.display(),
        target = %target_path.display(),
        missing = diff.missing.len(),
        extra = diff.extra.len(),
        "compared key paths"
    );
    Ok(diff)
}
