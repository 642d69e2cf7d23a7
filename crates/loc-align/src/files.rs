//! File-level alignment: read both locale files, align, and write the result.

use std::path::Path;

use loc_types::{document, LocaleResult};
use tracing::info;

use crate::align::{align_with_report, Alignment};
use crate::preview::preview;

/// A target file aligned in memory, not yet written.
#[derive(Clone, Debug)]
pub struct AlignedFile {
    /// The alignment report and aligned document.
    pub alignment: Alignment,
    /// The target file's text as read.
    pub original: String,
    /// The aligned document encoded for output.
    pub rendered: String,
}

impl AlignedFile {
    /// Read `reference_path` and `target_path` and align the target.
    pub fn prepare(reference_path: &Path, target_path: &Path) -> LocaleResult<Self> {
        let reference = document::load(reference_path)?;
        let original = document::read_text(target_path)?;
        let target = document::parse(target_path, &original)?;

        let alignment = align_with_report(&reference, &target);
        let rendered = document::to_pretty_string(&alignment.document)?;

        info!(
            reference = %reference_path.display(),
            target = %target_path.display(),
            dropped = alignment.dropped.len(),
            appended = alignment.appended.len(),
            "aligned target to reference"
        );

        Ok(Self {
            alignment,
            original,
            rendered,
        })
    }

    /// Returns `true` if writing would reproduce the target file byte-for-byte.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.rendered
    }

    /// Unified diff from the target file to the aligned output.
    pub fn preview(&self, target_label: &str, output_label: &str) -> String {
        preview(target_label, output_label, &self.original, &self.rendered)
    }

    /// Write the aligned document to `output_path`.
    pub fn write_to(&self, output_path: &Path) -> LocaleResult<()> {
        document::write_text(output_path, &self.rendered)?;
        info!(output = %output_path.display(), bytes = self.rendered.len(), "wrote aligned file");
        Ok(())
    }
}

/// Align the target file to the reference file and write the result to
/// `output_path`. Neither input is modified unless `output_path` names it.
pub fn align_files(
    reference_path: &Path,
    target_path: &Path,
    output_path: &Path,
) -> LocaleResult<Alignment> {
    let aligned = AlignedFile::prepare(reference_path, target_path)?;
    aligned.write_to(output_path)?;
    Ok(aligned.alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loc_types::{KeyPath, LocaleError};
    use std::fs;
    use std::path::PathBuf;

    struct Fixture {
        _dir: tempfile::TempDir,
        reference: PathBuf,
        target: PathBuf,
        output: PathBuf,
    }

    fn fixture(reference: &str, target: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        for code in ["en", "fr"] {
            fs::create_dir(dir.path().join(code)).unwrap();
        }
        let reference_path = dir.path().join("en/translation.json");
        let target_path = dir.path().join("fr/translation.json");
        fs::write(&reference_path, reference).unwrap();
        fs::write(&target_path, target).unwrap();
        Fixture {
            reference: reference_path,
            target: target_path,
            output: dir.path().join("fr_aligned.json"),
            _dir: dir,
        }
    }

    #[test]
    fn writes_aligned_output_and_leaves_inputs_alone() {
        let target_text = r#"{"bye": "Au revoir", "hello": "Bonjour", "extra": "é"}"#;
        let f = fixture(r#"{"hello": "Hello", "bye": "Bye", "stale": "Old"}"#, target_text);

        let alignment = align_files(&f.reference, &f.target, &f.output).unwrap();
        assert_eq!(alignment.dropped, vec![KeyPath::from("stale")]);
        assert_eq!(alignment.appended, vec![KeyPath::from("extra")]);

        let written = fs::read_to_string(&f.output).unwrap();
        assert_eq!(
            written,
            "{\n  \"hello\": \"Bonjour\",\n  \"bye\": \"Au revoir\",\n  \"extra\": \"é\"\n}"
        );
        assert_eq!(fs::read_to_string(&f.target).unwrap(), target_text);
    }

    #[test]
    fn target_numbers_are_written_verbatim() {
        let f = fixture(
            r#"{"id": 0, "limit": 1}"#,
            r#"{"limit": 12345678901234567890123, "id": 3}"#,
        );

        align_files(&f.reference, &f.target, &f.output).unwrap();
        let written = fs::read_to_string(&f.output).unwrap();
        assert_eq!(
            written,
            "{\n  \"id\": 3,\n  \"limit\": 12345678901234567890123\n}"
        );
    }

    #[test]
    fn already_aligned_file_is_unchanged() {
        let text = "{\n  \"a\": {\n    \"b\": \"x\"\n  }\n}";
        let f = fixture(text, text);

        let aligned = AlignedFile::prepare(&f.reference, &f.target).unwrap();
        assert!(aligned.is_unchanged());
        assert!(aligned.preview("fr", "out").is_empty());
    }

    #[test]
    fn preview_does_not_write() {
        let f = fixture(r#"{"a": 1, "b": 2}"#, r#"{"b": 2, "a": 1}"#);

        let aligned = AlignedFile::prepare(&f.reference, &f.target).unwrap();
        assert!(!aligned.is_unchanged());
        assert!(!aligned.preview("fr", "out").is_empty());
        assert!(!f.output.exists());
    }

    #[test]
    fn missing_target_fails() {
        let f = fixture("{}", "{}");
        fs::remove_file(&f.target).unwrap();

        let err = align_files(&f.reference, &f.target, &f.output).unwrap_err();
        assert!(matches!(err, LocaleError::Read { .. }));
        assert!(!f.output.exists());
    }

    #[test]
    fn malformed_reference_fails() {
        let f = fixture("{not json", "{}");
        let err = align_files(&f.reference, &f.target, &f.output).unwrap_err();
        assert!(matches!(err, LocaleError::Parse { .. }));
    }
}
