use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document;
use crate::error::{LocaleError, LocaleResult};

/// Where the locale files live.
///
/// Each locale is a directory under `root` holding a file named `file_name`.
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocaleConfig {
    /// Directory containing one subdirectory per locale.
    pub root: PathBuf,
    /// Locale whose file is the source of truth for key order and presence.
    pub reference: String,
    /// Locale being aligned or checked.
    pub target: String,
    /// File name inside each locale directory.
    pub file_name: String,
    /// Aligned output file, relative to `root`. Defaults to
    /// `<target>_aligned.json`.
    pub output: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            reference: "en".into(),
            target: "fr".into(),
            file_name: "translation.json".into(),
            output: None,
        }
    }
}

impl LocaleConfig {
    /// Parse a TOML config; missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> LocaleResult<Self> {
        let text = document::read_text(path)?;
        Self::from_toml_str(&text).map_err(|source| LocaleError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path of the translation file for locale `code`.
    pub fn locale_path(&self, code: &str) -> PathBuf {
        self.root.join(code).join(&self.file_name)
    }

    pub fn reference_path(&self) -> PathBuf {
        self.locale_path(&self.reference)
    }

    pub fn target_path(&self) -> PathBuf {
        self.locale_path(&self.target)
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => self.root.join(output),
            None => self.root.join(format!("{}_aligned.json", self.target)),
        }
    }
}
