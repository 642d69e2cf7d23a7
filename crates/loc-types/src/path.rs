use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The location of a mapping entry: its keys from the root, joined by `.`.
///
/// Keys are joined verbatim, so a key that itself contains a dot is
/// indistinguishable from a nested path. Ordering is plain string ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    /// Separator placed between consecutive keys.
    pub const SEPARATOR: char = '.';

    /// The empty path, naming the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path of `key` inside the mapping at this path.
    pub fn child(&self, key: &str) -> Self {
        if self.is_root() {
            Self(key.to_owned())
        } else {
            let mut path = String::with_capacity(self.0.len() + 1 + key.len());
            path.push_str(&self.0);
            path.push(Self::SEPARATOR);
            path.push_str(key);
            Self(path)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl Borrow<str> for KeyPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}
