//! Foundation types for locale tooling.
//!
//! Translation files are JSON trees whose objects map keys to either nested
//! objects or translated values. This crate models that tree, names locations
//! inside it, and reads and writes it without disturbing key order.
//!
//! # Key Types
//!
//! - [`Node`] / [`Scalar`] -- Insertion-ordered document tree
//! - [`KeyPath`] -- Dot-joined location of a mapping entry
//! - [`LocaleConfig`] -- Where the reference, target, and output files live
//! - [`LocaleError`] -- I/O, parse, and config failures

pub mod config;
pub mod document;
pub mod error;
pub mod node;
pub mod path;

pub use config::LocaleConfig;
pub use error::{LocaleError, LocaleResult};
pub use node::{Mapping, Node, Scalar};
pub use path::KeyPath;
