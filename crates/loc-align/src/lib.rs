//! Alignment of translation files to a reference locale.
//!
//! The aligned document keeps every key and value of the target but orders
//! shared keys the way the reference does, with target-only keys appended.
//! Reference-only keys are dropped and reported.
//!
//! # Key Types
//!
//! - [`align`] / [`align_with_report`] / [`Alignment`] -- Pure tree alignment
//! - [`AlignedFile`] / [`align_files`] -- File-level alignment
//! - [`preview`] -- Unified diff of what alignment would change

pub mod align;
pub mod files;
pub mod preview;

pub use align::{align, align_with_report, Alignment};
pub use files::{align_files, AlignedFile};
pub use preview::preview;
