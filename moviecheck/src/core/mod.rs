//! Deterministic, pure checking logic.
//!
//! Core modules must be free of I/O side effects. They operate on an
//! immutable [`batch::Batch`] and return deterministic results suitable for
//! tests.

pub mod batch;
pub mod error;
pub mod expectations;
pub mod genres;
pub mod palindrome;
pub mod posters;
pub mod record;
pub mod titles;
pub mod types;
pub mod url;
