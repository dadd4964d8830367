//! Business-invariant checks over a batch of movie catalogue records.
//!
//! A catalogue search returns a `results` array; this crate normalizes it
//! into typed records and checks the batch against the catalogue's rules
//! (poster uniqueness and URLs, genre scores, title palindromes and
//! containment, tiered sort order). The architecture keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (record model, validators).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and response files).
//!
//! [`report`] runs the validators over a batch and renders the outcome for
//! the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
