//! Stable exit codes for moviecheck CLI commands.

/// Command succeeded and every check passed.
pub const OK: i32 = 0;
/// Command failed due to unreadable input/config, invalid tokens, or other errors.
pub const INVALID: i32 = 1;
/// `moviecheck check` ran and at least one invariant failed.
pub const FAILED: i32 = 2;
