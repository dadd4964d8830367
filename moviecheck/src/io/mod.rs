//! I/O helpers for moviecheck commands.

pub mod config;
pub mod input;
