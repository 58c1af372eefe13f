//! Formatting utilities.

pub mod signal;
