//! Shared types, error model, and output settings for the agent introduction.
//!
//! This crate is the foundation depended on by the other workspace crates.
//! It provides:
//! - [`IntroductionError`]: the unified error type
//! - The [`IntroductionRecord`] and its fixed field values
//! - Output settings ([`OutputConfig`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{DEFAULT_INDENT, DEFAULT_OUTPUT_FILE, OutputConfig};
pub use error::{IntroductionError, Result};
pub use types::{
    AGENT_NAME, CAPABILITIES, GREETING, IntroductionRecord, format_timestamp, parse_timestamp,
};
