//! Output settings for the introduction file.
//!
//! Nothing here is read from disk or the environment: the binary always
//! writes with [`OutputConfig::default`].

use std::path::PathBuf;

/// File written in the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "my-introduction.json";

/// Spaces per indentation level in the written JSON.
pub const DEFAULT_INDENT: usize = 2;

/// Where and how the introduction is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Destination file, relative paths resolve against the working directory.
    pub path: PathBuf,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            indent: DEFAULT_INDENT,
        }
    }
}

impl OutputConfig {
    /// Default settings with a different destination.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
