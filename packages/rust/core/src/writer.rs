//! JSON encoding of the introduction and the file write.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use introduction_shared::{
    DEFAULT_INDENT, IntroductionError, IntroductionRecord, OutputConfig, Result,
};

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode the record as pretty JSON with the default 2-space indent.
pub fn encode_introduction(record: &IntroductionRecord) -> Result<String> {
    encode_with_indent(record, DEFAULT_INDENT)
}

/// Encode the record as pretty JSON, `indent` spaces per level.
///
/// Keys keep the struct's field order. No trailing newline is appended.
pub fn encode_with_indent(record: &IntroductionRecord, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut ser)
        .map_err(IntroductionError::Encode)?;

    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write the record to `my-introduction.json` in the working directory.
///
/// Returns the path written.
pub fn write_introduction(record: &IntroductionRecord) -> Result<PathBuf> {
    let config = OutputConfig::default();
    write_with_config(record, &config)?;
    Ok(config.path)
}

/// Write the record to `path`, replacing whatever was there.
pub fn write_introduction_to(record: &IntroductionRecord, path: &Path) -> Result<()> {
    write_with_config(record, &OutputConfig::with_path(path))
}

#[instrument(skip_all, fields(path = %config.path.display()))]
pub(crate) fn write_with_config(record: &IntroductionRecord, config: &OutputConfig) -> Result<()> {
    let json = encode_with_indent(record, config.indent)?;

    // Truncates an existing file; the parent directory must already exist.
    std::fs::write(&config.path, &json).map_err(|e| IntroductionError::io(&config.path, e))?;

    info!(bytes = json.len(), "introduction written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Reading back
// ---------------------------------------------------------------------------

/// Read and decode an introduction file written earlier.
pub fn load_introduction(path: &Path) -> Result<IntroductionRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| IntroductionError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| IntroductionError::decode(path, e))
}
