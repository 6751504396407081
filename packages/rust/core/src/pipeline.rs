//! End-to-end run: build → encode → write.

use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use introduction_shared::{IntroductionRecord, OutputConfig, Result};

use crate::builder::introduce_myself;
use crate::writer::{write_introduction, write_with_config};

/// Result of a run.
#[derive(Debug)]
pub struct IntroduceResult {
    /// File that was written.
    pub path: PathBuf,
    /// Timestamp recorded in the file.
    pub timestamp: NaiveDateTime,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Build the introduction and write it to `my-introduction.json`.
pub fn run() -> Result<IntroduceResult> {
    let start = Instant::now();

    let record = introduce_myself();
    let path = write_introduction(&record)?;

    Ok(finish(path, &record, start))
}

/// Build the introduction and write it as `config` describes.
///
/// A write failure is returned as-is; nothing is retried.
#[instrument(skip_all, fields(path = %config.path.display()))]
pub fn run_with(config: &OutputConfig) -> Result<IntroduceResult> {
    let start = Instant::now();

    let record = introduce_myself();
    write_with_config(&record, config)?;

    Ok(finish(config.path.clone(), &record, start))
}

fn finish(path: PathBuf, record: &IntroductionRecord, start: Instant) -> IntroduceResult {
    let result = IntroduceResult {
        path,
        timestamp: record.timestamp,
        elapsed: start.elapsed(),
    };
    info!(
        timestamp = %result.timestamp,
        elapsed = ?result.elapsed,
        "introduction complete"
    );
    result
}
