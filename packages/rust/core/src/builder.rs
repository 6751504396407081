//! Construction of the introduction record.

use chrono::Local;
use introduction_shared::IntroductionRecord;

/// Build the introduction, stamped with the current local time.
///
/// Reads the system clock once; everything else is fixed.
pub fn introduce_myself() -> IntroductionRecord {
    let record = IntroductionRecord::at(Local::now().naive_local());
    tracing::debug!(timestamp = %record.timestamp, "introduction record built");
    record
}
