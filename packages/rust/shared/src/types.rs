//! The introduction record written to disk.

use chrono::{NaiveDateTime, SubsecRound, Timelike};
use serde::{Deserialize, Serialize};

/// Name the agent introduces itself with.
pub const AGENT_NAME: &str = "Syd Prototipo";

/// Greeting sent to the team.
pub const GREETING: &str = "Ciao team! Analizzo documenti";

/// Capability labels, in the order they are written.
pub const CAPABILITIES: [&str; 3] = ["PDF analysis", "Food safety", "Commercial docs"];

// ---------------------------------------------------------------------------
// IntroductionRecord
// ---------------------------------------------------------------------------

/// The `my-introduction.json` document.
///
/// Field order here is the key order in the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroductionRecord {
    /// Agent name.
    pub agent: String,
    /// Greeting message.
    pub message: String,
    /// Capability labels.
    pub capabilities: Vec<String>,
    /// Local wall-clock time the record was built, without UTC offset.
    #[serde(with = "iso_local")]
    pub timestamp: NaiveDateTime,
}

impl IntroductionRecord {
    /// Build the record stamped with `timestamp`.
    ///
    /// The timestamp is truncated to whole microseconds so the value held in
    /// memory is exactly the one that ends up in the file.
    pub fn at(timestamp: NaiveDateTime) -> Self {
        Self {
            agent: AGENT_NAME.to_string(),
            message: GREETING.to_string(),
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            timestamp: timestamp.trunc_subsecs(6),
        }
    }
}

// ---------------------------------------------------------------------------
// Timestamp text form
// ---------------------------------------------------------------------------

/// Render a local date-time as ISO-8601 with microsecond precision.
///
/// A zero microsecond component is dropped entirely, giving
/// `YYYY-MM-DDTHH:MM:SS` instead of a `.000000` suffix.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    if timestamp.nanosecond() / 1_000 == 0 {
        timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Parse an ISO-8601 local date-time, with or without fractional seconds.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    s.parse::<NaiveDateTime>()
}

mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(timestamp))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .expect("valid date")
            .and_hms_micro_opt(12, 34, 56, micro)
            .expect("valid time")
    }

    #[test]
    fn record_carries_fixed_values() {
        let record = IntroductionRecord::at(fixed_time(789_012));
        assert_eq!(record.agent, "Syd Prototipo");
        assert_eq!(record.message, "Ciao team! Analizzo documenti");
        assert_eq!(
            record.capabilities,
            vec!["PDF analysis", "Food safety", "Commercial docs"]
        );
    }

    #[test]
    fn timestamp_truncated_to_micros() {
        let precise = fixed_time(0)
            .with_nanosecond(789_012_345)
            .expect("valid nanos");
        let record = IntroductionRecord::at(precise);
        assert_eq!(record.timestamp, fixed_time(789_012));
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(
            format_timestamp(&fixed_time(789_012)),
            "2024-05-01T12:34:56.789012"
        );
        assert_eq!(format_timestamp(&fixed_time(500)), "2024-05-01T12:34:56.000500");
        assert_eq!(format_timestamp(&fixed_time(0)), "2024-05-01T12:34:56");
    }

    #[test]
    fn timestamp_parsing_accepts_both_forms() {
        assert_eq!(
            parse_timestamp("2024-05-01T12:34:56.789012").expect("parse"),
            fixed_time(789_012)
        );
        assert_eq!(
            parse_timestamp("2024-05-01T12:34:56").expect("parse"),
            fixed_time(0)
        );
        assert!(parse_timestamp("yesterday at noon").is_err());
    }

    #[test]
    fn record_serialization_key_order() {
        let record = IntroductionRecord::at(fixed_time(789_012));
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"agent":"Syd Prototipo","message":"Ciao team! Analizzo documenti","capabilities":["PDF analysis","Food safety","Commercial docs"],"timestamp":"2024-05-01T12:34:56.789012"}"#
        );

        let parsed: IntroductionRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, record);
    }

    #[test]
    fn record_rejects_bad_timestamp() {
        let json = r#"{"agent":"a","message":"m","capabilities":[],"timestamp":"not a date"}"#;
        assert!(serde_json::from_str::<IntroductionRecord>(json).is_err());
    }
}
