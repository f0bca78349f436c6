use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Error as _, Deserialize, Serialize};

use crate::services::classify::emoji_for;

/// Layout version written into every stored history envelope.
pub const HISTORY_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    /// Milliseconds since epoch. Missing on entries written by the
    /// unversioned layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub rating: u8,
    pub emoji: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

impl MoodEntry {
    /// Builds a new entry stamped at `now`. Repeated symptom ids are
    /// collapsed, keeping the first occurrence.
    pub fn new(rating: u8, symptoms: Vec<String>, now: DateTime<Utc>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(symptoms.len());
        for s in symptoms {
            if !unique.contains(&s) {
                unique.push(s);
            }
        }

        Self {
            date: now.date_naive(),
            timestamp: Some(now.timestamp_millis()),
            rating,
            emoji: emoji_for(rating).to_string(),
            symptoms: unique,
        }
    }
}

#[derive(Debug, Serialize)]
struct StoredHistoryRef<'a> {
    version: u32,
    entries: &'a [MoodEntry],
}

#[derive(Debug, Deserialize)]
struct StoredHistory {
    version: u32,
    entries: Vec<MoodEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredLayout {
    Versioned(StoredHistory),
    Legacy(Vec<MoodEntry>),
}

/// Serializes the whole history into the versioned envelope.
pub fn encode_history(entries: &[MoodEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&StoredHistoryRef {
        version: HISTORY_VERSION,
        entries,
    })
}

/// Parses a stored history, accepting both the versioned envelope and the
/// legacy bare array.
pub fn decode_history(raw: &str) -> Result<Vec<MoodEntry>, serde_json::Error> {
    match serde_json::from_str::<StoredLayout>(raw)? {
        StoredLayout::Legacy(entries) => Ok(entries),
        StoredLayout::Versioned(h) if h.version == HISTORY_VERSION => Ok(h.entries),
        StoredLayout::Versioned(h) => Err(serde_json::Error::custom(format!(
            "unsupported mood history version {}",
            h.version
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_new_entry_derives_date_and_emoji() {
        // 2026-02-10T23:59:00Z
        let entry = MoodEntry::new(7, vec!["anxiety".into()], at(1_770_767_940_000));
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
        assert_eq!(entry.timestamp, Some(1_770_767_940_000));
        assert_eq!(entry.emoji, "😊");
        assert_eq!(entry.symptoms, vec!["anxiety".to_string()]);
    }

    #[test]
    fn test_new_entry_collapses_duplicate_symptoms() {
        let entry = MoodEntry::new(
            3,
            vec!["work".into(), "anxiety".into(), "work".into()],
            at(0),
        );
        assert_eq!(entry.symptoms, vec!["work".to_string(), "anxiety".to_string()]);
    }

    #[test]
    fn test_encoded_layout_is_versioned() {
        let entry = MoodEntry::new(5, vec![], at(86_400_000));
        let json: serde_json::Value =
            serde_json::from_str(&encode_history(&[entry]).unwrap()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["entries"][0]["date"], "1970-01-02");
        assert_eq!(json["entries"][0]["timestamp"], 86_400_000);
        assert_eq!(json["entries"][0]["rating"], 5);
        assert_eq!(json["entries"][0]["symptoms"], serde_json::json!([]));
    }

    #[test]
    fn test_decode_legacy_array_without_timestamp() {
        let raw = r#"[{"date":"2025-03-01","rating":4,"emoji":"😐"}]"#;
        let entries = decode_history(raw).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, None);
        assert!(entries[0].symptoms.is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let raw = r#"{"version":2,"entries":[]}"#;
        assert!(decode_history(raw).is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_history("not json").is_err());
        assert!(decode_history(r#"{"entries":"nope"}"#).is_err());
    }
}
