//! # Domain Model: Todo Records and Text Normalization
//!
//! A [`TodoRecord`] is a single task entry: numeric identity, description text,
//! a completion flag, and the calendar date it was created on.
//!
//! ## Invariants
//!
//! - `id` is unique within a collection and assigned monotonically
//!   (`max(existing) + 1`) on creation—the engine enforces this, not the type.
//! - `text` is never empty or whitespace-only. All text entering a record goes
//!   through [`normalize_text`] first.
//! - `created_on` is a real calendar date. It is compared as a date, never as a
//!   string: string comparison only coincides with chronological order for
//!   zero-padded ISO input, and we don't want to depend on that.
//!
//! ## Serialized Form
//!
//! `created_on` serializes as `YYYY-MM-DD` via chrono's `NaiveDate`, which keeps
//! the JSON shape interchangeable with the remote demo API (see `source.rs`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_on: NaiveDate,
}

impl TodoRecord {
    pub fn new(id: u64, text: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_on,
        }
    }
}

/// Trims the input and rejects empty or whitespace-only text.
///
/// Both `add` and `edit` validate through this function, so a record's text is
/// always trimmed and non-blank.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_record_is_pending() {
        let record = TodoRecord::new(1, "Water the plants", date("2024-07-15"));
        assert!(!record.completed);
        assert_eq!(record.text, "Water the plants");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_text("  hello  "), Some("hello".to_string()));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("\t\n"), None);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let record = TodoRecord::new(7, "Write tests", date("2024-07-09"));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2024-07-09\""));

        let loaded: TodoRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, record);
    }
}
