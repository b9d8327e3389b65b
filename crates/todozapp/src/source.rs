//! Data-source collaborators: where a record collection comes from.
//!
//! The engine takes a plain `Vec<TodoRecord>` and does not care where it came
//! from. [`DataSource`] is the seam: the built-in [`SampleSource`] fixture for
//! offline use, and [`RemoteSource`] for the demo todos API.

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::TodoRecord;

pub trait DataSource {
    fn fetch(&self) -> Result<Vec<TodoRecord>>;
}

/// The built-in starter collection, most recent first. Used when no remote
/// source is configured, and as the fallback fixture in tests.
pub struct SampleSource;

impl SampleSource {
    pub fn records() -> Vec<TodoRecord> {
        // (id, text, completed, created_on)
        let seed: [(u64, &str, bool, &str); 12] = [
            (1, "Plan the sprint", false, "2024-07-15"),
            (2, "Build a prototype", true, "2024-07-14"),
            (3, "Triage the backlog", false, "2024-07-13"),
            (4, "Study algorithms", true, "2024-07-12"),
            (5, "Practice coding", false, "2024-07-11"),
            (6, "Read documentation", false, "2024-07-10"),
            (7, "Write tests", true, "2024-07-09"),
            (8, "Deploy application", false, "2024-07-08"),
            (9, "Review code", true, "2024-07-07"),
            (10, "Optimize performance", false, "2024-07-06"),
            (11, "Fix bugs", true, "2024-07-05"),
            (12, "Update dependencies", false, "2024-07-04"),
        ];
        seed.into_iter()
            .map(|(id, text, completed, date)| {
                let mut record = TodoRecord::new(
                    id,
                    text,
                    // Literals above are valid ISO dates.
                    date.parse().unwrap_or_default(),
                );
                record.completed = completed;
                record
            })
            .collect()
    }
}

impl DataSource for SampleSource {
    fn fetch(&self) -> Result<Vec<TodoRecord>> {
        Ok(Self::records())
    }
}

/// One todo as the demo API serves it. The API has no creation date, so a
/// missing `date` field falls back to today.
#[derive(Debug, Deserialize)]
struct WireTodo {
    id: u64,
    #[serde(rename = "todo")]
    text: String,
    completed: bool,
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct WirePage {
    todos: Vec<WireTodo>,
}

impl WireTodo {
    fn into_record(self, today: NaiveDate) -> TodoRecord {
        let mut record = TodoRecord::new(self.id, self.text, self.date.unwrap_or(today));
        record.completed = self.completed;
        record
    }
}

/// Fetches the collection from a JSON endpoint shaped like the demo todos API:
/// `{"todos": [{"id": 1, "todo": "...", "completed": false}, ...]}`.
pub struct RemoteSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl DataSource for RemoteSource {
    fn fetch(&self) -> Result<Vec<TodoRecord>> {
        let response = self.client.get(&self.url).send()?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "{} returned {}",
                self.url,
                response.status()
            )));
        }
        let page: WirePage = response.json()?;
        let today = Local::now().date_naive();
        Ok(page
            .todos
            .into_iter()
            .map(|todo| todo.into_record(today))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_fixture_shape() {
        let records = SampleSource::records();
        assert_eq!(records.len(), 12);
        // Most recent first, ids ascending with age.
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].created_on, "2024-07-15".parse().unwrap());
        assert_eq!(records[11].created_on, "2024-07-04".parse().unwrap());
        assert!(records
            .windows(2)
            .all(|pair| pair[0].created_on > pair[1].created_on));
        assert_eq!(records.iter().filter(|r| r.completed).count(), 5);
    }

    #[test]
    fn test_wire_todo_mapping() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let page: WirePage = serde_json::from_str(
            r#"{"todos": [
                {"id": 3, "todo": "Do the thing", "completed": true, "date": "2024-02-01"},
                {"id": 4, "todo": "Undated", "completed": false}
            ]}"#,
        )
        .unwrap();

        let records: Vec<TodoRecord> = page
            .todos
            .into_iter()
            .map(|t| t.into_record(today))
            .collect();
        assert_eq!(records[0].id, 3);
        assert_eq!(records[0].text, "Do the thing");
        assert!(records[0].completed);
        assert_eq!(records[0].created_on, "2024-02-01".parse().unwrap());
        assert_eq!(records[1].created_on, today);
    }
}
