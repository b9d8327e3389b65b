//! Filter criteria and the record-match predicate.
//!
//! Filtering is a pure function over the collection: given the same records and
//! the same [`FilterCriteria`], [`FilterCriteria::apply`] returns the same
//! ordered subsequence every time. It runs on every keystroke in an interactive
//! client, so it stays O(n) with no per-record allocation beyond the result
//! list itself.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::model::TodoRecord;

/// Which completion states to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!(
                "invalid status filter '{}' (expected all, pending, or completed)",
                other
            )),
        }
    }
}

/// The combination of search text, date range, and status selector that
/// determines which records are visible. Transient: recomputed from user
/// input, never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against record text. Empty matches all.
    pub search: String,
    /// Inclusive lower bound on `created_on`.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on `created_on`.
    pub to: Option<NaiveDate>,
    pub status: StatusFilter,
}

impl FilterCriteria {
    /// True when every active clause matches. Clauses are ANDed; an unset
    /// clause always matches.
    pub fn matches(&self, record: &TodoRecord) -> bool {
        self.matches_lowered(record, &self.search.to_lowercase())
    }

    fn matches_lowered(&self, record: &TodoRecord, needle: &str) -> bool {
        if !needle.is_empty() && !record.text.to_lowercase().contains(needle) {
            return false;
        }
        if let Some(from) = self.from {
            if record.created_on < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.created_on > to {
                return false;
            }
        }
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !record.completed,
            StatusFilter::Completed => record.completed,
        }
    }

    /// The ordered subsequence of `records` satisfying all active clauses.
    pub fn apply<'a>(&self, records: &'a [TodoRecord]) -> Vec<&'a TodoRecord> {
        // Lowercase the needle once, not per record.
        let needle = self.search.to_lowercase();
        records
            .iter()
            .filter(|r| self.matches_lowered(r, &needle))
            .collect()
    }
}
