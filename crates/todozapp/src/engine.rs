//! # The TodoView Engine
//!
//! [`TodoView`] owns the canonical record collection, the active
//! [`FilterCriteria`], and the [`PageState`], and exposes every operation a
//! presentation layer needs: record mutations, filter and page intents, and
//! the derived [`ViewState`] to render.
//!
//! ## Ownership
//!
//! The collection is owned exclusively by the engine. Clients never mutate
//! records directly—they call the operations here and re-query the view. The
//! collection is most-recent-first: new records are prepended.
//!
//! ## Mutations Never Fail
//!
//! `add`/`toggle`/`remove`/`edit` are total. Blank text and unknown ids are
//! silent no-ops (see the crate docs for why). The only observable "failure"
//! is `add` returning `None` so a client can skip its success path.
//!
//! ## Page Clamping
//!
//! When a filter change shrinks the result set below the current page's range,
//! the visible slice goes empty and the page number stays where it was. That
//! is the historical behavior and the default. Setting
//! [`ViewOptions::clamp_on_filter_change`] instead pulls `current` back to the
//! last non-empty page after every mutation or criteria change.

use chrono::{Local, NaiveDate};

use crate::filter::{FilterCriteria, StatusFilter};
use crate::model::{normalize_text, TodoRecord};
use crate::pager::{PageItem, PageState};

#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Fixed page size.
    pub per_page: usize,
    /// Pull the current page back into range when filtering shrinks the set.
    pub clamp_on_filter_change: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            per_page: 10,
            clamp_on_filter_change: false,
        }
    }
}

/// Whole-collection counters, independent of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Whole-number percentage, 0 for an empty collection.
    pub completion_rate: u8,
}

/// Everything a presentation layer needs to render one frame: the visible
/// slice, the page-control row, and the counts behind them.
#[derive(Debug)]
pub struct ViewState<'a> {
    pub visible: Vec<&'a TodoRecord>,
    pub controls: Vec<PageItem>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

pub struct TodoView {
    records: Vec<TodoRecord>,
    criteria: FilterCriteria,
    page: PageState,
    clamp_on_filter_change: bool,
}

impl TodoView {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            page: PageState::new(options.per_page),
            clamp_on_filter_change: options.clamp_on_filter_change,
        }
    }

    pub fn with_records(records: Vec<TodoRecord>, options: ViewOptions) -> Self {
        let mut view = Self::new(options);
        view.records = records;
        view
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.page.current
    }

    // --- Record mutations -------------------------------------------------

    /// Prepends a new pending record dated today, with the next id
    /// (`max(existing) + 1`). Blank text is a no-op returning `None`.
    pub fn add(&mut self, text: &str) -> Option<&TodoRecord> {
        let text = normalize_text(text)?;
        let id = self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.records
            .insert(0, TodoRecord::new(id, text, Local::now().date_naive()));
        self.after_change();
        self.records.first()
    }

    /// Flips the completion flag on the matching record.
    pub fn toggle(&mut self, id: u64) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.completed = !record.completed;
        }
        self.after_change();
    }

    /// Removes the matching record.
    pub fn remove(&mut self, id: u64) {
        self.records.retain(|r| r.id != id);
        self.after_change();
    }

    /// Replaces the text on the matching record, leaving everything else
    /// untouched. Blank text is a no-op.
    pub fn edit(&mut self, id: u64, new_text: &str) {
        let Some(text) = normalize_text(new_text) else {
            return;
        };
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.text = text;
        }
        self.after_change();
    }

    /// Replaces the entire collection (the data-source fetch completing) and
    /// resets to the first page.
    pub fn replace_all(&mut self, records: Vec<TodoRecord>) {
        self.records = records;
        self.page.current = 1;
    }

    // --- Filter and page intents ------------------------------------------

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.after_change();
    }

    pub fn set_from(&mut self, from: Option<NaiveDate>) {
        self.criteria.from = from;
        self.after_change();
    }

    pub fn set_to(&mut self, to: Option<NaiveDate>) {
        self.criteria.to = to;
        self.after_change();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.after_change();
    }

    /// Jumps to the requested page. Requests below 1 clamp to 1; requests past
    /// the last page are honored (yielding an empty slice) unless clamping is
    /// enabled.
    pub fn set_page(&mut self, page: usize) {
        self.page.current = page.max(1);
        if self.clamp_on_filter_change {
            self.clamp_page();
        }
    }

    /// Steps forward one page, stopping at the last one.
    pub fn next_page(&mut self) {
        let last = self.page.total_pages(self.filtered_len()).max(1);
        self.page.current = self.page.current.saturating_add(1).min(last);
    }

    /// Steps back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.page.current = (self.page.current - 1).max(1);
    }

    // --- Derivations ------------------------------------------------------

    /// Filters, windows, and computes the page-control row. Pure with respect
    /// to the engine state: call it as often as the client re-renders.
    pub fn view(&self) -> ViewState<'_> {
        let filtered = self.criteria.apply(&self.records);
        let filtered_count = filtered.len();
        let window = self.page.window(filtered_count);
        ViewState {
            visible: filtered[window].to_vec(),
            controls: self.page.numbers(filtered_count),
            current_page: self.page.current,
            total_pages: self.page.total_pages(filtered_count),
            filtered_count,
        }
    }

    pub fn stats(&self) -> Stats {
        let total = self.records.len();
        let completed = self.records.iter().filter(|r| r.completed).count();
        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };
        Stats {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }

    // --- Internals --------------------------------------------------------

    fn filtered_len(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.criteria.matches(r))
            .count()
    }

    fn after_change(&mut self) {
        if self.clamp_on_filter_change {
            self.clamp_page();
        }
    }

    fn clamp_page(&mut self) {
        let last = self.page.total_pages(self.filtered_len()).max(1);
        self.page.current = self.page.current.min(last);
    }
}
