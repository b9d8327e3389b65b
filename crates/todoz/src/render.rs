//! Terminal rendering for the list view, the page-control row, and stats.

use chrono::{Local, NaiveDate};
use colored::*;
use todozapp::engine::{Stats, ViewState};
use todozapp::model::TodoRecord;
use todozapp::pager::PageItem;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 80;
const DATE_WIDTH: usize = 10;
const AGE_WIDTH: usize = 16;
const DONE_MARKER: &str = "●";
const PENDING_MARKER: &str = "○";

pub fn print_view(state: &ViewState<'_>, all_pages: bool) {
    if state.visible.is_empty() {
        println!("No todos found.");
    } else {
        for record in &state.visible {
            print_record(record);
        }
    }

    if all_pages {
        print_page_run(state.current_page, state.total_pages);
    } else {
        print_controls(&state.controls, state.current_page);
    }
}

fn print_record(record: &TodoRecord) {
    let marker = if record.completed {
        DONE_MARKER.green()
    } else {
        PENDING_MARKER.normal()
    };
    let id_str = format!("{}. ", record.id);

    // Leading indent, single-width marker, and the space after it.
    let fixed = 4 + id_str.width() + DATE_WIDTH + AGE_WIDTH + 2;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let text = truncate_to_width(&record.text, available);
    let padding = available.saturating_sub(text.width());

    let text_colored = if record.completed {
        text.strikethrough().dimmed()
    } else {
        text.normal()
    };

    println!(
        "  {} {}{}{}  {}{}",
        marker,
        id_str,
        text_colored,
        " ".repeat(padding),
        record.created_on.format("%Y-%m-%d").to_string().dimmed(),
        format_age(record.created_on).dimmed()
    );
}

fn print_controls(controls: &[PageItem], current: usize) {
    if controls.is_empty() {
        return;
    }
    let row: Vec<String> = controls
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current => format!("[{}]", n).bold().to_string(),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".dimmed().to_string(),
        })
        .collect();
    println!();
    println!("  Page: {}", row.join(" "));
}

/// Uncompressed page row, every number spelled out.
fn print_page_run(current: usize, total_pages: usize) {
    if total_pages <= 1 {
        return;
    }
    let row: Vec<String> = (1..=total_pages)
        .map(|n| {
            if n == current {
                format!("[{}]", n).bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();
    println!();
    println!("  Page: {}", row.join(" "));
}

pub fn print_stats(stats: &Stats) {
    println!("  Total:      {}", stats.total);
    println!("  Completed:  {}", stats.completed.to_string().green());
    println!("  Pending:    {}", stats.pending.to_string().yellow());
    println!("  Completion: {}%", stats.completion_rate);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    // Leave one column for the ellipsis marking the cut.
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_age(created_on: NaiveDate) -> String {
    let days = (Local::now().date_naive() - created_on).num_days().max(0) as u64;
    let formatter = timeago::Formatter::new();
    let age = formatter.convert(std::time::Duration::from_secs(days * 24 * 60 * 60));
    format!("{:>width$}", age, width = AGE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_a_string_that_exactly_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hi", 5), "hi");
    }

    #[test]
    fn test_truncate_cuts_and_marks_an_overlong_string() {
        assert_eq!(truncate_to_width("hello!", 5), "hell…");
        assert_eq!(truncate_to_width("hello!", 5).width(), 5);
    }
}
