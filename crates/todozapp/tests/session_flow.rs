//! End-to-end engine flow against the built-in sample collection: filter,
//! page, mutate, and check the derived view at each step.

use todozapp::engine::{TodoView, ViewOptions};
use todozapp::filter::StatusFilter;
use todozapp::pager::PageItem;
use todozapp::source::{DataSource, SampleSource};

fn setup() -> TodoView {
    let records = SampleSource.fetch().unwrap();
    TodoView::with_records(records, ViewOptions::default())
}

#[test]
fn test_first_render_shows_page_one_of_two() {
    let view = setup();
    let state = view.view();

    assert_eq!(state.filtered_count, 12);
    assert_eq!(state.total_pages, 2);
    assert_eq!(state.visible.len(), 10);
    assert_eq!(state.visible[0].text, "Plan the sprint");
    assert_eq!(
        state.controls,
        vec![PageItem::Page(1), PageItem::Page(2)]
    );
}

#[test]
fn test_second_page_holds_the_remainder() {
    let mut view = setup();
    view.set_page(2);

    let state = view.view();
    assert_eq!(state.visible.len(), 2);
    assert_eq!(state.visible[0].text, "Fix bugs");
    assert_eq!(state.visible[1].text, "Update dependencies");
}

#[test]
fn test_search_then_status_narrows_the_view() {
    let mut view = setup();
    view.set_search("the");
    view.set_status(StatusFilter::Pending);

    let state = view.view();
    // "Plan the sprint" and "Triage the backlog" are the pending "the" matches.
    assert_eq!(state.filtered_count, 2);
    assert_eq!(state.total_pages, 1);
    assert!(state.controls.is_empty());
}

#[test]
fn test_date_range_filters_on_calendar_order() {
    let mut view = setup();
    view.set_from(Some("2024-07-07".parse().unwrap()));
    view.set_to(Some("2024-07-09".parse().unwrap()));

    let state = view.view();
    let ids: Vec<u64> = state.visible.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 8, 9]);
}

#[test]
fn test_mutations_flow_through_to_the_view() {
    let mut view = setup();

    let new_id = view.add("Ship the release").map(|r| r.id).unwrap();
    assert_eq!(new_id, 13);
    assert_eq!(view.view().visible[0].text, "Ship the release");

    view.toggle(new_id);
    view.set_status(StatusFilter::Completed);
    let state = view.view();
    assert_eq!(state.filtered_count, 6);
    assert_eq!(state.visible[0].id, new_id);

    view.remove(new_id);
    assert_eq!(view.view().filtered_count, 5);
}

#[test]
fn test_filter_shrink_leaves_the_page_alone() {
    let mut view = setup();
    view.set_page(2);
    view.set_search("dependencies");

    // One match, one page, but the current page is still 2: empty slice.
    let state = view.view();
    assert_eq!(state.filtered_count, 1);
    assert_eq!(state.current_page, 2);
    assert!(state.visible.is_empty());

    view.set_page(1);
    assert_eq!(view.view().visible.len(), 1);
}

#[test]
fn test_stats_for_the_sample_collection() {
    let view = setup();
    let stats = view.stats();
    assert_eq!(stats.total, 12);
    assert_eq!(stats.completed, 5);
    assert_eq!(stats.pending, 7);
    assert_eq!(stats.completion_rate, 42);
}
