use fest_schedule::config::model::{PerViewport, ScheduleConfig};
use fest_schedule::schedule::api::{APIError, EventStore, StaticEventStore};
use fest_schedule::schedule::filter::{FacetSource, FacetValue, FilterPolicy};
use fest_schedule::schedule::model::{Event, EventDate, EventStatus};
use fest_schedule::schedule::paginator::Direction;
use fest_schedule::schedule::view::ScheduleView;
use fest_schedule::viewport::ViewportClass;

struct FailingStore;

impl EventStore for FailingStore {
    async fn get_events(&self) -> Result<Vec<Event>, APIError> {
        Err(APIError::InvalidResponse(
            serde_json::from_str::<Vec<u8>>("not json").unwrap_err(),
        ))
    }
}

fn config(exclude_general_club: bool) -> ScheduleConfig {
    ScheduleConfig {
        page_size: PerViewport { wide: 6, narrow: 3 },
        policy: FilterPolicy {
            exclude_general_club,
        },
        facets: FacetSource::Derived,
    }
}

fn event(id: usize, venue: &str, club: &str, day: &str, time: &str) -> Event {
    Event::new(
        format!("ev-{:02}", id),
        format!("Event {}", id),
        EventDate::new(day, "Feb", "2026"),
        time.to_string(),
        venue.to_string(),
        Some(club.to_string()),
        EventStatus::Open,
        None,
    )
}

/// Thirteen club events on the 14th, one per hour from 8:00, alternating venues
fn thirteen_events() -> Vec<Event> {
    (0..13)
        .rev()
        .map(|i| {
            let venue = if i % 2 == 0 { "SDPK" } else { "Seminar Hall" };
            event(i, venue, "Club 1", "14", &format!("{}:00-{}:30", 8 + i, 8 + i))
        })
        .collect()
}

#[test_log::test(tokio::test)]
async fn when_fetch_fails_should_show_no_events() {
    let mut view = ScheduleView::new(config(false), ViewportClass::Wide);

    view.begin_load();
    assert!(view.is_loading());

    view.load(&FailingStore).await;

    assert!(!view.is_loading());
    assert!(view.events().is_empty());
    assert!(view.is_empty());
    assert_eq!(view.total_pages(), 0);
    assert!(view.page_items().is_empty());
    assert!(view.selection().is_cleared());
}

#[test_log::test(tokio::test)]
async fn should_load_bundled_events_in_canonical_order() {
    let mut view = ScheduleView::new(config(true), ViewportClass::Wide);

    view.load(&StaticEventStore::default()).await;

    assert!(!view.is_loading());
    assert_eq!(view.events().len(), 15);
    assert_eq!(view.filtered().len(), 11);
    assert!(view.filtered().iter().all(|e| !e.is_general()));

    let first = &view.page_items()[0];
    assert_eq!(first.title, "Robo Race Qualifiers");
    assert_eq!(view.events()[0].title, "Opening Ceremony");
}

#[test_log::test(tokio::test)]
async fn should_exclude_titles_from_bundled_events() {
    let mut view = ScheduleView::new(config(false), ViewportClass::Wide);

    view.load(&StaticEventStore::new(vec!["Lunch Break".to_string()]))
        .await;

    assert_eq!(view.events().len(), 13);
    assert!(view.events().iter().all(|e| e.title != "Lunch Break"));
}

#[test_log::test]
fn should_paginate_thirteen_events_into_three_pages() {
    let mut view = ScheduleView::with_events(config(false), ViewportClass::Wide, thirteen_events());

    assert_eq!(view.total_pages(), 3);
    assert_eq!(view.page_items().len(), 6);
    assert_eq!(view.page_items()[0].id, "ev-00");

    assert!(view.go_to_page(2));

    assert_eq!(view.direction(), Direction::Forward);
    assert_eq!(
        view.page_items().iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["ev-12"]
    );

    assert!(!view.next_page());
    assert_eq!(view.current_page(), 2);

    assert!(view.prev_page());
    assert_eq!(view.direction(), Direction::Backward);
    assert_eq!(view.current_page(), 1);
}

#[test_log::test]
fn when_a_selector_changes_should_go_back_to_first_page() {
    let mut view = ScheduleView::with_events(config(false), ViewportClass::Narrow, thirteen_events());
    view.go_to_page(3);

    assert!(view.select_venue("SDPK"));

    assert_eq!(view.current_page(), 0);
    assert_eq!(view.filtered().len(), 7);
    assert_eq!(view.total_pages(), 3);

    view.go_to_page(2);
    assert!(view.select_day("14"));
    assert_eq!(view.current_page(), 0);

    view.go_to_page(1);
    assert!(view.select_club("Club 2"));
    assert_eq!(view.current_page(), 0);
    assert!(view.is_empty());
}

#[test_log::test]
fn when_selection_is_unchanged_should_keep_page() {
    let mut view = ScheduleView::with_events(config(false), ViewportClass::Narrow, thirteen_events());
    view.go_to_page(2);

    assert!(!view.select_venue(FacetValue::All));

    assert_eq!(view.current_page(), 2);
}

#[test_log::test]
fn clear_filters_should_restore_everything() {
    let mut view = ScheduleView::with_events(config(false), ViewportClass::Wide, thirteen_events());
    view.select_venue("Nowhere");
    assert!(view.is_empty());

    assert!(view.clear_filters());

    assert_eq!(view.filtered().len(), 13);
    assert!(view.selection().is_cleared());
}

#[test_log::test]
fn when_viewport_class_changes_should_resize_pages_and_start_over() {
    let mut view = ScheduleView::with_events(config(false), ViewportClass::Wide, thirteen_events());
    view.go_to_page(1);

    assert!(view.set_viewport(ViewportClass::Narrow));

    assert_eq!(view.page_size(), 3);
    assert_eq!(view.total_pages(), 5);
    assert_eq!(view.current_page(), 0);

    assert!(!view.set_viewport(ViewportClass::Narrow));
}

#[test_log::test]
fn when_collection_is_replaced_should_reset_state() {
    let mut view = ScheduleView::with_events(config(false), ViewportClass::Wide, thirteen_events());
    let first_id = view.collection_id();
    view.select_venue("SDPK");
    view.go_to_page(1);

    view.set_events(thirteen_events());

    assert_ne!(view.collection_id(), first_id);
    assert!(view.selection().is_cleared());
    assert_eq!(view.current_page(), 0);
    assert_eq!(view.filtered().len(), 13);
}

#[test_log::test]
fn should_derive_facets_from_loaded_events() {
    let events = vec![
        event(1, "SDPK", "Club 2", "15", "10:00-11:00"),
        event(2, "Seminar Hall", "General", "14", "10:00-11:00"),
        event(3, "SDPK", "Club 1", "14", "9:00-10:00"),
    ];

    let view = ScheduleView::with_events(config(true), ViewportClass::Wide, events);
    let facets = view.facets();

    assert_eq!(facets.venues, vec![FacetValue::All, "SDPK".into()]);
    assert_eq!(
        facets.clubs,
        vec![FacetValue::All, "Club 1".into(), "Club 2".into()]
    );
    assert_eq!(facets.days, vec![FacetValue::All, "14".into(), "15".into()]);
}

#[test_log::test]
fn snapshot_should_serialize_for_presentation() {
    let view = ScheduleView::with_events(config(false), ViewportClass::Wide, thirteen_events());

    let json = serde_json::to_value(view.snapshot()).unwrap();

    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["selection"]["venue"], "All");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["facets"]["days"][1], "14");
}
