use super::api::{APIError, EventStore};
use super::filter::{filter_events, FacetValue, Facets, Selection};
use super::model::Event;
use super::paginator::{Direction, Paginator};
use super::sort::sort_events;
use crate::config::model::ScheduleConfig;
use crate::viewport::ViewportClass;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use tracing::{debug, error, info};
use uuid::Uuid;

/// Identity of one loaded collection; a new one is minted on every load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CollectionId(Uuid);

impl CollectionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CollectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the presentation layer needs to draw the schedule
#[derive(Debug, Serialize)]
pub struct ScheduleSnapshot<'a> {
    pub collection_id: CollectionId,
    pub loading: bool,
    pub facets: Facets,
    pub selection: &'a Selection,
    pub items: &'a [Event],
    pub current_page: usize,
    pub total_pages: usize,
    pub direction: Direction,
}

/// State of the event schedule section.
///
/// Holds the canonical (sorted) events, the user's facet selection and the
/// pagination over the filtered result.
#[derive(Debug)]
pub struct ScheduleView {
    config: ScheduleConfig,
    viewport: ViewportClass,
    collection_id: CollectionId,
    events: Vec<Event>,
    selection: Selection,
    filtered: Vec<Event>,
    paginator: Paginator,
    loading: bool,
}

impl ScheduleView {
    pub fn new(config: ScheduleConfig, viewport: ViewportClass) -> Self {
        let page_size = viewport.pick(config.page_size);

        Self {
            config,
            viewport,
            collection_id: CollectionId::new(),
            events: Vec::new(),
            selection: Selection::default(),
            filtered: Vec::new(),
            paginator: Paginator::new(page_size, 0),
            loading: false,
        }
    }

    pub fn with_events(config: ScheduleConfig, viewport: ViewportClass, events: Vec<Event>) -> Self {
        let mut view = Self::new(config, viewport);
        view.set_events(events);
        view
    }

    /// Fetches the events once, leaving the schedule empty if that fails
    pub async fn load<S: EventStore>(&mut self, store: &S) {
        self.begin_load();
        let result = store.get_events().await;
        self.finish_load(result);
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Event>, APIError>) {
        let events = result.unwrap_or_else(|err| {
            error!("Failed to load events, showing none: {:?}", err);
            Vec::new()
        });

        self.set_events(events);
        self.loading = false;
    }

    /// Replaces the collection, starting over with no filters on the first page
    pub fn set_events(&mut self, mut events: Vec<Event>) {
        sort_events(&mut events);

        self.events = events;
        self.collection_id = CollectionId::new();
        self.selection = Selection::default();
        self.refilter();

        info!(
            collection = %self.collection_id,
            events = self.events.len(),
            "Schedule collection replaced"
        );
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn collection_id(&self) -> CollectionId {
        self.collection_id
    }

    /// All events in canonical order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }

    /// Nothing matches: the view shows "no events found" with a way to clear filters
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn facets(&self) -> Facets {
        self.config.facets.options(&self.events, self.config.policy)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_venue(&mut self, venue: impl Into<FacetValue>) -> bool {
        let selection = Selection {
            venue: venue.into(),
            ..self.selection.clone()
        };
        self.select(selection)
    }

    pub fn select_club(&mut self, club: impl Into<FacetValue>) -> bool {
        let selection = Selection {
            club: club.into(),
            ..self.selection.clone()
        };
        self.select(selection)
    }

    pub fn select_day(&mut self, day: impl Into<FacetValue>) -> bool {
        let selection = Selection {
            day: day.into(),
            ..self.selection.clone()
        };
        self.select(selection)
    }

    pub fn clear_filters(&mut self) -> bool {
        self.select(Selection::default())
    }

    fn select(&mut self, selection: Selection) -> bool {
        if selection == self.selection {
            return false;
        }

        debug!(?selection, "Selection changed");

        self.selection = selection;
        self.refilter();
        true
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Switches page size for the viewport, going back to the first page
    pub fn set_viewport(&mut self, viewport: ViewportClass) -> bool {
        if viewport == self.viewport {
            return false;
        }

        self.viewport = viewport;
        self.paginator
            .reset(viewport.pick(self.config.page_size), self.filtered.len());
        true
    }

    fn refilter(&mut self) {
        self.filtered = filter_events(&self.events, self.config.policy, &self.selection);
        self.paginator.reset(
            self.viewport.pick(self.config.page_size),
            self.filtered.len(),
        );
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn page_items(&self) -> &[Event] {
        self.paginator.page_items(&self.filtered)
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn direction(&self) -> Direction {
        self.paginator.direction()
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev_page()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to_page(page)
    }

    pub fn snapshot(&self) -> ScheduleSnapshot<'_> {
        ScheduleSnapshot {
            collection_id: self.collection_id,
            loading: self.loading,
            facets: self.facets(),
            selection: &self.selection,
            items: self.page_items(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            direction: self.direction(),
        }
    }
}
