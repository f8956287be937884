use super::model::Event;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const ALL: &str = "All";

/// One selector of a facet: the "All" wildcard or an exact value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum FacetValue {
    #[default]
    All,
    Value(String),
}

impl FacetValue {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetValue::All => true,
            FacetValue::Value(expected) => expected == value,
        }
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        match value {
            ALL => FacetValue::All,
            value => FacetValue::Value(value.to_string()),
        }
    }
}

impl From<FacetValue> for String {
    fn from(value: FacetValue) -> Self {
        value.to_string()
    }
}

impl Display for FacetValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetValue::All => write!(f, "{}", ALL),
            FacetValue::Value(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub venue: FacetValue,
    pub club: FacetValue,
    pub day: FacetValue,
}

impl Selection {
    pub fn matches(&self, event: &Event) -> bool {
        self.venue.matches(&event.venue)
            && self.club.matches(event.club_name())
            && self.day.matches(&event.date.day)
    }

    pub fn is_cleared(&self) -> bool {
        *self == Selection::default()
    }
}

/// Rules applied before any user selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Hide events that aren't run by a club
    pub exclude_general_club: bool,
}

impl FilterPolicy {
    pub fn admits(&self, event: &Event) -> bool {
        !(self.exclude_general_club && event.is_general())
    }
}

pub fn filter_events(events: &[Event], policy: FilterPolicy, selection: &Selection) -> Vec<Event> {
    events
        .iter()
        .filter(|event| policy.admits(event) && selection.matches(event))
        .cloned()
        .collect()
}

/// Options offered for each facet, each list starting with "All"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub venues: Vec<FacetValue>,
    pub clubs: Vec<FacetValue>,
    pub days: Vec<FacetValue>,
}

/// Where facet options come from: the loaded events, or a fixed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetSource {
    Derived,
    Static {
        venues: Vec<String>,
        clubs: Vec<String>,
        days: Vec<String>,
    },
}

impl Default for FacetSource {
    fn default() -> Self {
        FacetSource::Static {
            venues: ["Seminar Hall", "SDPK", "Placement Auditorium"]
                .map(String::from)
                .to_vec(),
            clubs: (1..=5).map(|n| format!("Club {}", n)).collect(),
            days: ["14", "15"].map(String::from).to_vec(),
        }
    }
}

impl FacetSource {
    /// `events` is expected in canonical order, so derived days come out ascending
    pub fn options(&self, events: &[Event], policy: FilterPolicy) -> Facets {
        match self {
            FacetSource::Derived => {
                let visible = events.iter().filter(|event| policy.admits(event)).collect_vec();

                Facets {
                    venues: with_wildcard(visible.iter().map(|event| event.venue.as_str())),
                    clubs: with_wildcard(visible.iter().map(|event| event.club_name())),
                    days: with_wildcard(visible.iter().map(|event| event.date.day.as_str())),
                }
            }
            FacetSource::Static {
                venues,
                clubs,
                days,
            } => Facets {
                venues: with_wildcard(venues.iter().map(String::as_str)),
                clubs: with_wildcard(clubs.iter().map(String::as_str)),
                days: with_wildcard(days.iter().map(String::as_str)),
            },
        }
    }
}

fn with_wildcard<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetValue> {
    std::iter::once(FacetValue::All)
        .chain(
            values
                .filter(|value| !value.is_empty())
                .unique()
                .map(FacetValue::from),
        )
        .unique()
        .collect()
}
