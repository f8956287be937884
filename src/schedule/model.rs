use serde::Serialize;
use std::str::FromStr;

/// Club value that marks an event as not run by any club
pub const GENERAL_CLUB: &str = "General";
/// Stand-in used for filtering when an event has no club
pub const NO_CLUB: &str = "None";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: EventDate,
    pub time: String,
    pub venue: String,
    pub club: Option<String>,
    pub status: EventStatus,
    pub image: Option<String>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        title: String,
        date: EventDate,
        time: String,
        venue: String,
        club: Option<String>,
        status: EventStatus,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            date,
            time,
            venue,
            club: club.filter(|club| !club.is_empty()),
            status,
            image,
        }
    }

    pub fn club_name(&self) -> &str {
        self.club.as_deref().unwrap_or(NO_CLUB)
    }

    pub fn is_general(&self) -> bool {
        self.club.as_deref() == Some(GENERAL_CLUB)
    }

    pub fn link(&self) -> String {
        format!("/event/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EventDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl EventDate {
    pub fn new(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        }
    }
}

/// Booking state of an event.
///
/// Anything that isn't a known status is kept as-is and treated as bookable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, strum::EnumString)]
pub enum EventStatus {
    #[strum(serialize = "Open", serialize = "Normal", serialize = "")]
    Open,
    #[strum(serialize = "Rest", serialize = "Break")]
    Rest,
    #[strum(serialize = "Sold Out", serialize = "SoldOut")]
    SoldOut,
    #[strum(default)]
    Other(String),
}

impl EventStatus {
    pub fn parse(status: &str) -> Self {
        // Infallible thanks to the default variant
        EventStatus::from_str(status.trim()).unwrap_or_else(|_| EventStatus::Other(status.to_string()))
    }

    pub fn is_bookable(&self) -> bool {
        !matches!(self, EventStatus::Rest | EventStatus::SoldOut)
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            EventStatus::Rest => "Break",
            _ => "View Event",
        }
    }
}
