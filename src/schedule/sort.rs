use super::model::{Event, EventDate};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref CLOCK_TIME: Regex =
        Regex::new(r"(\d{1,2}):(\d{2})").expect("Failed to create clock time regex");
    static ref MERIDIEM: Regex =
        Regex::new(r"(?i)^\s*([ap])\.?m\b").expect("Failed to create meridiem regex");
}

const DATE_FORMATS: [&str; 3] = ["%b %d %Y", "%B %d %Y", "%m %d %Y"];

/// Ordering key of an event: date first, then minutes since midnight of the start time.
///
/// An unparsable date is `None`, which sorts before every real date.
pub type SortKey = (Option<NaiveDate>, u32);

/// Orders events by date and then start time, keeping fetch order on ties
pub fn sort_events(events: &mut [Event]) {
    events.sort_by_cached_key(sort_key);
}

pub fn sort_key(event: &Event) -> SortKey {
    (parse_date(&event.date), parse_start_minutes(&event.time))
}

pub fn parse_date(date: &EventDate) -> Option<NaiveDate> {
    let (day, month, year) = (date.day.trim(), date.month.trim(), date.year.trim());

    if day.is_empty() || month.is_empty() || year.is_empty() {
        debug!(?date, "Incomplete date, sorting it first");
        return None;
    }

    let joined = format!("{} {} {}", month, day, year);
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&joined, format).ok());

    if parsed.is_none() {
        debug!(?date, "Unparsable date, sorting it first");
    }

    parsed
}

/// Minutes since midnight of the start of a "H:MM-H:MM" range, 0 when unreadable
pub fn parse_start_minutes(time: &str) -> u32 {
    let start = time.split('-').next().unwrap_or_default();

    let Some(captures) = CLOCK_TIME.captures(start) else {
        return 0;
    };

    let (Ok(mut hours), Ok(minutes)) = (captures[1].parse::<u32>(), captures[2].parse::<u32>())
    else {
        return 0;
    };

    let rest = &start[captures.get(0).map_or(start.len(), |m| m.end())..];

    if let Some(meridiem) = MERIDIEM.captures(rest) {
        let is_pm = meridiem[1].eq_ignore_ascii_case("p");

        hours = match (is_pm, hours) {
            (false, 12) => 0,
            (true, h) if h < 12 => h + 12,
            (_, h) => h,
        };
    }

    hours * 60 + minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::model::EventStatus;

    fn event(id: &str, date: EventDate, time: &str) -> Event {
        Event::new(
            id.to_string(),
            format!("Event {}", id),
            date,
            time.to_string(),
            "SDPK".to_string(),
            None,
            EventStatus::Open,
            None,
        )
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test_log::test]
    fn should_sort_same_day_events_by_start_time() {
        let mut events = vec![
            event("ten", EventDate::new("14", "Feb", "2026"), "10:00-11:00"),
            event("nine", EventDate::new("14", "Feb", "2026"), "9:00-10:00"),
        ];

        sort_events(&mut events);

        assert_eq!(ids(&events), vec!["nine", "ten"]);
    }

    #[test_log::test]
    fn should_sort_by_date_before_time() {
        let mut events = vec![
            event("late", EventDate::new("15", "Feb", "2026"), "8:00-9:00"),
            event("early", EventDate::new("14", "February", "2026"), "18:30-19:00"),
            event("jan", EventDate::new("30", "01", "2026"), "23:00-23:30"),
        ];

        sort_events(&mut events);

        assert_eq!(ids(&events), vec!["jan", "early", "late"]);
    }

    #[test_log::test]
    fn when_keys_are_equal_should_keep_fetch_order() {
        let mut events = vec![
            event("b", EventDate::new("14", "Feb", "2026"), "9:00-10:00"),
            event("a", EventDate::new("14", "Feb", "2026"), "09:00-09:30"),
            event("c", EventDate::new("14", "Feb", "2026"), "9:00"),
        ];

        sort_events(&mut events);

        assert_eq!(ids(&events), vec!["b", "a", "c"]);
    }

    #[test_log::test]
    fn when_date_is_malformed_should_sort_first() {
        let mut events = vec![
            event("valid", EventDate::new("1", "Jan", "1900"), "0:00-1:00"),
            event("broken", EventDate::new("99", "Xyz", "0000"), "12:00-13:00"),
            event("blank", EventDate::new("", "Feb", "2026"), "12:00-13:00"),
            event("blank_late", EventDate::new("14", "Feb", ""), "23:00-23:59"),
        ];

        sort_events(&mut events);

        assert_eq!(ids(&events), vec!["broken", "blank", "blank_late", "valid"]);
        assert_eq!(events.len(), 4);
    }

    #[test_log::test]
    fn when_time_is_unreadable_should_be_midnight() {
        assert_eq!(parse_start_minutes("TBA"), 0);
        assert_eq!(parse_start_minutes(""), 0);
        assert_eq!(parse_start_minutes("-10:00"), 0);
    }

    #[test_log::test]
    fn should_only_use_start_of_range() {
        assert_eq!(parse_start_minutes("9:05-10:00"), 545);
        assert_eq!(parse_start_minutes("Starts 14:30 - 16:00"), 870);
    }

    #[test_log::test]
    fn should_honor_twelve_hour_markers() {
        assert_eq!(parse_start_minutes("2:00 PM - 3:00 PM"), 840);
        assert_eq!(parse_start_minutes("12:15 am-1:00 am"), 15);
        assert_eq!(parse_start_minutes("12:00 p.m.-1:00 p.m."), 720);
        assert_eq!(parse_start_minutes("5pm-6pm"), 0);
        assert_eq!(parse_start_minutes("5:30pm-6pm"), 1050);
    }
}
