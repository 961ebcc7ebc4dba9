use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::queries::sort::by_date_asc;
use crate::types::{Document, Event, EventType, Project};

/// Most event-type markers drawn under a calendar day before collapsing into an overflow dot.
pub const MAX_DAY_MARKERS: usize = 3;

/// Records placed on the calendar.
pub trait Dated {
    /// Calendar day of the record.
    fn date(&self) -> NaiveDate;

    /// Exact moment of the record. Date-only records sit at midnight.
    fn instant(&self) -> NaiveDateTime {
        self.date().and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default())
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }

    fn instant(&self) -> NaiveDateTime {
        (**self).instant()
    }
}

impl Dated for Event {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn instant(&self) -> NaiveDateTime {
        self.starts_at()
    }
}

impl Dated for Project {
    fn date(&self) -> NaiveDate {
        self.due_date
    }
}

impl Dated for Document {
    fn date(&self) -> NaiveDate {
        self.updated_at.date()
    }

    fn instant(&self) -> NaiveDateTime {
        self.updated_at
    }
}

/// Records falling on `day`, ignoring time of day. Input order is kept.
pub fn on_day<T: Dated>(items: &[T], day: NaiveDate) -> Vec<&T> {
    items.iter().filter(|item| item.date() == day).collect()
}

/// Records strictly after `now`, soonest first, at most `limit` of them.
///
/// A record exactly at `now` is not upcoming.
pub fn upcoming<T: Dated>(items: &[T], now: NaiveDateTime, limit: usize) -> Vec<&T> {
    let mut future: Vec<&T> = items.iter().filter(|item| item.instant() > now).collect();
    future.sort_by(|a, b| by_date_asc(a, b));
    future.truncate(limit);
    future
}

/// Event indicator for one day cell of the month calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarker {
    pub date: NaiveDate,
    pub is_today: bool,
    pub event_count: usize,
    /// Types of the first events of the day, at most `MAX_DAY_MARKERS`.
    pub markers: Vec<EventType>,
    /// More events than markers.
    pub has_more: bool,
}

pub fn day_marker(events: &[Event], day: NaiveDate, today: NaiveDate) -> DayMarker {
    let todays = on_day(events, day);
    DayMarker {
        date: day,
        is_today: day == today,
        event_count: todays.len(),
        markers: todays
            .iter()
            .take(MAX_DAY_MARKERS)
            .map(|e| e.event_type)
            .collect(),
        has_more: todays.len() > MAX_DAY_MARKERS,
    }
}

/// One marker per day of the given month. An invalid month yields no days.
pub fn month_markers(events: &[Event], year: i32, month: u32, today: NaiveDate) -> Vec<DayMarker> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| day_marker(events, d, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::{sample_events, sample_projects};
    use crate::types::Member;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        date.and_hms_opt(h, min, 0).unwrap()
    }

    fn event(id: &str, date: NaiveDate, hour: u32, event_type: EventType) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            date,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt((hour + 1) % 24, 0, 0).unwrap(),
            location: None,
            event_type,
            project: None,
            attendees: vec![Member::new("1", "Alex Smith", None)],
        }
    }

    #[test]
    fn test_on_day_returns_todays_three_in_order() {
        let today = day(2023, 7, 10);
        let events = sample_events(today);
        let ids: Vec<&str> = on_day(&events, today).into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5", "6"]);
    }

    #[test]
    fn test_on_day_excludes_close_events_on_other_days() {
        let today = day(2023, 7, 10);
        let events = vec![
            event("late", day(2023, 7, 9), 23, EventType::Meeting),
            event("early", today, 0, EventType::Meeting),
            event("next", day(2023, 7, 11), 0, EventType::Meeting),
        ];
        let result = on_day(&events, today);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "early");
        assert!(result.iter().all(|e| e.date == today));
    }

    #[test]
    fn test_on_day_empty_is_valid() {
        let events = sample_events(day(2023, 7, 10));
        assert!(on_day(&events, day(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_upcoming_is_ascending_capped_and_strict() {
        let today = day(2023, 7, 10);
        let events = sample_events(today);
        let now = at(today, 11, 0); // exactly when "Initial Site Assessment" starts

        let result = upcoming(&events, now, 5);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "1", "3", "4"]);
        assert!(result.iter().all(|e| e.instant() > now));
        assert!(result.windows(2).all(|w| w[0].instant() <= w[1].instant()));
    }

    #[test]
    fn test_upcoming_never_exceeds_limit() {
        let base = day(2023, 7, 10);
        let events: Vec<Event> = (1..=9)
            .map(|i| event(&i.to_string(), base + chrono::Days::new(i), 9, EventType::Delivery))
            .rev()
            .collect();

        let result = upcoming(&events, at(base, 0, 0), 5);
        assert_eq!(result.len(), 5);
        assert_eq!(result[0].id, "1");
        assert_eq!(result[4].id, "5");
        assert!(upcoming(&events, at(base, 0, 0), 0).is_empty());
    }

    #[test]
    fn test_upcoming_for_date_only_records() {
        let projects = sample_projects();
        // Midnight of the due date counts as the instant; a due date equal to now is excluded.
        let now = at(day(2023, 7, 15), 0, 0);
        let titles: Vec<&str> = upcoming(&projects, now, 3)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Deck Installation", "Bathroom Remodel", "Living Room Makeover"]
        );
    }

    #[test]
    fn test_day_marker_overflow() {
        let today = day(2023, 7, 10);
        let events = vec![
            event("a", today, 8, EventType::Meeting),
            event("b", today, 9, EventType::SiteVisit),
            event("c", today, 10, EventType::Deadline),
            event("d", today, 11, EventType::Repair),
        ];
        let marker = day_marker(&events, today, today);
        assert!(marker.is_today);
        assert_eq!(marker.event_count, 4);
        assert_eq!(
            marker.markers,
            vec![EventType::Meeting, EventType::SiteVisit, EventType::Deadline]
        );
        assert!(marker.has_more);
    }

    #[test]
    fn test_month_markers_cover_whole_month() {
        let today = day(2024, 2, 10);
        let events = sample_events(today);
        let markers = month_markers(&events, 2024, 2, today);
        assert_eq!(markers.len(), 29);
        assert_eq!(markers.iter().filter(|m| m.is_today).count(), 1);
        assert_eq!(markers[9].event_count, 3);
        assert!(!markers[9].has_more);
        assert!(month_markers(&events, 2024, 13, today).is_empty());
    }
}
