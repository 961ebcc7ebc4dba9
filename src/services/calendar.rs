//! Calendar page: month grid with event markers, the schedule of the selected
//! day and the next few upcoming events.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::queries::schedule::{month_markers, DayMarker};
use crate::queries::sort::by_start_time;
use crate::queries::{on_day, upcoming};
use crate::services::{AvatarStack, EmptyState};
use crate::types::{Event, EventType};
use crate::util::{format_long_date, format_month_day, format_short_date, format_time};

/// Attendees drawn on an event before the "+N" chip.
pub const EVENT_ATTENDEE_AVATARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    Day,
    #[default]
    Schedule,
}

impl FromStr for CalendarMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(CalendarMode::Day),
            "schedule" => Ok(CalendarMode::Schedule),
            other => Err(format!(
                "Unknown calendar view '{}'. Use day or schedule.",
                other
            )),
        }
    }
}

impl fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalendarMode::Day => "day",
            CalendarMode::Schedule => "schedule",
        })
    }
}

/// View state of the calendar page. No selected date means today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarView {
    pub selected_date: Option<NaiveDate>,
    pub view: CalendarMode,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Badge text, e.g. "site visit".
    pub type_label: &'static str,
    pub date: NaiveDate,
    pub date_label: String,
    #[serde(with = "crate::util::display_time")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::util::display_time")]
    pub end_time: NaiveTime,
    /// "09:00 AM - 10:00 AM"
    pub time_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub attendees: AvatarStack,
    /// "1 attendee", "5 attendees"
    pub attendee_label: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        EventCard {
            id: event.id.clone(),
            title: event.title.clone(),
            project: event.project.clone(),
            event_type: event.event_type,
            type_label: event.event_type.label(),
            date: event.date,
            date_label: format_short_date(event.date),
            start_time: event.start_time,
            end_time: event.end_time,
            time_range: format!(
                "{} - {}",
                format_time(event.start_time),
                format_time(event.end_time)
            ),
            location: event.location.clone(),
            attendees: AvatarStack::new(&event.attendees, EVENT_ATTENDEE_AVATARS),
            attendee_label: attendee_label(event.attendees.len()),
        }
    }
}

pub fn attendee_label(count: usize) -> String {
    if count == 1 {
        "1 attendee".to_string()
    } else {
        format!("{} attendees", count)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPage {
    pub selected_date: NaiveDate,
    pub is_today: bool,
    /// "Today's Schedule" or "July 12, 2023"
    pub heading: String,
    pub view: CalendarMode,
    pub events: Vec<EventCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    pub upcoming: Vec<EventCard>,
    /// One entry per day of the selected date's month.
    pub month: Vec<DayMarker>,
}

pub fn calendar_empty_state(selected: NaiveDate, today: NaiveDate) -> EmptyState {
    let message = if selected == today {
        "You're free today!".to_string()
    } else {
        format!("No events for {}", format_month_day(selected))
    };
    EmptyState::new("No events scheduled", message)
}

pub fn build_calendar_page(
    events: &[Event],
    view: &CalendarView,
    now: NaiveDateTime,
    upcoming_limit: usize,
) -> CalendarPage {
    let today = now.date();
    let selected = view.selected_date.unwrap_or(today);
    let is_today = selected == today;

    let mut day_events = on_day(events, selected);
    day_events.sort_by(|a, b| by_start_time(a, b));

    let heading = if is_today {
        "Today's Schedule".to_string()
    } else {
        format_long_date(selected)
    };

    log::debug!(
        "calendar: selected={} view={} events={}",
        selected,
        view.view,
        day_events.len()
    );

    let empty_state = day_events
        .is_empty()
        .then(|| calendar_empty_state(selected, today));

    CalendarPage {
        selected_date: selected,
        is_today,
        heading,
        view: view.view,
        events: day_events.into_iter().map(EventCard::from).collect(),
        empty_state,
        upcoming: upcoming(events, now, upcoming_limit)
            .into_iter()
            .map(EventCard::from)
            .collect(),
        month: month_markers(events, selected.year(), selected.month(), today),
    }
}
