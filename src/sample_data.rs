//! Built-in demo catalog.
//!
//! Projects, documents and activities are fixed. Calendar events are laid out
//! around `today` so the calendar page always has something to show: three
//! events today, the rest over the following days.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::catalog::Catalog;
use crate::types::{
    Activity, ActivityType, Document, DocumentType, Event, EventType, Member, Metric,
    MetricValue, MonthlyProjectCount, Project, ProjectStatus, Trend,
};

const AVATAR_BASE: &str = "https://i.pravatar.cc/150?img=";

// (id, name). Avatar index equals the id.
const TEAM: [(&str, &str); 6] = [
    ("1", "Alex Smith"),
    ("2", "Sarah Johnson"),
    ("3", "Tom Wilson"),
    ("4", "Emma Davis"),
    ("5", "Michael Brown"),
    ("6", "Jessica Lee"),
];

fn member(id: &str) -> Member {
    let name = TEAM
        .iter()
        .find(|(member_id, _)| *member_id == id)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown");
    Member {
        id: id.to_string(),
        name: name.to_string(),
        avatar: Some(format!("{AVATAR_BASE}{id}")),
    }
}

fn members(ids: &[&str]) -> Vec<Member> {
    ids.iter().map(|id| member(id)).collect()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(hm(0, 0))
}

pub fn sample_catalog(today: NaiveDate) -> Catalog {
    Catalog {
        projects: sample_projects(),
        events: sample_events(today),
        documents: sample_documents(),
        activities: sample_activities(),
        metrics: sample_metrics(),
        project_trend: sample_project_trend(),
    }
}

pub fn sample_projects() -> Vec<Project> {
    // (id, title, client, status, progress, due, team, documents)
    let rows: [(&str, &str, &str, ProjectStatus, u8, NaiveDate, &[&str], u32); 8] = [
        ("1", "Kitchen Renovation", "Johnson Residence", ProjectStatus::Active, 68, ymd(2023, 7, 15), &["1", "2", "3", "4"], 12),
        ("2", "Bathroom Remodel", "Smith Family", ProjectStatus::Pending, 25, ymd(2023, 8, 30), &["2", "5"], 8),
        ("3", "Roof Replacement", "Davis Property", ProjectStatus::Completed, 100, ymd(2023, 6, 10), &["1", "3", "6"], 15),
        ("4", "Deck Installation", "Thompson Family", ProjectStatus::Active, 45, ymd(2023, 7, 28), &["4", "5"], 6),
        ("5", "Living Room Makeover", "Garcia Residence", ProjectStatus::Pending, 10, ymd(2023, 9, 15), &["2", "6"], 4),
        ("6", "Basement Finishing", "Wilson Property", ProjectStatus::OnHold, 35, ymd(2023, 10, 5), &["1", "3", "5"], 9),
        ("7", "Window Replacement", "Brown Residence", ProjectStatus::Completed, 100, ymd(2023, 6, 22), &["4", "6"], 7),
        ("8", "Exterior Painting", "Martinez Family", ProjectStatus::Active, 75, ymd(2023, 7, 8), &["1", "2"], 5),
    ];

    rows.into_iter()
        .map(
            |(id, title, client, status, progress, due_date, team, documents)| Project {
                id: id.to_string(),
                title: title.to_string(),
                client: client.to_string(),
                status,
                progress,
                due_date,
                team: members(team),
                documents,
            },
        )
        .collect()
}

pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    // (id, title, day offset, start, end, location, type, project, attendees)
    let rows: [(&str, &str, u64, NaiveTime, NaiveTime, Option<&str>, EventType, Option<&str>, &[&str]); 6] = [
        ("1", "Project Kickoff", 1, hm(9, 0), hm(10, 30), Some("Conference Room A"), EventType::Meeting, Some("Kitchen Renovation"), &["1", "2", "3"]),
        ("2", "Initial Site Assessment", 0, hm(11, 0), hm(12, 30), Some("Johnson Residence"), EventType::SiteVisit, Some("Kitchen Renovation"), &["1", "4"]),
        ("3", "Material Selection Meeting", 2, hm(14, 0), hm(15, 30), Some("Design Studio"), EventType::Appointment, Some("Bathroom Remodel"), &["2", "5", "6"]),
        ("4", "Project Deadline", 5, hm(23, 59), hm(23, 59), None, EventType::Deadline, Some("Roof Replacement"), &["1", "3"]),
        ("5", "Client Consultation", 0, hm(15, 0), hm(16, 0), Some("Virtual Meeting"), EventType::Meeting, Some("Living Room Makeover"), &["2", "6"]),
        ("6", "Team Sync", 0, hm(9, 30), hm(10, 0), Some("Conference Room B"), EventType::Meeting, None, &["1", "2", "3", "4", "5"]),
    ];

    rows.into_iter()
        .map(
            |(id, title, offset, start_time, end_time, location, event_type, project, attendees)| {
                Event {
                    id: id.to_string(),
                    title: title.to_string(),
                    date: today.checked_add_days(Days::new(offset)).unwrap_or(today),
                    start_time,
                    end_time,
                    location: location.map(ToString::to_string),
                    event_type,
                    project: project.map(ToString::to_string),
                    attendees: members(attendees),
                }
            },
        )
        .collect()
}

pub fn sample_documents() -> Vec<Document> {
    // (id, name, type, size, project, updated day in July 2023, updated by, shared)
    let rows: [(&str, &str, DocumentType, Option<&str>, Option<&str>, u32, &str, bool); 9] = [
        ("1", "Kitchen Renovation Plans", DocumentType::Pdf, Some("4.2 MB"), Some("Kitchen Renovation"), 12, "1", true),
        ("2", "Material Specifications", DocumentType::Doc, Some("1.8 MB"), Some("Kitchen Renovation"), 10, "2", false),
        ("3", "Client Photos", DocumentType::Folder, None, Some("Bathroom Remodel"), 8, "3", false),
        ("4", "Budget Spreadsheet", DocumentType::Xls, Some("0.9 MB"), Some("Roof Replacement"), 15, "4", true),
        ("5", "Kitchen Layout", DocumentType::Image, Some("2.6 MB"), Some("Kitchen Renovation"), 14, "5", false),
        ("6", "Contract Agreement", DocumentType::Pdf, Some("3.1 MB"), Some("Bathroom Remodel"), 9, "6", false),
        ("7", "Project Templates", DocumentType::Folder, None, None, 5, "1", false),
        ("8", "Installation Guide", DocumentType::Pdf, Some("5.7 MB"), Some("Roof Replacement"), 7, "3", false),
        ("9", "Before and After Photos", DocumentType::Image, Some("7.2 MB"), Some("Living Room Makeover"), 16, "2", true),
    ];

    rows.into_iter()
        .map(
            |(id, name, doc_type, size, project, day, updated_by, shared)| Document {
                id: id.to_string(),
                name: name.to_string(),
                doc_type,
                size: size.map(ToString::to_string),
                project: project.map(ToString::to_string),
                updated_at: midnight(ymd(2023, 7, day)),
                updated_by: member(updated_by),
                shared,
            },
        )
        .collect()
}

pub fn sample_activities() -> Vec<Activity> {
    let system = Member {
        id: String::new(),
        name: "System".to_string(),
        avatar: Some(String::new()),
    };

    vec![
        activity("1", ActivityType::Message, member("1"), "left a comment on", "Kitchen Renovation", "2m ago", true),
        activity("2", ActivityType::Document, member("2"), "uploaded a new document to", "Bathroom Remodel", "1h ago", true),
        activity("3", ActivityType::Task, member("3"), "completed a task in", "Roof Replacement", "3h ago", false),
        activity("4", ActivityType::Client, member("4"), "added a new client", "Parker Residence", "5h ago", false),
        activity("5", ActivityType::Alert, system, "deadline approaching for", "Kitchen Renovation", "1d ago", false),
    ]
}

fn activity(
    id: &str,
    activity_type: ActivityType,
    user: Member,
    action: &str,
    target: &str,
    time: &str,
    is_new: bool,
) -> Activity {
    Activity {
        id: id.to_string(),
        activity_type,
        user,
        action: action.to_string(),
        target: target.to_string(),
        time: time.to_string(),
        is_new,
    }
}

pub fn sample_metrics() -> Vec<Metric> {
    let metric = |title: &str, value: MetricValue, trend: u32| Metric {
        title: title.to_string(),
        value,
        trend: Some(Trend {
            value: trend,
            is_positive: true,
        }),
    };

    vec![
        metric("Total Projects", MetricValue::Count(128), 12),
        metric("Active Clients", MetricValue::Count(42), 8),
        metric("Revenue", MetricValue::Text("$38,291".to_string()), 7),
        metric("Completion Rate", MetricValue::Text("92%".to_string()), 3),
    ]
}

pub fn sample_project_trend() -> Vec<MonthlyProjectCount> {
    [
        ("Jan", 12, 8),
        ("Feb", 19, 7),
        ("Mar", 15, 10),
        ("Apr", 18, 12),
        ("May", 22, 9),
        ("Jun", 25, 11),
    ]
    .into_iter()
    .map(|(month, completed, ongoing)| MonthlyProjectCount {
        month: month.to_string(),
        completed,
        ongoing,
    })
    .collect()
}
