use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::util::{display_time, flexible_date};

/// Configuration stored in ~/.projectdesk/config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON catalog to load. Built-in sample data is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
    /// IANA timezone used to resolve "today" and "now". System local time when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
    #[serde(default = "default_recent_document_limit")]
    pub recent_document_limit: usize,
    #[serde(default = "default_deadline_limit")]
    pub deadline_limit: usize,
    #[serde(default = "default_recent_project_limit")]
    pub recent_project_limit: usize,
    #[serde(default)]
    pub settings: UserSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            timezone: None,
            upcoming_limit: default_upcoming_limit(),
            recent_document_limit: default_recent_document_limit(),
            deadline_limit: default_deadline_limit(),
            recent_project_limit: default_recent_project_limit(),
            settings: UserSettings::default(),
        }
    }
}

fn default_upcoming_limit() -> usize {
    5
}

fn default_recent_document_limit() -> usize {
    5
}

fn default_deadline_limit() -> usize {
    3
}

fn default_recent_project_limit() -> usize {
    3
}

// =============================================================================
// User settings
// =============================================================================

/// Preferences shown on the settings page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub profile: ProfileSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub appearance: AppearanceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: String,
    pub bio: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            title: "Project Manager".to_string(),
            phone: "(555) 123-4567".to_string(),
            bio: "Experienced project manager with over 10 years in the construction industry."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub project_updates: bool,
    pub task_reminders: bool,
    pub project_comments: bool,
    pub team_messages: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            project_updates: true,
            task_reminders: true,
            project_comments: true,
            team_messages: true,
            marketing_emails: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub compact_view: bool,
    pub animations_enabled: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            compact_view: false,
            animations_enabled: true,
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Reference to a team member. Shared by project teams, event attendees,
/// document editors and activity authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    pub fn new(id: &str, name: &str, avatar: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: avatar.map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Pending,
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Pending,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    /// Badge text, e.g. "on hold".
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub status: ProjectStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    #[serde(with = "flexible_date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub team: Vec<Member>,
    /// Number of documents attached to the project.
    #[serde(default)]
    pub documents: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Meeting,
    SiteVisit,
    Deadline,
    Appointment,
    Inspection,
    Delivery,
    Repair,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::Meeting,
        EventType::SiteVisit,
        EventType::Deadline,
        EventType::Appointment,
        EventType::Inspection,
        EventType::Delivery,
        EventType::Repair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::SiteVisit => "site-visit",
            EventType::Deadline => "deadline",
            EventType::Appointment => "appointment",
            EventType::Inspection => "inspection",
            EventType::Delivery => "delivery",
            EventType::Repair => "repair",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::SiteVisit => "site visit",
            other => other.as_str(),
        }
    }
}

/// A calendar entry. Times are wall-clock in the configured timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "display_time")]
    pub start_time: NaiveTime,
    #[serde(with = "display_time")]
    pub end_time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub attendees: Vec<Member>,
}

impl Event {
    /// The moment the event starts.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Image,
    Doc,
    Xls,
    Folder,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Pdf,
        DocumentType::Image,
        DocumentType::Doc,
        DocumentType::Xls,
        DocumentType::Folder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Image => "image",
            DocumentType::Doc => "doc",
            DocumentType::Xls => "xls",
            DocumentType::Folder => "folder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub updated_at: NaiveDateTime,
    pub updated_by: Member,
    #[serde(default)]
    pub shared: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Message,
    Document,
    Client,
    Task,
    Alert,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Message,
        ActivityType::Document,
        ActivityType::Client,
        ActivityType::Task,
        ActivityType::Alert,
    ];
}

/// Feed entry: "{user} {action} {target}", e.g. "Alex Smith left a comment on Kitchen Renovation".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub user: Member,
    pub action: String,
    pub target: String,
    /// Relative label such as "2m ago".
    pub time: String,
    #[serde(default)]
    pub is_new: bool,
}

// =============================================================================
// Dashboard figures
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Percent change over the previous period.
    pub value: u32,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub title: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

/// One bar group of the monthly project overview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjectCount {
    pub month: String,
    pub completed: u32,
    pub ongoing: u32,
}
