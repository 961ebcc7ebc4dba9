//! Per-page view assembly.
//!
//! Each page owns an explicit view state (query, tab, selected date, view
//! mode). A service takes that state plus the catalog and returns a
//! serializable page payload. Nothing is cached between calls.

pub mod calendar;
pub mod dashboard;
pub mod documents;
pub mod projects;
pub mod settings;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Member;
use crate::util::initials;

/// Placeholder shown when a list has nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

impl EmptyState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A tab header with its badge count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSummary<T> {
    pub tab: T,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Grid or list layout toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Unknown view mode '{}'. Use grid or list.", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        })
    }
}

/// Member as drawn in an avatar circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Fallback text when the image is missing or fails to load.
    pub initials: String,
}

impl From<&Member> for Avatar {
    fn from(member: &Member) -> Self {
        Avatar {
            id: member.id.clone(),
            name: member.name.clone(),
            image: member.avatar.clone().filter(|url| !url.is_empty()),
            initials: initials(&member.name),
        }
    }
}

/// Overlapping avatars with a "+N" chip for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStack {
    pub shown: Vec<Avatar>,
    pub overflow: usize,
    pub total: usize,
}

impl AvatarStack {
    pub fn new(members: &[Member], max_shown: usize) -> Self {
        AvatarStack {
            shown: members.iter().take(max_shown).map(Avatar::from).collect(),
            overflow: members.len().saturating_sub(max_shown),
            total: members.len(),
        }
    }
}
