//! Kinds of record shown on the dashboard pages.
//!
//! Used to tag cross-page search hits so the presentation layer knows which
//! page a hit links to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Event,
    Document,
    Activity,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Event => "event",
            EntityKind::Document => "document",
            EntityKind::Activity => "activity",
        }
    }

    /// Page that lists records of this kind.
    pub fn page_path(&self) -> &'static str {
        match self {
            EntityKind::Project => "/projects",
            EntityKind::Event => "/calendar",
            EntityKind::Document => "/documents",
            EntityKind::Activity => "/dashboard",
        }
    }
}
