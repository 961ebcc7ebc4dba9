// Projects page: search box, status tabs and project cards.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::queries::{filter_by_query, partition_by};
use crate::services::{AvatarStack, EmptyState, TabSummary};
use crate::types::{Project, ProjectStatus};
use crate::util::format_short_date;

/// Team members drawn on a card before the "+N" chip.
pub const CARD_TEAM_AVATARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectTab {
    #[default]
    All,
    Active,
    Pending,
    Completed,
    OnHold,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 5] = [
        ProjectTab::All,
        ProjectTab::Active,
        ProjectTab::Pending,
        ProjectTab::Completed,
        ProjectTab::OnHold,
    ];

    /// The status a tab narrows to. `All` narrows to nothing.
    pub fn status(&self) -> Option<ProjectStatus> {
        match self {
            ProjectTab::All => None,
            ProjectTab::Active => Some(ProjectStatus::Active),
            ProjectTab::Pending => Some(ProjectStatus::Pending),
            ProjectTab::Completed => Some(ProjectStatus::Completed),
            ProjectTab::OnHold => Some(ProjectStatus::OnHold),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProjectTab::All => "All Projects",
            ProjectTab::Active => "Active",
            ProjectTab::Pending => "Pending",
            ProjectTab::Completed => "Completed",
            ProjectTab::OnHold => "On Hold",
        }
    }
}

impl FromStr for ProjectTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ProjectTab::All),
            "active" => Ok(ProjectTab::Active),
            "pending" => Ok(ProjectTab::Pending),
            "completed" => Ok(ProjectTab::Completed),
            "on-hold" => Ok(ProjectTab::OnHold),
            other => Err(format!(
                "Unknown project tab '{}'. Use all, active, pending, completed or on-hold.",
                other
            )),
        }
    }
}

impl fmt::Display for ProjectTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectTab::All => "all",
            other => other.status().map(|s| s.as_str()).unwrap_or("all"),
        })
    }
}

/// View state of the projects page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsView {
    pub query: String,
    pub tab: ProjectTab,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub client: String,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub progress: u8,
    pub due_date: NaiveDate,
    /// "Jul 15, 2023"
    pub due_label: String,
    pub documents: u32,
    pub documents_label: String,
    pub team: AvatarStack,
    /// Footer text: "Completed" or "In progress".
    pub state_label: &'static str,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let completed = project.status == ProjectStatus::Completed;
        ProjectCard {
            id: project.id.clone(),
            title: project.title.clone(),
            client: project.client.clone(),
            status: project.status,
            status_label: project.status.label(),
            progress: project.progress,
            due_date: project.due_date,
            due_label: format_short_date(project.due_date),
            documents: project.documents,
            documents_label: format!("{} documents", project.documents),
            team: AvatarStack::new(&project.team, CARD_TEAM_AVATARS),
            state_label: if completed { "Completed" } else { "In progress" },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPage {
    pub query: String,
    pub tab: ProjectTab,
    pub tabs: Vec<TabSummary<ProjectTab>>,
    pub projects: Vec<ProjectCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// Empty-state copy for the projects grid.
pub fn projects_empty_state(query: &str) -> EmptyState {
    let message = if query.is_empty() {
        "Get started by creating your first project."
    } else {
        "Try a different search term or clear your filters."
    };
    EmptyState::new("No projects found", message)
}

/// Filter by query, then partition by status. Tab counts are taken from the
/// filtered set so they always add up to the "All" count.
pub fn build_projects_page(projects: &[Project], view: &ProjectsView) -> ProjectsPage {
    let filtered = filter_by_query(projects, &view.query);
    let partition = partition_by(filtered.iter().copied(), |p: &Project| p.status);

    let tabs = ProjectTab::ALL
        .iter()
        .map(|tab| {
            let count = match tab.status() {
                None => filtered.len(),
                Some(status) => partition.count(status),
            };
            TabSummary {
                tab: *tab,
                label: format!("{} ({})", tab.title(), count),
                count,
                selected: *tab == view.tab,
            }
        })
        .collect();

    let visible: Vec<&Project> = match view.tab.status() {
        None => filtered.clone(),
        Some(status) => partition.get(status).to_vec(),
    };

    log::debug!(
        "projects: query={:?} tab={} matched={} visible={}",
        view.query,
        view.tab,
        filtered.len(),
        visible.len()
    );

    let empty_state = visible
        .is_empty()
        .then(|| projects_empty_state(&view.query));

    ProjectsPage {
        query: view.query.clone(),
        tab: view.tab,
        tabs,
        projects: visible.into_iter().map(ProjectCard::from).collect(),
        empty_state,
    }
}
