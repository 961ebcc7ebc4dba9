//! Command boundary between the page views and whoever renders them.
//!
//! Every command takes the loaded `AppState` plus the page's view state and
//! returns a serializable payload. Loading is the only step that can fail;
//! its errors are turned into `CommandError` here.

use std::time::Instant;

use serde::Serialize;

use crate::error::CommandError;
use crate::queries::{search_catalog, SearchHit};
use crate::services::calendar::{build_calendar_page, CalendarPage, CalendarView};
use crate::services::dashboard::{build_dashboard, DashboardLimits, DashboardPage};
use crate::services::documents::{build_documents_page, DocumentsPage, DocumentsView};
use crate::services::projects::{build_projects_page, ProjectsPage, ProjectsView};
use crate::services::settings::{build_settings_page, SettingsPage, SettingsTab};
use crate::state::{AppState, LoadOptions};

/// p95 budget for assembling a page from an in-memory catalog.
const READ_CMD_LATENCY_BUDGET_MS: u128 = 100;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub query: String,
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

/// Load config and catalog.
pub fn open_state(options: &LoadOptions) -> Result<AppState, CommandError> {
    AppState::load(options).map_err(|e| {
        log::error!("Failed to load state: {}", e);
        CommandError::from(&e)
    })
}

fn timed<T>(command: &str, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let result = f();
    let elapsed = started.elapsed().as_millis();
    if elapsed > READ_CMD_LATENCY_BUDGET_MS {
        log::warn!(
            "{} took {}ms (budget {}ms)",
            command,
            elapsed,
            READ_CMD_LATENCY_BUDGET_MS
        );
    } else {
        log::debug!("{} took {}ms", command, elapsed);
    }
    result
}

pub fn get_dashboard(state: &AppState) -> DashboardPage {
    timed("get_dashboard", || {
        build_dashboard(
            &state.catalog,
            state.now,
            DashboardLimits::from(&state.config),
        )
    })
}

pub fn get_projects(state: &AppState, view: &ProjectsView) -> ProjectsPage {
    timed("get_projects", || {
        build_projects_page(&state.catalog.projects, view)
    })
}

pub fn get_calendar(state: &AppState, view: &CalendarView) -> CalendarPage {
    timed("get_calendar", || {
        build_calendar_page(
            &state.catalog.events,
            view,
            state.now,
            state.config.upcoming_limit,
        )
    })
}

pub fn get_documents(state: &AppState, view: &DocumentsView) -> DocumentsPage {
    timed("get_documents", || {
        build_documents_page(
            &state.catalog.documents,
            view,
            state.config.recent_document_limit,
        )
    })
}

pub fn get_settings(state: &AppState, tab: SettingsTab) -> SettingsPage {
    build_settings_page(&state.config.settings, tab)
}

/// Header search box: hits across every page.
pub fn search(state: &AppState, query: &str) -> SearchResult {
    let hits = timed("search", || search_catalog(&state.catalog, query));
    SearchResult {
        query: query.to_string(),
        total: hits.len(),
        hits,
    }
}
