//! Entity catalogs and the providers that supply them.
//!
//! Every page derives its view from a `Catalog`. Where the catalog comes from
//! is hidden behind `CatalogProvider`: a JSON file on disk, or the built-in
//! sample data anchored to a reference date.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DeskError;
use crate::types::{Activity, Document, Event, Metric, MonthlyProjectCount, Project};

/// The full set of records the dashboard pages read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub project_trend: Vec<MonthlyProjectCount>,
}

impl Catalog {
    /// Check invariants serde cannot express: progress bounds and unique ids
    /// within each collection.
    pub fn validate(&self) -> Result<(), DeskError> {
        for project in &self.projects {
            if project.progress > 100 {
                return Err(DeskError::InvalidCatalog(format!(
                    "project {} has progress {}%, expected 0-100",
                    project.id, project.progress
                )));
            }
        }

        ensure_unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("document", self.documents.iter().map(|d| d.id.as_str()))?;
        ensure_unique_ids("activity", self.activities.iter().map(|a| a.id.as_str()))?;

        for event in &self.events {
            if event.end_time < event.start_time {
                log::warn!(
                    "Event {} ends ({}) before it starts ({})",
                    event.id,
                    event.end_time,
                    event.start_time
                );
            }
        }

        Ok(())
    }
}

fn ensure_unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DeskError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DeskError::InvalidCatalog(format!(
                "duplicate {} id: {}",
                kind, id
            )));
        }
    }
    Ok(())
}

/// Source of catalog data.
pub trait CatalogProvider {
    fn load(&self) -> Result<Catalog, DeskError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Reads a catalog from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn load(&self) -> Result<Catalog, DeskError> {
        if !self.path.exists() {
            return Err(DeskError::CatalogNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let catalog: Catalog = serde_json::from_str(&content)
            .map_err(|e| DeskError::parse(format!("catalog {}", self.path.display()), e))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Built-in demo data. Calendar events are placed relative to `today`.
#[derive(Debug, Clone, Copy)]
pub struct SampleCatalogProvider {
    today: NaiveDate,
}

impl SampleCatalogProvider {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl CatalogProvider for SampleCatalogProvider {
    fn load(&self) -> Result<Catalog, DeskError> {
        let catalog = crate::sample_data::sample_catalog(self.today);
        catalog.validate()?;
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("sample:{}", self.today)
    }
}

/// Load through a provider and log what came back.
pub fn load_catalog(provider: &dyn CatalogProvider) -> Result<Catalog, DeskError> {
    let catalog = provider.load()?;
    log::info!(
        "Loaded catalog from {}: {} projects, {} events, {} documents, {} activities",
        provider.describe(),
        catalog.projects.len(),
        catalog.events.len(),
        catalog.documents.len(),
        catalog.activities.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 10).unwrap()
    }

    const MINIMAL_CATALOG: &str = r#"{
        "projects": [{
            "id": "1",
            "title": "Kitchen Renovation",
            "client": "Johnson Residence",
            "status": "active",
            "progress": 68,
            "dueDate": "Jul 15, 2023",
            "team": [{ "id": "1", "name": "Alex Smith" }],
            "documents": 12
        }],
        "events": [{
            "id": "e1",
            "title": "Team Sync",
            "date": "2023-07-10",
            "startTime": "09:30 AM",
            "endTime": "10:00 AM",
            "type": "site-visit"
        }],
        "documents": [{
            "id": "d1",
            "name": "Plans",
            "type": "pdf",
            "updatedAt": "2023-07-12T00:00:00",
            "updatedBy": { "id": "1", "name": "Alex Smith" }
        }]
    }"#;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_json_provider_loads_minimal_catalog() {
        let file = write_catalog(MINIMAL_CATALOG);
        let catalog = JsonCatalogProvider::new(file.path()).load().unwrap();

        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(
            catalog.projects[0].due_date,
            NaiveDate::from_ymd_opt(2023, 7, 15).unwrap()
        );
        assert_eq!(catalog.events[0].event_type, crate::types::EventType::SiteVisit);
        assert!(!catalog.documents[0].shared);
        assert!(catalog.activities.is_empty());
    }

    #[test]
    fn test_json_provider_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonCatalogProvider::new(dir.path().join("nope.json")).load();
        assert!(matches!(result, Err(DeskError::CatalogNotFound(_))));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let file = write_catalog(&MINIMAL_CATALOG.replace("\"active\"", "\"archived\""));
        let result = JsonCatalogProvider::new(file.path()).load();
        assert!(matches!(result, Err(DeskError::ParseError { .. })));
    }

    #[test]
    fn test_progress_over_100_is_rejected() {
        let file = write_catalog(&MINIMAL_CATALOG.replace("68", "140"));
        let result = JsonCatalogProvider::new(file.path()).load();
        assert!(matches!(result, Err(DeskError::InvalidCatalog(_))));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut catalog = SampleCatalogProvider::new(today()).load().unwrap();
        let dup = catalog.documents[0].clone();
        catalog.documents.push(dup);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate document id"));
    }

    #[test]
    fn test_sample_provider_is_valid() {
        let catalog = load_catalog(&SampleCatalogProvider::new(today())).unwrap();
        assert_eq!(catalog.projects.len(), 8);
        assert_eq!(catalog.events.len(), 6);
        assert_eq!(catalog.documents.len(), 9);
        assert_eq!(catalog.activities.len(), 5);
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = SampleCatalogProvider::new(today()).load().unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let file = write_catalog(&json);
        let reloaded = JsonCatalogProvider::new(file.path()).load().unwrap();
        assert_eq!(reloaded, catalog);
    }
}
