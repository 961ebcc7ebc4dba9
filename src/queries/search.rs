use serde::Serialize;

use crate::catalog::Catalog;
use crate::entity::EntityKind;
use crate::types::{Activity, Document, Event, Project};
use crate::util::contains_lowered;

/// Records that can be matched by a free-text query.
pub trait Searchable {
    /// The fields a query is matched against. Missing optional fields are skipped.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| contains_lowered(field, needle))
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client.as_str()]
    }
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.project.as_deref());
        fields
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.project.as_deref());
        fields.extend(self.location.as_deref());
        fields
    }
}

impl Searchable for Activity {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.user.name.as_str(),
            self.action.as_str(),
            self.target.as_str(),
        ]
    }
}

/// Lowercased form of a query. `None` means "match everything".
///
/// Whitespace is significant: " Kitchen" only matches fields containing it.
fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Keep the items where `query` is a case-insensitive substring of any
/// designated field. An empty query keeps everything, in order.
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    match normalize_query(query) {
        None => items.iter().collect(),
        Some(needle) => items.iter().filter(|item| item.matches(&needle)).collect(),
    }
}

/// A cross-page search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub kind: EntityKind,
    pub id: String,
    pub title: String,
    /// Secondary line: client, project or author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub path: &'static str,
}

/// Search every collection of the catalog. Hits are grouped by kind in page
/// order (projects, events, documents, activities). Empty query yields nothing.
pub fn search_catalog(catalog: &Catalog, query: &str) -> Vec<SearchHit> {
    if normalize_query(query).is_none() {
        return Vec::new();
    }

    let projects = filter_by_query(&catalog.projects, query)
        .into_iter()
        .map(|p| hit(EntityKind::Project, &p.id, &p.title, Some(p.client.as_str())));
    let events = filter_by_query(&catalog.events, query)
        .into_iter()
        .map(|e| hit(EntityKind::Event, &e.id, &e.title, e.project.as_deref()));
    let documents = filter_by_query(&catalog.documents, query)
        .into_iter()
        .map(|d| hit(EntityKind::Document, &d.id, &d.name, d.project.as_deref()));
    let activities = filter_by_query(&catalog.activities, query)
        .into_iter()
        .map(|a| {
            let title = format!("{} {} {}", a.user.name, a.action, a.target);
            hit(EntityKind::Activity, &a.id, &title, Some(a.time.as_str()))
        });

    projects
        .chain(events)
        .chain(documents)
        .chain(activities)
        .collect()
}

fn hit(kind: EntityKind, id: &str, title: &str, subtitle: Option<&str>) -> SearchHit {
    SearchHit {
        kind,
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.map(ToString::to_string),
        path: kind.page_path(),
    }
}
