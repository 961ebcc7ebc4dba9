// Documents page: search, All/Recent/Shared tabs, grid or list layout.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::queries::filter_by_query;
use crate::queries::sort::by_date_desc;
use crate::services::{Avatar, EmptyState, TabSummary, ViewMode};
use crate::types::{Document, DocumentType};
use crate::util::format_short_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentTab {
    #[default]
    All,
    Recent,
    Shared,
}

impl DocumentTab {
    pub const ALL: [DocumentTab; 3] = [DocumentTab::All, DocumentTab::Recent, DocumentTab::Shared];

    pub fn title(&self) -> &'static str {
        match self {
            DocumentTab::All => "All Files",
            DocumentTab::Recent => "Recent",
            DocumentTab::Shared => "Shared",
        }
    }
}

impl FromStr for DocumentTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DocumentTab::All),
            "recent" => Ok(DocumentTab::Recent),
            "shared" => Ok(DocumentTab::Shared),
            other => Err(format!(
                "Unknown document tab '{}'. Use all, recent or shared.",
                other
            )),
        }
    }
}

impl fmt::Display for DocumentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentTab::All => "all",
            DocumentTab::Recent => "recent",
            DocumentTab::Shared => "shared",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentsView {
    pub query: String,
    pub tab: DocumentTab,
    pub view: ViewMode,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// File size, or "-" for folders and unknown sizes.
    pub size_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub updated_at: NaiveDateTime,
    /// "Jul 12, 2023"
    pub updated_label: String,
    pub updated_by: Avatar,
    pub shared: bool,
}

impl From<&Document> for DocumentRow {
    fn from(doc: &Document) -> Self {
        DocumentRow {
            id: doc.id.clone(),
            name: doc.name.clone(),
            doc_type: doc.doc_type,
            size_label: doc.size.clone().unwrap_or_else(|| "-".to_string()),
            project: doc.project.clone(),
            updated_at: doc.updated_at,
            updated_label: format_short_date(doc.updated_at.date()),
            updated_by: Avatar::from(&doc.updated_by),
            shared: doc.shared,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsPage {
    pub query: String,
    pub tab: DocumentTab,
    pub view: ViewMode,
    pub tabs: Vec<TabSummary<DocumentTab>>,
    pub documents: Vec<DocumentRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// Most recently updated first, at most `limit`.
pub fn recent_documents<'a>(documents: &[&'a Document], limit: usize) -> Vec<&'a Document> {
    let mut recent = documents.to_vec();
    recent.sort_by(|a, b| by_date_desc(a, b));
    recent.truncate(limit);
    recent
}

pub fn shared_documents<'a>(documents: &[&'a Document]) -> Vec<&'a Document> {
    documents.iter().copied().filter(|d| d.shared).collect()
}

pub fn documents_empty_state(query: &str) -> EmptyState {
    let message = if query.is_empty() {
        "Upload a file to get started."
    } else {
        "Try a different search term or clear your filters."
    };
    EmptyState::new("No documents found", message)
}

/// All three tabs are drawn from the query-filtered set.
pub fn build_documents_page(
    documents: &[Document],
    view: &DocumentsView,
    recent_limit: usize,
) -> DocumentsPage {
    let filtered = filter_by_query(documents, &view.query);
    let recent = recent_documents(&filtered, recent_limit);
    let shared = shared_documents(&filtered);

    let tabs = DocumentTab::ALL
        .iter()
        .map(|tab| TabSummary {
            tab: *tab,
            label: tab.title().to_string(),
            count: match tab {
                DocumentTab::All => filtered.len(),
                DocumentTab::Recent => recent.len(),
                DocumentTab::Shared => shared.len(),
            },
            selected: *tab == view.tab,
        })
        .collect();

    let visible = match view.tab {
        DocumentTab::All => filtered,
        DocumentTab::Recent => recent,
        DocumentTab::Shared => shared,
    };

    log::debug!(
        "documents: query={:?} tab={} view={} visible={}",
        view.query,
        view.tab,
        view.view,
        visible.len()
    );

    let empty_state = visible
        .is_empty()
        .then(|| documents_empty_state(&view.query));

    DocumentsPage {
        query: view.query.clone(),
        tab: view.tab,
        view: view.view,
        tabs,
        documents: visible.into_iter().map(DocumentRow::from).collect(),
        empty_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_documents;

    const RECENT_LIMIT: usize = 5;

    fn view(query: &str, tab: DocumentTab) -> DocumentsView {
        DocumentsView {
            query: query.to_string(),
            tab,
            view: ViewMode::Grid,
        }
    }

    fn names(page: &DocumentsPage) -> Vec<&str> {
        page.documents.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_recent_is_descending_and_capped() {
        let docs = sample_documents();
        let page = build_documents_page(&docs, &view("", DocumentTab::Recent), RECENT_LIMIT);
        assert_eq!(
            names(&page),
            vec![
                "Before and After Photos",
                "Budget Spreadsheet",
                "Kitchen Layout",
                "Kitchen Renovation Plans",
                "Material Specifications"
            ]
        );
        assert!(page
            .documents
            .windows(2)
            .all(|w| w[0].updated_at >= w[1].updated_at));
    }

    #[test]
    fn test_shared_tab() {
        let docs = sample_documents();
        let page = build_documents_page(&docs, &view("", DocumentTab::Shared), RECENT_LIMIT);
        assert_eq!(
            names(&page),
            vec![
                "Kitchen Renovation Plans",
                "Budget Spreadsheet",
                "Before and After Photos"
            ]
        );
        assert!(page.documents.iter().all(|d| d.shared));
    }

    #[test]
    fn test_tabs_follow_query() {
        let docs = sample_documents();
        let page = build_documents_page(&docs, &view("kitchen", DocumentTab::All), RECENT_LIMIT);
        let counts: Vec<usize> = page.tabs.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![3, 3, 1]);
        assert_eq!(page.tabs[0].label, "All Files");

        let recent = build_documents_page(&docs, &view("kitchen", DocumentTab::Recent), RECENT_LIMIT);
        assert_eq!(
            names(&recent),
            vec!["Kitchen Layout", "Kitchen Renovation Plans", "Material Specifications"]
        );
    }

    #[test]
    fn test_row_labels() {
        let docs = sample_documents();
        let folder = DocumentRow::from(&docs[2]);
        assert_eq!(folder.size_label, "-");
        assert_eq!(folder.updated_label, "Jul 8, 2023");
        let plans = DocumentRow::from(&docs[0]);
        assert_eq!(plans.size_label, "4.2 MB");
        assert_eq!(plans.updated_label, "Jul 12, 2023");
    }

    #[test]
    fn test_empty_state() {
        let docs = sample_documents();
        let page = build_documents_page(&docs, &view("blueprints", DocumentTab::All), RECENT_LIMIT);
        assert!(page.documents.is_empty());
        let empty = page.empty_state.unwrap();
        assert_eq!(empty.title, "No documents found");
        assert_eq!(empty.message, "Try a different search term or clear your filters.");

        let page = build_documents_page(&docs, &view("", DocumentTab::All), RECENT_LIMIT);
        assert!(page.empty_state.is_none());

        let page = build_documents_page(&[], &view("", DocumentTab::All), RECENT_LIMIT);
        assert_eq!(page.empty_state.unwrap().message, "Upload a file to get started.");
    }

    #[test]
    fn test_view_mode_is_echoed() {
        let docs = sample_documents();
        let mut state = view("", DocumentTab::All);
        state.view = ViewMode::List;
        let page = build_documents_page(&docs, &state, RECENT_LIMIT);
        assert_eq!(page.view, ViewMode::List);
        assert_eq!(page.documents.len(), 9);
    }
}
