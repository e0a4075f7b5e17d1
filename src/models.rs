//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Serialize};

/// A stored report. `content` is sanitized HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u32,
    pub title: String,
    pub content: String,
}

/// Create/update payload (no id; the server assigns one)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub title: String,
    pub content: String,
}

/// List-view projection of a report. Ordering is a UI-local property.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub id: u32,
    pub title: String,
}

impl From<&Report> for ReportSummary {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            title: report.title.clone(),
        }
    }
}

/// Current user role. Viewers get a read-only edit page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Admin,
    Viewer,
}
