//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation
//! goes through the helpers below; pages never write fields directly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::{Report, ReportDraft, Role};

/// How long a success flash stays on screen
const FLASH_MS: u32 = 4_000;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All reports loaded this session
    pub reports: Vec<Report>,
    /// A request is in flight
    pub loading: bool,
    /// Human-readable failure from the last action
    pub error: Option<String>,
    /// Short-lived success flash
    pub success: Option<String>,
    /// Bumped per flash so an expiry never clears a newer message
    pub success_epoch: u32,
    /// Current user role
    pub role: Role,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Pure mutation cores
// ========================

/// Next id for a locally appended report. Monotonic over the ids actually
/// present, so it stays unique even after out-of-order fetches.
pub fn next_report_id(reports: &[Report]) -> u32 {
    reports.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// Append `draft` with a fresh id; returns the id it was given.
pub fn append_report(reports: &mut Vec<Report>, draft: &ReportDraft) -> u32 {
    let id = next_report_id(reports);
    reports.push(Report {
        id,
        title: draft.title.clone(),
        content: draft.content.clone(),
    });
    id
}

/// Replace title/content of the report matching `id`. Returns whether a
/// report matched; an unknown id leaves the collection untouched.
pub fn apply_update(reports: &mut [Report], id: u32, draft: &ReportDraft) -> bool {
    match reports.iter_mut().find(|r| r.id == id) {
        Some(report) => {
            report.title = draft.title.clone();
            report.content = draft.content.clone();
            true
        }
        None => false,
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the full collection
pub fn store_set_reports(store: &AppStore, reports: Vec<Report>) {
    *store.reports().write() = reports;
}

/// Append a new report, assigning it a fresh id
pub fn store_add_report(store: &AppStore, draft: &ReportDraft) -> u32 {
    append_report(&mut store.reports().write(), draft)
}

/// Update a report in place by id; silent no-op when the id is unknown
pub fn store_update_report(store: &AppStore, id: u32, draft: &ReportDraft) {
    apply_update(&mut store.reports().write(), id, draft);
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_set_error(store: &AppStore, error: Option<String>) {
    store.error().set(error);
}

/// Clear both message flags; pages call this from `on_cleanup`
pub fn store_clear_messages(store: &AppStore) {
    store.error().set(None);
    store.success().set(None);
}

/// Show a success message that expires on its own unless a newer flash
/// replaces it first.
pub fn store_flash_success(store: &AppStore, message: impl Into<String>) {
    let epoch = store.success_epoch().get_untracked() + 1;
    store.success_epoch().set(epoch);
    store.success().set(Some(message.into()));

    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_MS).await;
        if store.success_epoch().get_untracked() == epoch {
            store.success().set(None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: u32) -> Report {
        Report {
            id,
            title: format!("Report {}", id),
            content: "<p>body text here</p>".to_string(),
        }
    }

    #[test]
    fn test_next_id_is_monotonic_not_length_based() {
        assert_eq!(next_report_id(&[]), 1);
        // Gapped ids (as after a delete or partial fetch) never collide
        let reports = vec![report(2), report(7)];
        assert_eq!(next_report_id(&reports), 8);
    }

    #[test]
    fn test_append_grows_by_exactly_one() {
        let mut reports = vec![report(1), report(3)];
        let draft = ReportDraft {
            title: "Hello".to_string(),
            content: "1234567890".to_string(),
        };
        let id = append_report(&mut reports, &draft);
        assert_eq!(reports.len(), 3);
        assert_eq!(id, 4);
        assert_eq!(reports[2].title, "Hello");
    }

    #[test]
    fn test_apply_update_replaces_matching_fields() {
        let mut reports = vec![report(1), report(2)];
        let draft = ReportDraft {
            title: "Renamed".to_string(),
            content: "<p>new body</p>".to_string(),
        };
        assert!(apply_update(&mut reports, 2, &draft));
        assert_eq!(reports[1].title, "Renamed");
        assert_eq!(reports[1].content, "<p>new body</p>");
        assert_eq!(reports[0].title, "Report 1");
    }

    #[test]
    fn test_apply_update_unknown_id_is_noop() {
        let mut reports = vec![report(1)];
        let before = reports.clone();
        let draft = ReportDraft::default();
        assert!(!apply_update(&mut reports, 99, &draft));
        assert_eq!(reports, before);
    }
}
