//! Mock API Backend
//!
//! Stands in for the reports REST API during local development (feature
//! `mock`, on by default). Routing is synchronous so it can be tested off
//! the browser; the transport layer adds the latency.

use std::cell::RefCell;

use serde_json::{json, Value};

use crate::models::Report;

/// Simulated round-trip latency, applied by the transport
pub const LATENCY_MS: u32 = 700;

thread_local! {
    static REPORTS: RefCell<Vec<Report>> = RefCell::new(seed_reports());
}

fn seed_reports() -> Vec<Report> {
    let seeds = [
        (1, "Monthly Sales Report", "<p>Sales held steady across all regions this month.</p>"),
        (2, "Yearly Summary", "<p>A look back at the full year, quarter by quarter.</p>"),
        (3, "User Feedback Analysis", "<p>Themes from support tickets and survey responses.</p>"),
        (4, "Revenue Overview", "<p>Recurring revenue grew; one-off sales dipped.</p>"),
        (5, "Something AP", "<p>Accounts payable aging and open invoices.</p>"),
        (6, "Purchase Overview 2025", "<p>Procurement spend for the 2025 cycle.</p>"),
    ];
    seeds
        .into_iter()
        .map(|(id, title, content)| Report {
            id,
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect()
}

/// Route a request to a handler. `path` is relative to the API base, e.g.
/// `/reports/3`. Returns status and JSON body.
pub fn respond(method: &str, path: &str, body: Option<&Value>) -> (u16, Value) {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match (method, segments.as_slice()) {
        ("GET", ["reports"]) => list(),
        ("GET", ["reports", id]) => match id.parse::<u32>() {
            Ok(id) => get(id),
            Err(_) => not_found(),
        },
        ("POST", ["reports"]) => create(body),
        ("PUT", ["reports", id]) => match id.parse::<u32>() {
            Ok(id) => update(id, body),
            Err(_) => not_found(),
        },
        _ => (404, json!({ "error": format!("No handler for {} {}", method, path) })),
    }
}

fn list() -> (u16, Value) {
    REPORTS.with(|reports| {
        let reports = reports.borrow();
        (200, json!({ "data": &*reports }))
    })
}

fn get(id: u32) -> (u16, Value) {
    REPORTS.with(|reports| {
        match reports.borrow().iter().find(|r| r.id == id) {
            Some(report) => (200, json!({ "data": report })),
            None => not_found(),
        }
    })
}

fn create(body: Option<&Value>) -> (u16, Value) {
    let Some((title, content)) = extract_fields(body) else {
        return unprocessable(body);
    };
    REPORTS.with(|reports| {
        let mut reports = reports.borrow_mut();
        let id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        reports.push(Report {
            id,
            title: title.clone(),
            content: content.clone(),
        });
        (200, json!({ "success": true, "data": { "id": id, "title": title, "content": content } }))
    })
}

fn update(id: u32, body: Option<&Value>) -> (u16, Value) {
    let Some((title, content)) = extract_fields(body) else {
        return unprocessable(body);
    };
    REPORTS.with(|reports| {
        let mut reports = reports.borrow_mut();
        match reports.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                report.title = title.clone();
                report.content = content.clone();
                (200, json!({ "success": true, "data": { "id": id, "title": title, "content": content } }))
            }
            None => not_found(),
        }
    })
}

/// Pull non-empty `title` and `content` strings out of the payload.
fn extract_fields(body: Option<&Value>) -> Option<(String, String)> {
    let body = body?;
    let title = body.get("title")?.as_str()?;
    let content = body.get("content")?.as_str()?;
    if title.is_empty() || content.is_empty() {
        return None;
    }
    Some((title.to_string(), content.to_string()))
}

fn not_found() -> (u16, Value) {
    (404, json!({ "error": "Report not found." }))
}

fn unprocessable(body: Option<&Value>) -> (u16, Value) {
    match body {
        Some(_) => (422, json!({ "error": "Submitted data not in valid format." })),
        None => (400, json!({ "error": "Invalid JSON payload." })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_returns_seed_data_envelope() {
        let (status, body) = respond("GET", "/reports", None);
        assert_eq!(status, 200);
        let data = body["data"].as_array().unwrap();
        assert!(data.len() >= 6);
        assert_eq!(data[0]["title"], "Monthly Sales Report");
    }

    #[test]
    fn test_get_unknown_id_is_404() {
        let (status, body) = respond("GET", "/reports/999", None);
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Report not found.");
    }

    #[test]
    fn test_post_missing_fields_is_422() {
        let payload = json!({ "title": "Hello" });
        let (status, body) = respond("POST", "/reports", Some(&payload));
        assert_eq!(status, 422);
        assert_eq!(body["error"], "Submitted data not in valid format.");
    }

    #[test]
    fn test_post_without_body_is_400() {
        let (status, body) = respond("POST", "/reports", None);
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Invalid JSON payload.");
    }

    #[test]
    fn test_post_assigns_id_and_echoes_fields() {
        let payload = json!({ "title": "Hello", "content": "1234567890" });
        let (status, body) = respond("POST", "/reports", Some(&payload));
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "Hello");
        assert!(body["data"]["id"].as_u64().unwrap() > 6);

        // The created report is visible to a later GET
        let id = body["data"]["id"].as_u64().unwrap();
        let (status, body) = respond("GET", &format!("/reports/{}", id), None);
        assert_eq!(status, 200);
        assert_eq!(body["data"]["title"], "Hello");
    }

    #[test]
    fn test_put_unknown_id_is_404() {
        let payload = json!({ "title": "Hello", "content": "1234567890" });
        let (status, _) = respond("PUT", "/reports/999", Some(&payload));
        assert_eq!(status, 404);
    }

    #[test]
    fn test_put_rewrites_report() {
        let payload = json!({ "title": "Renamed Report", "content": "<p>rewritten</p>" });
        let (status, _) = respond("PUT", "/reports/2", Some(&payload));
        assert_eq!(status, 200);
        let (_, body) = respond("GET", "/reports/2", None);
        assert_eq!(body["data"]["title"], "Renamed Report");
    }

    #[test]
    fn test_unknown_route_is_404() {
        let (status, _) = respond("DELETE", "/reports/1", None);
        assert_eq!(status, 404);
    }
}
