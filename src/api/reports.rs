//! Reports REST Bindings
//!
//! CRUD against `{API_URL}/reports`. Responses use the `{ data }` envelope
//! for reads and `{ success, data }` for writes; failures carry `{ error }`.

use serde::Deserialize;

use super::{parse_json, status_error, ApiClient, ApiError, Method};
use crate::models::{Report, ReportDraft};

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct SaveEnvelope {
    success: bool,
    data: ReportDraft,
}

impl ApiClient {
    /// GET `/reports`
    pub async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        let url = self.reports_url("");
        let (status, body) = self.send(Method::Get, &url, None).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        Ok(parse_json::<DataEnvelope<Vec<Report>>>(&body)?.data)
    }

    /// GET `/reports/:id`; 404 surfaces as [`ApiError::Status`]
    pub async fn get_report(&self, id: u32) -> Result<Report, ApiError> {
        let url = self.reports_url(&format!("/{}", id));
        let (status, body) = self.send(Method::Get, &url, None).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        Ok(parse_json::<DataEnvelope<Report>>(&body)?.data)
    }

    /// POST `/reports`; 422 when the server rejects the fields
    pub async fn create_report(&self, draft: &ReportDraft) -> Result<(), ApiError> {
        let url = self.reports_url("");
        let payload = serde_json::json!({ "title": draft.title, "content": draft.content });
        let (status, body) = self.send(Method::Post, &url, Some(payload)).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        parse_json::<SaveEnvelope>(&body)?;
        Ok(())
    }

    /// PUT `/reports/:id`
    pub async fn update_report(&self, id: u32, draft: &ReportDraft) -> Result<(), ApiError> {
        let url = self.reports_url(&format!("/{}", id));
        let payload = serde_json::json!({ "title": draft.title, "content": draft.content });
        let (status, body) = self.send(Method::Put, &url, Some(payload)).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        parse_json::<SaveEnvelope>(&body)?;
        Ok(())
    }
}
