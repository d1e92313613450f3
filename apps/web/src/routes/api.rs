//! JSON twin of the page for non-browser hosts.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::form::{FormState, FormSubmission};
use crate::notify::{Notification, ToastQueue};
use crate::panel::{render_panel, Tile};
use crate::trigger::analyze;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub results_visible: bool,
    pub notifications: Vec<Notification>,
    pub tiles: Vec<Tile>,
}

/// POST /api/v1/analyze
///
/// Same flow as the page. `MissingInput` becomes a 422 carrying the toast message;
/// a malformed body becomes a 400.
pub async fn handle_api_analyze(
    payload: Result<Json<FormSubmission>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(submission) = payload?;
    let mut form = FormState::rehydrate(submission);
    let mut toasts = ToastQueue::default();

    analyze(&mut form, &mut toasts)?;

    Ok(Json(AnalyzeResponse {
        results_visible: form.results_visible(),
        tiles: render_panel(&form),
        notifications: toasts.into_toasts(),
    }))
}
