//! Browser-facing page handlers.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use tracing::debug;

use crate::errors::AppError;
use crate::form::{FormState, FormSubmission};
use crate::notify::ToastQueue;
use crate::state::AppState;
use crate::trigger::analyze;

/// GET /
///
/// Mounts a fresh instance: empty fields, results hidden, no toasts.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let form = FormState::default();
    let html = state.renderer.render_page(&form, &[])?;
    Ok(Html(html))
}

/// POST /analyze
///
/// Rebuilds the instance from the posted fields and runs the analyze action.
/// `MissingInput` is reported as a toast on a normal 200 page, not as an HTTP error.
/// An undecodable body is a 400 in the standard error envelope.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Form<FormSubmission>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(submission) = payload?;
    let mut form = FormState::rehydrate(submission);
    let mut toasts = ToastQueue::default();

    if let Err(e) = analyze(&mut form, &mut toasts) {
        debug!("analyze did not reveal results: {e}");
    }

    let html = state.renderer.render_page(&form, toasts.toasts())?;
    Ok(Html(html))
}
