use std::sync::Arc;

use crate::config::Config;
use crate::render::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds nothing per page instance: each request rebuilds its own `FormState`
/// from the submitted form.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled page templates, built once at startup.
    pub renderer: Arc<PageRenderer>,
}
