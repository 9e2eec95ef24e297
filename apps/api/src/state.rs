use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend behind a trait object so handlers and tests can
    /// swap in doubles without touching dispatch code.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
