use std::sync::Arc;

use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. Default: `GroqClient`. Tests swap in a fake.
    pub provider: Arc<dyn ChatCompletion>,
}
