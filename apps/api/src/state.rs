use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelInvoker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The only outbound dependency. `Arc<dyn ModelInvoker>` so tests can
    /// swap in a stub without touching handler code.
    pub invoker: Arc<dyn ModelInvoker>,
    pub config: Config,
}
