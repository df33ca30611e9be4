use std::sync::Arc;

use crate::config::Config;
use crate::knowledge::KnowledgeBase;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only tables built once at startup.
    pub knowledge: Arc<KnowledgeBase>,
}
