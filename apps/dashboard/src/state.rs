use std::sync::Arc;

use crate::config::Config;
use crate::workforce::source::WorkforceSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed-path workforce dataset, loaded once and reused across requests.
    pub workforce: Arc<WorkforceSource>,
}
