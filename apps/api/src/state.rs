use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::dates::Clock;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only portfolio content, built once at startup.
    pub content: Arc<ContentStore>,
    /// Source of "today". Default: SystemClock. Pinned via PORTFOLIO_TODAY.
    pub clock: Arc<dyn Clock>,
    pub config: Config,
}
