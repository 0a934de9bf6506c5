use axum::Json;

use crate::portfolio::queries::{health, HealthStatus};

/// GET /health and /api/v1/health
/// Fixed liveness payload; never touches the clock or the content store.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(health())
}
