pub mod frontend;
pub mod health;

use axum::{handler::HandlerWithoutStateExt, middleware, routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir};

use crate::portfolio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Anything that is not an API route is looked up in the frontend bundle;
    // misses redirect home.
    let bundle = ServeDir::new(&state.config.static_dir)
        .append_index_html_on_directories(true)
        .fallback(frontend::redirect_home.into_service());

    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route("/api/v1/health", get(health::health_handler))
        .route("/api/v1/portfolio", get(handlers::handle_get_portfolio))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .route(
            "/api/v1/profile/detailed",
            get(handlers::handle_get_detailed_profile),
        )
        .route("/api/v1/skills", get(handlers::handle_get_skills))
        .route("/api/v1/social-links", get(handlers::handle_get_social_links))
        .route("/api/v1/about", get(handlers::handle_get_about))
        .route("/api/v1/contact", get(handlers::handle_get_contact))
        .route("/api/v1/stats", get(handlers::handle_get_stats))
        .fallback_service(bundle)
        .layer(middleware::map_response(frontend::no_cache_html))
        .layer(CompressionLayer::new())
        .with_state(state)
}
