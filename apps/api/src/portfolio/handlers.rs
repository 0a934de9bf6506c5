//! Axum route handlers for the Portfolio API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::portfolio::{AboutSection, ContactInfo, PortfolioResponse, Skill, SocialLink};
use crate::portfolio::queries::{self, DetailedProfile, ProfileSummary, StatsResponse};
use crate::state::AppState;

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let today = state.clock.today();
    Ok(Json(queries::get_portfolio(&state.content, today)?))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileSummary>, AppError> {
    let today = state.clock.today();
    Ok(Json(queries::get_profile(&state.content, today)?))
}

/// GET /api/v1/profile/detailed
pub async fn handle_get_detailed_profile(
    State(state): State<AppState>,
) -> Result<Json<DetailedProfile>, AppError> {
    let today = state.clock.today();
    Ok(Json(queries::get_detailed_profile(&state.content, today)?))
}

/// GET /api/v1/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    Json(queries::get_skills(&state.content))
}

/// GET /api/v1/social-links
pub async fn handle_get_social_links(State(state): State<AppState>) -> Json<Vec<SocialLink>> {
    Json(queries::get_social_links(&state.content))
}

/// GET /api/v1/about
pub async fn handle_get_about(State(state): State<AppState>) -> Json<Vec<AboutSection>> {
    Json(queries::get_about(&state.content))
}

/// GET /api/v1/contact
pub async fn handle_get_contact(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(queries::get_contact(&state.content))
}

/// GET /api/v1/stats
pub async fn handle_get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let today = state.clock.today();
    Ok(Json(queries::get_stats(&state.content, today)?))
}
