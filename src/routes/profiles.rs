use actix_web::{web, HttpResponse, Responder};
use crate::core::{format_height, sample_featured};
use crate::models::{FeaturedResponse, HealthResponse, ProfileDetail};
use crate::routes::{ApiError, AppState};

/// Configure health and profile lookup routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        // Must precede the `{id}` route
        .route("/profiles/featured", web::get().to(featured_profiles))
        .route("/profiles/{id}", web::get().to(get_profile));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Random profiles for the landing page
///
/// GET /api/v1/profiles/featured
async fn featured_profiles(state: web::Data<AppState>) -> impl Responder {
    let mut rng = state.rng();
    let profiles = sample_featured(
        state.catalog.profiles(),
        state.suggestions.featured_count,
        &mut rng,
    )
    .into_iter()
    .cloned()
    .collect();

    HttpResponse::Ok().json(FeaturedResponse { profiles })
}

/// Profile detail
///
/// GET /api/v1/profiles/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let profile = state.catalog.get(&id).cloned().ok_or_else(|| {
        tracing::debug!("Profile {} not found", id);
        ApiError::ProfileNotFound(id.clone())
    })?;

    Ok(HttpResponse::Ok().json(ProfileDetail {
        height_display: format_height(profile.height),
        profile,
    }))
}
