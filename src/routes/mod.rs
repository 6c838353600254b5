// Route exports
pub mod dashboard;
pub mod discover;
pub mod profiles;
pub mod session;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use thiserror::Error;
use crate::config::{DiscoverSettings, Settings, SuggestionSettings};
use crate::models::ErrorResponse;
use crate::services::{ProfileCatalog, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProfileCatalog>,
    pub sessions: Arc<SessionStore>,
    pub discover: DiscoverSettings,
    pub suggestions: SuggestionSettings,
}

impl AppState {
    pub fn new(catalog: Arc<ProfileCatalog>, sessions: Arc<SessionStore>, settings: &Settings) -> Self {
        Self {
            catalog,
            sessions,
            discover: settings.discover.clone(),
            suggestions: settings.suggestions.clone(),
        }
    }

    /// Random source for sampling, reproducible when a seed is configured
    pub fn rng(&self) -> StdRng {
        match self.suggestions.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Authentication required")]
    Unauthorized,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::ProfileNotFound(_) => "not_found",
            ApiError::Unauthorized => "unauthorized",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Bearer token from the `Authorization` header, if any
///
/// The scheme name is matched case-insensitively.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(token.trim()).filter(|token| !token.is_empty())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .service(
            web::scope("/api/v1")
                .configure(profiles::configure)
                .configure(discover::configure)
                .configure(session::configure)
                .configure(dashboard::configure),
        );
}
