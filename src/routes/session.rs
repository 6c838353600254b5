use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::models::{LoginRequest, LogoutRequest, LogoutResponse, SessionResponse};
use crate::routes::{ApiError, AppState};

/// Configure session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/session/login", web::post().to(login))
        .route("/session/logout", web::post().to(logout));
}

/// Open a session for an existing profile
///
/// POST /api/v1/session/login
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    if !state.catalog.contains(&req.profile_id) {
        return Err(ApiError::ProfileNotFound(req.profile_id.clone()));
    }

    let token = state.sessions.login(&req.profile_id).await;
    tracing::info!("Profile {} logged in", req.profile_id);

    Ok(HttpResponse::Ok().json(SessionResponse {
        token,
        profile_id: req.into_inner().profile_id,
    }))
}

/// Close a session; unknown tokens report `success: false`
///
/// POST /api/v1/session/logout
async fn logout(
    state: web::Data<AppState>,
    req: web::Json<LogoutRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let success = state.sessions.logout(&req.token).await;

    Ok(HttpResponse::Ok().json(LogoutResponse { success }))
}
