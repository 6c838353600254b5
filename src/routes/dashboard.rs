use actix_web::{web, HttpRequest, HttpResponse};
use crate::core::{received_interests, recent_conversations, suggest_for};
use crate::models::{ConversationPreview, DashboardResponse, DashboardStats, Profile};
use crate::routes::{bearer_token, ApiError, AppState};
use crate::services::SessionContext;

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}

fn owned(profiles: Vec<&Profile>) -> Vec<Profile> {
    profiles.into_iter().cloned().collect()
}

/// Build the activity overview for a signed-in profile
pub fn build_dashboard(state: &AppState, session: &SessionContext) -> Result<DashboardResponse, ApiError> {
    let profile_id = session.profile_id().ok_or(ApiError::Unauthorized)?;
    let catalog = &state.catalog;
    let settings = &state.suggestions;

    let mut rng = state.rng();
    let suggestions = suggest_for(
        catalog.profiles(),
        profile_id,
        settings.suggested_count,
        settings.viewed_count,
        &mut rng,
    );

    let received = received_interests(catalog.profiles(), catalog.interests(), profile_id);

    let conversations: Vec<ConversationPreview> =
        recent_conversations(catalog.messages(), profile_id, settings.conversation_count)
            .into_iter()
            .map(|(partner_id, message)| ConversationPreview {
                partner_id: partner_id.to_string(),
                partner_name: catalog.get(partner_id).map(|p| p.name.clone()),
                message: message.clone(),
            })
            .collect();

    Ok(DashboardResponse {
        profile_id: profile_id.to_string(),
        stats: DashboardStats {
            interests_received: received.len(),
            active_conversations: conversations.len(),
        },
        suggested_matches: owned(suggestions.suggested),
        recently_viewed: owned(suggestions.recently_viewed),
        received_interests: owned(received),
        recent_conversations: conversations,
    })
}

/// Dashboard for the profile behind the bearer token
///
/// GET /api/v1/dashboard
async fn get_dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let session = state.sessions.resolve(bearer_token(&req)).await;

    if !session.is_authenticated() {
        tracing::debug!("Dashboard requested without a valid session");
    }

    let dashboard = build_dashboard(&state, &session)?;
    Ok(HttpResponse::Ok().json(dashboard))
}
