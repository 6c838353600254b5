use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{evaluate, FilterBuilder};
use crate::models::{DiscoverResponse, FilterCriteria, FilterForm};
use crate::routes::{ApiError, AppState};

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/discover", web::get().to(list_profiles))
        .route("/discover", web::post().to(apply_filters));
}

fn discover_response(state: &AppState, criteria: FilterCriteria, active_filters: usize) -> DiscoverResponse {
    let profiles: Vec<_> = evaluate(state.catalog.profiles(), &criteria)
        .into_iter()
        .cloned()
        .collect();

    let empty_message = profiles
        .is_empty()
        .then(|| state.discover.empty_message.clone());

    DiscoverResponse {
        total_results: profiles.len(),
        profiles,
        active_filters,
        criteria,
        empty_message,
    }
}

/// Unfiltered collection
///
/// GET /api/v1/discover
async fn list_profiles(state: web::Data<AppState>) -> HttpResponse {
    let criteria = FilterBuilder::new().reset();
    HttpResponse::Ok().json(discover_response(&state, criteria, 0))
}

/// Apply the filter panel
///
/// POST /api/v1/discover
///
/// Request body:
/// ```json
/// {
///   "gender": "any|male|female|other",
///   "ageMin": 21,
///   "ageMax": 45,
///   "heightMin": 150,
///   "heightMax": 190,
///   "location": "string",
///   "religion": "string",
///   "education": ["bachelors", "masters"],
///   "occupation": "string"
/// }
/// ```
async fn apply_filters(
    state: web::Data<AppState>,
    req: web::Json<FilterForm>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Rejected filter form: {}", errors);
        return Err(errors.into());
    }

    let mut builder = FilterBuilder::with_form(req.into_inner());
    let criteria = builder.apply();
    let response = discover_response(&state, criteria, builder.active_filters());

    tracing::info!(
        "Discover returned {} of {} profiles ({} active filters)",
        response.total_results,
        state.catalog.len(),
        response.active_filters
    );

    Ok(HttpResponse::Ok().json(response))
}
