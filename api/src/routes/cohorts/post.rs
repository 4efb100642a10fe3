use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cohort::Model as Cohort;
use util::state::AppState;
use validator::Validate;

use crate::payload::Payload;
use crate::response::ErrorResponse;
use crate::routes::cohorts::common::CreateCohortRequest;

/// POST /api/cohorts
///
/// Create a new cohort. Omitted optional fields receive their defaults
/// (`inProgress: false`, `totalHours: 360`).
///
/// ### Request Body
/// ```json
/// {
///   "cohortSlug": "wd-2024-01",
///   "cohortName": "Web Dev Jan 2024",
///   "program": "Web Dev",
///   "format": "Full Time",
///   "campus": "Madrid",
///   "startDate": "2024-01-15",
///   "endDate": "2024-07-15"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`: the stored record
/// - `400 Bad Request`: `{ "message": "<collected field violations>" }`
/// - `500 Internal Server Error`: `{ "message": "Error creating cohort", "error": "..." }`
///   (also the outcome for a duplicate slug, surfaced by the unique index)
pub async fn create_cohort(
    State(app_state): State<AppState>,
    Payload(req): Payload<CreateCohortRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(util::format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    match Cohort::create(app_state.db(), req.into()).await {
        Ok(cohort) => (StatusCode::CREATED, Json(cohort)).into_response(),
        Err(e) => {
            tracing::error!("Error creating cohort: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error creating cohort", e)),
            )
                .into_response()
        }
    }
}
