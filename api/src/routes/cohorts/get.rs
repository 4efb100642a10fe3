use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cohort::Model as Cohort;
use util::state::AppState;

use crate::response::{ErrorResponse, MessageResponse};

/// GET /api/cohorts
///
/// Retrieve all cohorts.
///
/// ### Responses
/// - `200 OK`: array of cohorts
/// - `500 Internal Server Error`: `{ "message": "Error fetching cohorts", "error": "..." }`
pub async fn list_cohorts(State(app_state): State<AppState>) -> Response {
    match Cohort::find_all(app_state.db()).await {
        Ok(cohorts) => (StatusCode::OK, Json(cohorts)).into_response(),
        Err(e) => {
            tracing::error!("Error fetching cohorts: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching cohorts", e)),
            )
                .into_response()
        }
    }
}

/// GET /api/cohorts/{cohort_id}
///
/// Retrieve one cohort by id.
///
/// ### Responses
/// - `200 OK`: the cohort
/// - `400 Bad Request`: non-numeric cohort id
/// - `404 Not Found`: `{ "message": "Cohort not found" }`
/// - `500 Internal Server Error`
pub async fn get_cohort(
    State(app_state): State<AppState>,
    Path(cohort_id): Path<String>,
) -> Response {
    let cohort_id = match cohort_id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid cohort ID format")),
            )
                .into_response();
        }
    };

    match Cohort::find_by_id(app_state.db(), cohort_id).await {
        Ok(Some(cohort)) => (StatusCode::OK, Json(cohort)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Cohort not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error fetching cohort: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching cohort", e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{body_json, seed_cohort, test_state};

    #[tokio::test]
    async fn unknown_id_returns_404_with_message() {
        let state = test_state().await;

        let response = get_cohort(State(state), Path("9999".into())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Cohort not found");
    }

    #[tokio::test]
    async fn round_trip_preserves_required_fields() {
        let state = test_state().await;
        let cohort = seed_cohort(state.db(), "wd-2024-01").await;

        let response = get_cohort(State(state), Path(cohort.id.to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["cohortSlug"], "wd-2024-01");
        assert_eq!(body["cohortName"], cohort.cohort_name);
        assert_eq!(body["startDate"], "2024-01-15");
        assert_eq!(body["endDate"], "2024-07-15");
    }
}
