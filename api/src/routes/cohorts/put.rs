use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cohort::Model as Cohort;
use util::state::AppState;
use validator::Validate;

use crate::payload::Payload;
use crate::response::{ErrorResponse, MessageResponse};
use crate::routes::cohorts::common::UpdateCohortRequest;

/// PUT /api/cohorts/{cohort_id}
///
/// Partially update a cohort: fields absent from the payload are left
/// untouched.
///
/// ### Responses
/// - `201 Created`: the merged record
/// - `400 Bad Request`: non-numeric id or field violations
/// - `404 Not Found`: `{ "message": "Cohort not found" }`
/// - `500 Internal Server Error`: `{ "message": "Error updating cohort", "error": "..." }`
pub async fn update_cohort(
    State(app_state): State<AppState>,
    Path(cohort_id): Path<String>,
    Payload(req): Payload<UpdateCohortRequest>,
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

    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(util::format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    match Cohort::update_by_id(app_state.db(), cohort_id, req.into()).await {
        Ok(Some(cohort)) => (StatusCode::CREATED, Json(cohort)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Cohort not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error updating cohort: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error updating cohort", e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{body_json, seed_cohort, test_state};
    use serde_json::json;

    #[tokio::test]
    async fn partial_payload_merges_and_returns_201() {
        let state = test_state().await;
        let cohort = seed_cohort(state.db(), "wd-2024-01").await;

        let req: UpdateCohortRequest =
            serde_json::from_value(json!({ "inProgress": true })).unwrap();
        let response = update_cohort(State(state), Path(cohort.id.to_string()), Payload(req)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["inProgress"], true);
        assert_eq!(body["cohortSlug"], "wd-2024-01");
        assert_eq!(body["totalHours"], 360);
        assert_eq!(body["startDate"], "2024-01-15");
    }

    #[tokio::test]
    async fn unknown_id_returns_404() {
        let state = test_state().await;

        let response = update_cohort(
            State(state),
            Path("9999".into()),
            Payload(UpdateCohortRequest::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
