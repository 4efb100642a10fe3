use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cohort::Model as Cohort;
use util::state::AppState;

use crate::response::{ErrorResponse, MessageResponse};

/// DELETE /api/cohorts/{cohort_id}
///
/// Delete a cohort by id. Students referencing the cohort are not touched;
/// their reference dangles and resolves to null on subsequent reads.
///
/// ### Responses
/// - `201 Created`: the deleted record
/// - `400 Bad Request`: non-numeric id
/// - `404 Not Found`: `{ "message": "Cohort not found" }`
/// - `500 Internal Server Error`: `{ "message": "Error deleting cohort", "error": "..." }`
pub async fn delete_cohort(
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

    match Cohort::delete_by_id(app_state.db(), cohort_id).await {
        Ok(Some(cohort)) => (StatusCode::CREATED, Json(cohort)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Cohort not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error deleting cohort: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error deleting cohort", e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::students::get::get_student;
    use crate::test_utils::{body_json, seed_cohort, seed_student, test_state};

    #[tokio::test]
    async fn deleting_a_cohort_leaves_enrolled_students_dangling() {
        let state = test_state().await;
        let cohort = seed_cohort(state.db(), "wd-2024-01").await;
        let student = seed_student(state.db(), "ada@example.com", Some(cohort.id)).await;

        let response = delete_cohort(State(state.clone()), Path(cohort.id.to_string())).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        // The student survives; its populated cohort now resolves to nothing.
        let response = get_student(State(state), Path(student.id.to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.get("cohort").is_none());
    }
}
