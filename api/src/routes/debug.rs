//! Operational inspection routes.
//!
//! These bypass the typed entities entirely and return the raw stored rows
//! for each collection, for debugging what is actually persisted.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::{Cohort, Student};
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ErrorResponse;

/// Builds the `/debug` route group.
///
/// - `GET /debug/students` → raw student rows
/// - `GET /debug/cohorts` → raw cohort rows
pub fn debug_routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(raw_students))
        .route("/cohorts", get(raw_cohorts))
}

/// GET /api/debug/students
///
/// Returns every row of the `students` table as untyped JSON, raw column
/// names and all.
async fn raw_students(State(app_state): State<AppState>) -> Response {
    match Student::find().into_json().all(app_state.db()).await {
        Ok(students) => {
            tracing::debug!("Raw students found: {}", students.len());
            (StatusCode::OK, Json(students)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching raw students: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching raw students", e)),
            )
                .into_response()
        }
    }
}

/// GET /api/debug/cohorts
///
/// Returns every row of the `cohorts` table as untyped JSON.
async fn raw_cohorts(State(app_state): State<AppState>) -> Response {
    match Cohort::find().into_json().all(app_state.db()).await {
        Ok(cohorts) => {
            tracing::debug!("Raw cohorts found: {}", cohorts.len());
            (StatusCode::OK, Json(cohorts)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching raw cohorts: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching raw cohorts", e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{body_json, seed_student, test_state};

    #[tokio::test]
    async fn raw_rows_use_stored_column_names() {
        let state = test_state().await;
        seed_student(state.db(), "ada@example.com", None).await;

        let response = raw_students(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        // Raw view exposes the snake_case columns, not the API shape.
        assert_eq!(rows[0]["first_name"], "Ada");
        assert!(rows[0].get("firstName").is_none());
    }
}
