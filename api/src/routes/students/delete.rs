use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::Model as Student;
use util::state::AppState;

use crate::response::{ErrorResponse, MessageResponse};

/// DELETE /api/students/{student_id}
///
/// Delete a student by id.
///
/// ### Responses
/// - `201 Created`: the deleted record
/// - `400 Bad Request`: non-numeric id
/// - `404 Not Found`: `{ "message": "Student not found" }`
/// - `500 Internal Server Error`: `{ "message": "Error deleting student", "error": "..." }`
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let student_id = match student_id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid student ID format")),
            )
                .into_response();
        }
    };

    match Student::delete_by_id(app_state.db(), student_id).await {
        Ok(Some(student)) => (StatusCode::CREATED, Json(student)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Student not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error deleting student: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error deleting student", e)),
            )
                .into_response()
        }
    }
}
