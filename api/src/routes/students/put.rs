use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::Model as Student;
use util::state::AppState;
use validator::Validate;

use crate::payload::Payload;
use crate::response::{ErrorResponse, MessageResponse};
use crate::routes::students::common::UpdateStudentRequest;

/// PUT /api/students/{student_id}
///
/// Partially update a student: fields absent from the payload are left
/// untouched.
///
/// ### Responses
/// - `201 Created`: the merged record, `cohort` as a plain id
/// - `400 Bad Request`: non-numeric id or field violations
/// - `404 Not Found`: `{ "message": "Student not found" }`
/// - `500 Internal Server Error`: `{ "message": "Error updating student", "error": "..." }`
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
    Payload(req): Payload<UpdateStudentRequest>,
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

    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(util::format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    match Student::update_by_id(app_state.db(), student_id, req.into()).await {
        Ok(Some(student)) => (StatusCode::CREATED, Json(student)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Student not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error updating student: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error updating student", e)),
            )
                .into_response()
        }
    }
}
