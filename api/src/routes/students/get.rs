use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::Model as Student;
use util::state::AppState;

use crate::response::{ErrorResponse, MessageResponse};
use crate::routes::students::common::StudentResponse;

/// GET /api/students
///
/// Retrieve all students with their `cohort` reference resolved into the
/// full cohort record (omitted when unset or dangling).
///
/// ### Responses
/// - `200 OK`: array of students
/// - `500 Internal Server Error`: `{ "message": "Error fetching students", "error": "..." }`
pub async fn list_students(State(app_state): State<AppState>) -> Response {
    match Student::find_all(app_state.db(), None).await {
        Ok(students) => {
            let students: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();
            (StatusCode::OK, Json(students)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching students: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching students", e)),
            )
                .into_response()
        }
    }
}

/// GET /api/students/cohort/{cohort_id}
///
/// Retrieve exactly the students whose `cohort` equals the given id, cohort
/// populated. An unknown cohort id yields an empty array.
///
/// ### Responses
/// - `200 OK`: array of students
/// - `400 Bad Request`: non-numeric cohort id
/// - `500 Internal Server Error`
pub async fn list_students_by_cohort(
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

    match Student::find_all(app_state.db(), Some(cohort_id)).await {
        Ok(students) => {
            let students: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();
            (StatusCode::OK, Json(students)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching students: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching students", e)),
            )
                .into_response()
        }
    }
}

/// GET /api/students/{student_id}
///
/// Retrieve one student by id, cohort populated.
///
/// ### Responses
/// - `200 OK`: the student
/// - `400 Bad Request`: non-numeric student id
/// - `404 Not Found`: `{ "message": "Student not found" }`
/// - `500 Internal Server Error`
pub async fn get_student(
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

    match Student::find_by_id(app_state.db(), student_id).await {
        Ok(Some(student)) => {
            (StatusCode::OK, Json(StudentResponse::from(student))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Student not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error fetching student: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error fetching student", e)),
            )
                .into_response()
        }
    }
}
