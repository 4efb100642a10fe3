use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::Model as Student;
use util::state::AppState;
use validator::Validate;

use crate::payload::Payload;
use crate::response::ErrorResponse;
use crate::routes::students::common::CreateStudentRequest;

/// POST /api/students
///
/// Create a new student. Omitted optional fields receive their defaults
/// (`linkedinUrl: ""`, `background: ""`, `image: <placeholder>`,
/// `projects: []`).
///
/// ### Request Body
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "email": "ada@example.com",
///   "phone": "+34 600 000 000",
///   "languages": ["English", "Spanish"],
///   "program": "Web Dev",
///   "cohort": 1
/// }
/// ```
///
/// ### Responses
/// - `201 Created`: the stored record, `cohort` as a plain id
/// - `400 Bad Request`: `{ "message": "<collected field violations>" }`
/// - `500 Internal Server Error`: `{ "message": "Error creating student", "error": "..." }`
///   (also the outcome for a duplicate email, surfaced by the unique index)
pub async fn create_student(
    State(app_state): State<AppState>,
    Payload(req): Payload<CreateStudentRequest>,
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

    match Student::create(app_state.db(), req.into()).await {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(e) => {
            tracing::error!("Error creating student: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error creating student", e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{body_json, test_state};
    use db::models::student::DEFAULT_IMAGE;
    use serde_json::json;

    fn valid_request(email: &str) -> CreateStudentRequest {
        serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": email,
            "phone": "+34 600 000 000",
            "languages": ["English", "Spanish"],
            "program": "Web Dev"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn valid_payload_returns_201_with_defaults() {
        let state = test_state().await;

        let response = create_student(State(state), Payload(valid_request("ada@example.com"))).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert!(body["id"].as_i64().is_some());
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["linkedinUrl"], "");
        assert_eq!(body["background"], "");
        assert_eq!(body["image"], DEFAULT_IMAGE);
        assert_eq!(body["projects"], json!([]));
    }

    #[tokio::test]
    async fn duplicate_email_returns_500_and_is_not_persisted() {
        let state = test_state().await;

        let first =
            create_student(State(state.clone()), Payload(valid_request("ada@example.com"))).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second =
            create_student(State(state.clone()), Payload(valid_request("ada@example.com"))).await;
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(second).await;
        assert_eq!(body["message"], "Error creating student");
        assert!(body["error"].is_string());

        let students = db::models::student::Model::find_all(state.db(), None)
            .await
            .unwrap();
        assert_eq!(students.len(), 1);
    }

    #[tokio::test]
    async fn invalid_email_returns_400() {
        let state = test_state().await;

        let mut req = valid_request("not-an-email");
        req.email = "not-an-email".into();
        let response = create_student(State(state), Payload(req)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid email format");
    }
}
