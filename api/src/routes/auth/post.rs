use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use db::models::user::Model as User;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::extractors::AUTH_COOKIE;
use crate::auth::generate_jwt;
use crate::payload::Payload;
use crate::response::ErrorResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Provide a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Provide a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub auth_token: String,
}

/// POST /auth/signup
///
/// Register a new account. The email is trimmed and lowercased before
/// storage; the password is hashed, never stored as submitted.
///
/// ### Request Body
/// ```json
/// { "email": "ada@example.com", "password": "s3cret-pass", "name": "Ada" }
/// ```
///
/// ### Responses
/// - `201 Created`: the stored user, without the password hash
/// - `400 Bad Request`: validation failure, or `{ "message": "User already exists." }`
/// - `500 Internal Server Error`: `{ "message": "Error creating user", "error": "..." }`
pub async fn signup(
    State(app_state): State<AppState>,
    Payload(req): Payload<SignupRequest>,
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

    match User::find_by_email(app_state.db(), &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("User already exists.")),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Error creating user: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error creating user", e)),
            )
                .into_response();
        }
    }

    match User::create(app_state.db(), &req.email, &req.password, &req.name).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => {
            tracing::error!("Error creating user: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error creating user", e)),
            )
                .into_response()
        }
    }
}

/// POST /auth/login
///
/// Authenticate an account. On success the token is returned in the body
/// and also set as an httpOnly `authToken` cookie.
///
/// ### Responses
/// - `200 OK`: `{ "authToken": "<jwt>" }`
/// - `400 Bad Request`: validation failure
/// - `401 Unauthorized`: `{ "message": "Unable to authenticate the user" }`
/// - `500 Internal Server Error`
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Payload(req): Payload<LoginRequest>,
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

    let user = match User::find_by_email(app_state.db(), &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("Unable to authenticate the user")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Error authenticating user: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error authenticating user", e)),
            )
                .into_response();
        }
    };

    if !user.verify_password(&req.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Unable to authenticate the user")),
        )
            .into_response();
    }

    let (token, _expires_at) = generate_jwt(user.id);
    let cookie = Cookie::build((AUTH_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .build();

    (
        jar.add(cookie),
        Json(LoginResponse { auth_token: token }),
    )
        .into_response()
}
