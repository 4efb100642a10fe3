use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::User as UserEntity;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::{ErrorResponse, MessageResponse};

/// GET /auth/verify
///
/// Validate the caller's token (Bearer header or `authToken` cookie) and
/// return the account it belongs to.
///
/// ### Responses
/// - `200 OK`: the user, without the password hash
/// - `401 Unauthorized`: missing/invalid token, or the account no longer exists
/// - `500 Internal Server Error`
pub async fn verify(State(app_state): State<AppState>, AuthUser(claims): AuthUser) -> Response {
    match UserEntity::find_by_id(claims.sub).one(app_state.db()).await {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new("User no longer exists")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error verifying user: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error("Error verifying user", e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::generate_jwt;
    use crate::test_utils::{body_json, test_state};
    use axum::extract::FromRequestParts;
    use axum::http::Request;
    use db::models::user::Model as User;

    async fn extract_with_header(header: &str) -> Result<AuthUser, (StatusCode, &'static str)> {
        let request = Request::builder()
            .uri("/auth/verify")
            .header("Authorization", header)
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        AuthUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn valid_token_resolves_to_the_user() {
        let state = test_state().await;
        let user = User::create(state.db(), "ada@example.com", "s3cret-pass", "Ada")
            .await
            .unwrap();

        let (token, _) = generate_jwt(user.id);
        let auth_user = extract_with_header(&format!("Bearer {token}")).await.unwrap();

        let response = verify(State(state), auth_user).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["email"], "ada@example.com");
        assert!(body.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_by_the_extractor() {
        let result = extract_with_header("Bearer not-a-jwt").await;
        assert_eq!(result.unwrap_err().0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn cookie_token_is_accepted_as_fallback() {
        let state = test_state().await;
        let user = User::create(state.db(), "ada@example.com", "s3cret-pass", "Ada")
            .await
            .unwrap();

        let (token, _) = generate_jwt(user.id);
        let request = Request::builder()
            .uri("/auth/verify")
            .header("Cookie", format!("authToken={token}"))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let auth_user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();

        let response = verify(State(state), auth_user).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn token_for_a_deleted_account_returns_401() {
        let state = test_state().await;

        let (token, _) = generate_jwt(9999);
        let auth_user = extract_with_header(&format!("Bearer {token}")).await.unwrap();

        let response = verify(State(state), auth_user).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
