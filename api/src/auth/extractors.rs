use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use axum_extra::extract::cookie::CookieJar;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use util::config;

use crate::auth::claims::{AuthUser, Claims};

/// Cookie the login route sets, accepted as a fallback to the header.
pub const AUTH_COOKIE: &str = "authToken";

/// Implements extraction of `AuthUser` from request parts.
///
/// Looks for a Bearer token in the `Authorization` header, falling back to
/// the `authToken` cookie, and verifies the JWT with the configured secret.
///
/// # Errors
/// Returns `401 Unauthorized` if no token is present anywhere, or the token
/// is invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
        {
            Ok(TypedHeader(Authorization(bearer))) => bearer.token().to_owned(),
            Err(_) => {
                let jar = CookieJar::from_request_parts(parts, state)
                    .await
                    .map_err(|_| (StatusCode::UNAUTHORIZED, "Missing or invalid credentials"))?;
                jar.get(AUTH_COOKIE)
                    .map(|cookie| cookie.value().to_owned())
                    .ok_or((StatusCode::UNAUTHORIZED, "Missing or invalid credentials"))?
            }
        };

        let token_data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

        Ok(AuthUser(token_data.claims))
    }
}
