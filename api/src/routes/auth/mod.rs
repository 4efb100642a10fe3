//! # Auth Routes Module
//!
//! Defines and wires up routes for the `/auth` endpoint group, mounted at the
//! application root rather than under `/api`.
//!
//! ## Structure
//! - `post.rs`: POST handlers (signup, login)
//! - `get.rs`: GET handlers (token verification)

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::verify;
use post::{login, signup};

pub mod get;
pub mod post;

/// Builds the `/auth` route group, mapping HTTP methods to handlers.
///
/// - `POST /auth/signup` → `signup`
/// - `POST /auth/login` → `login`
/// - `GET /auth/verify` → `verify`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/verify", get(verify))
}
