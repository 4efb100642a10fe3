//! # Cohorts Routes Module
//!
//! Defines and wires up routes for the `/api/cohorts` endpoint group.
//!
//! ## Structure
//! - `post.rs`: POST handlers (create cohort)
//! - `get.rs`: GET handlers (list, fetch by id)
//! - `put.rs`: PUT handlers (partial update)
//! - `delete.rs`: DELETE handlers (delete by id)
//! - `common.rs`: request payloads shared by the handlers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_cohort;
use get::{get_cohort, list_cohorts};
use post::create_cohort;
use put::update_cohort;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/cohorts` route group, mapping HTTP methods to handlers.
///
/// - `POST /cohorts` → `create_cohort`
/// - `GET /cohorts` → `list_cohorts`
/// - `GET /cohorts/{cohort_id}` → `get_cohort`
/// - `PUT /cohorts/{cohort_id}` → `update_cohort`
/// - `DELETE /cohorts/{cohort_id}` → `delete_cohort`
pub fn cohorts_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cohort))
        .route("/", get(list_cohorts))
        .route("/{cohort_id}", get(get_cohort))
        .route("/{cohort_id}", put(update_cohort))
        .route("/{cohort_id}", delete(delete_cohort))
}
