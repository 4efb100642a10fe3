//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, one module per endpoint group:
//! - `/health` → liveness probe
//! - `/students` → student records (cohort reference resolved on reads)
//! - `/cohorts` → cohort records
//! - `/debug` → raw-row inspection, bypassing the typed entities
//!
//! The `/auth` group lives here too but is mounted at the application root
//! by `main`, not under `/api`.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    cohorts::cohorts_routes, debug::debug_routes, health::health_routes,
    students::students_routes,
};

pub mod auth;
pub mod cohorts;
pub mod debug;
pub mod health;
pub mod students;

/// Builds the application router for everything under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/students", students_routes())
        .nest("/cohorts", cohorts_routes())
        .nest("/debug", debug_routes())
        .with_state(app_state)
}
