//! # Students Routes Module
//!
//! Defines and wires up routes for the `/api/students` endpoint group.
//!
//! ## Structure
//! - `post.rs`: POST handlers (create student)
//! - `get.rs`: GET handlers (list, list by cohort, fetch by id)
//! - `put.rs`: PUT handlers (partial update)
//! - `delete.rs`: DELETE handlers (delete by id)
//! - `common.rs`: request/response payloads shared by the handlers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_student;
use get::{get_student, list_students, list_students_by_cohort};
use post::create_student;
use put::update_student;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/students` route group, mapping HTTP methods to handlers.
///
/// - `POST /students` → `create_student`
/// - `GET /students` → `list_students`
/// - `GET /students/cohort/{cohort_id}` → `list_students_by_cohort`
/// - `GET /students/{student_id}` → `get_student`
/// - `PUT /students/{student_id}` → `update_student`
/// - `DELETE /students/{student_id}` → `delete_student`
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student))
        .route("/", get(list_students))
        .route("/cohort/{cohort_id}", get(list_students_by_cohort))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}", put(update_student))
        .route("/{student_id}", delete(delete_student))
}
