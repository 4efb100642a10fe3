//! Shared helpers for handler-level tests: an in-memory application state
//! and seeded records.

use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use db::models::cohort::{Campus, CreateCohort, Format, Model as Cohort, Program};
use db::models::student::{CreateStudent, Language, Model as Student};
use db::test_utils::setup_test_db;
use sea_orm::DbConn;
use serde_json::Value;
use util::state::AppState;

pub async fn test_state() -> AppState {
    AppState::new(setup_test_db().await)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn seed_cohort(db: &DbConn, slug: &str) -> Cohort {
    Cohort::create(
        db,
        CreateCohort {
            cohort_slug: slug.into(),
            cohort_name: format!("Cohort {slug}"),
            program: Program::WebDev,
            format: Format::FullTime,
            campus: Campus::Madrid,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            in_progress: None,
            program_manager: None,
            lead_teacher: None,
            total_hours: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_student(db: &DbConn, email: &str, cohort: Option<i64>) -> Student {
    Student::create(
        db,
        CreateStudent {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            phone: "+34 600 000 000".into(),
            linkedin_url: None,
            languages: vec![Language::English],
            program: Program::WebDev,
            background: None,
            image: None,
            cohort,
            projects: None,
        },
    )
    .await
    .unwrap()
}
