use chrono::NaiveDate;

use crate::models::cohort::{Campus, CreateCohort, Format, Model as Cohort, Program};
use crate::models::student::{
    CreateStudent, DEFAULT_IMAGE, Language, Model as Student, UpdateStudent,
};
use crate::test_utils::setup_test_db;
use sea_orm::DbConn;

fn student_payload(email: &str) -> CreateStudent {
    CreateStudent {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.into(),
        phone: "+34 600 000 000".into(),
        linkedin_url: None,
        languages: vec![Language::English, Language::Spanish],
        program: Program::WebDev,
        background: None,
        image: None,
        cohort: None,
        projects: None,
    }
}

async fn seed_cohort(db: &DbConn, slug: &str) -> Cohort {
    Cohort::create(
        db,
        CreateCohort {
            cohort_slug: slug.into(),
            cohort_name: format!("Cohort {slug}"),
            program: Program::WebDev,
            format: Format::FullTime,
            campus: Campus::Berlin,
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

#[tokio::test]
async fn create_applies_defaults() {
    let db = setup_test_db().await;

    let student = Student::create(&db, student_payload("ada@example.com"))
        .await
        .unwrap();

    assert_eq!(student.linkedin_url, "");
    assert_eq!(student.background, "");
    assert_eq!(student.image, DEFAULT_IMAGE);
    assert_eq!(student.cohort, None);
    assert!(student.projects.0.is_empty());
    assert_eq!(
        student.languages.0,
        vec![Language::English, Language::Spanish]
    );
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_not_persisted() {
    let db = setup_test_db().await;

    Student::create(&db, student_payload("ada@example.com"))
        .await
        .unwrap();

    let mut duplicate = student_payload("ada@example.com");
    duplicate.first_name = "Grace".into();
    assert!(Student::create(&db, duplicate).await.is_err());

    assert_eq!(Student::find_all(&db, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn find_by_id_populates_cohort() {
    let db = setup_test_db().await;
    let cohort = seed_cohort(&db, "wd-2024-01").await;

    let mut payload = student_payload("ada@example.com");
    payload.cohort = Some(cohort.id);
    let student = Student::create(&db, payload).await.unwrap();

    let (found, populated) = Student::find_by_id(&db, student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, student.id);
    assert_eq!(populated.unwrap().cohort_slug, "wd-2024-01");

    // Without a cohort set, the joined side is absent.
    let loner = Student::create(&db, student_payload("grace@example.com"))
        .await
        .unwrap();
    let (_, populated) = Student::find_by_id(&db, loner.id).await.unwrap().unwrap();
    assert!(populated.is_none());
}

#[tokio::test]
async fn dangling_cohort_reference_resolves_to_none() {
    let db = setup_test_db().await;
    let cohort = seed_cohort(&db, "wd-2024-01").await;

    let mut payload = student_payload("ada@example.com");
    payload.cohort = Some(cohort.id);
    let student = Student::create(&db, payload).await.unwrap();

    // Deleting the cohort leaves the student's reference dangling.
    Cohort::delete_by_id(&db, cohort.id).await.unwrap();

    let (found, populated) = Student::find_by_id(&db, student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.cohort, Some(cohort.id));
    assert!(populated.is_none());
}

#[tokio::test]
async fn find_all_filters_by_cohort() {
    let db = setup_test_db().await;
    let first = seed_cohort(&db, "wd-2024-01").await;
    let second = seed_cohort(&db, "wd-2024-02").await;

    for (i, cohort_id) in [Some(first.id), Some(first.id), Some(second.id), None]
        .into_iter()
        .enumerate()
    {
        let mut payload = student_payload(&format!("student{i}@example.com"));
        payload.cohort = cohort_id;
        Student::create(&db, payload).await.unwrap();
    }

    let all = Student::find_all(&db, None).await.unwrap();
    assert_eq!(all.len(), 4);

    let in_first = Student::find_all(&db, Some(first.id)).await.unwrap();
    assert_eq!(in_first.len(), 2);
    assert!(
        in_first
            .iter()
            .all(|(student, _)| student.cohort == Some(first.id))
    );

    let in_second = Student::find_all(&db, Some(second.id)).await.unwrap();
    assert_eq!(in_second.len(), 1);
}

#[tokio::test]
async fn partial_update_merges_changes() {
    let db = setup_test_db().await;

    let created = Student::create(&db, student_payload("ada@example.com"))
        .await
        .unwrap();

    let updated = Student::update_by_id(
        &db,
        created.id,
        UpdateStudent {
            background: Some("Mathematics".into()),
            languages: Some(vec![Language::French]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.background, "Mathematics");
    assert_eq!(updated.languages.0, vec![Language::French]);
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.image, created.image);
}

#[tokio::test]
async fn delete_returns_record_and_removes_it() {
    let db = setup_test_db().await;

    let created = Student::create(&db, student_payload("ada@example.com"))
        .await
        .unwrap();

    let deleted = Student::delete_by_id(&db, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deleted.email, "ada@example.com");

    assert!(Student::find_by_id(&db, created.id).await.unwrap().is_none());
    assert!(Student::update_by_id(&db, created.id, UpdateStudent::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn model_serializes_with_camel_case_keys() {
    let db = setup_test_db().await;

    let student = Student::create(&db, student_payload("ada@example.com"))
        .await
        .unwrap();
    let json = serde_json::to_value(&student).unwrap();

    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["linkedinUrl"], "");
    assert_eq!(json["image"], DEFAULT_IMAGE);
    assert_eq!(json["program"], "Web Dev");
    assert_eq!(json["languages"][0], "English");
}
