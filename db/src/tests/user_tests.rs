use crate::models::user::Model as User;
use crate::test_utils::setup_test_db;

#[tokio::test]
async fn create_normalizes_email_and_hashes_password() {
    let db = setup_test_db().await;

    let user = User::create(&db, "  Ada@Example.COM ", "s3cret-pass", "Ada")
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_ne!(user.password_hash, "s3cret-pass");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn find_by_email_matches_any_casing() {
    let db = setup_test_db().await;

    User::create(&db, "ada@example.com", "s3cret-pass", "Ada")
        .await
        .unwrap();

    let found = User::find_by_email(&db, "ADA@example.com ").await.unwrap();
    assert!(found.is_some());

    let missing = User::find_by_email(&db, "grace@example.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let db = setup_test_db().await;

    User::create(&db, "ada@example.com", "s3cret-pass", "Ada")
        .await
        .unwrap();
    assert!(
        User::create(&db, "Ada@Example.com", "other-pass", "Imposter")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn verify_password_accepts_correct_and_rejects_wrong() {
    let db = setup_test_db().await;

    let user = User::create(&db, "ada@example.com", "s3cret-pass", "Ada")
        .await
        .unwrap();

    assert!(user.verify_password("s3cret-pass"));
    assert!(!user.verify_password("wrong-pass"));
}

#[tokio::test]
async fn serialization_never_exposes_the_hash() {
    let db = setup_test_db().await;

    let user = User::create(&db, "ada@example.com", "s3cret-pass", "Ada")
        .await
        .unwrap();
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ada@example.com");
}
