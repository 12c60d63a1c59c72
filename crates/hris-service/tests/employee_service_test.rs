//! Integration tests for the employee use-case service.

mod support;

use std::time::Duration;

use hris_core::error::HrisError;
use hris_core::models::access::AccessLevel;
use hris_core::models::employee::{CreateEmployeeInput, EmployeeProfile, UpdateEmployeeInput};
use hris_service::EmployeeService;
use hris_service::password::verify_password;
use support::{Call, RecordingRepository, test_config};
use uuid::Uuid;

fn ana() -> CreateEmployeeInput {
    CreateEmployeeInput {
        name: "Ana".into(),
        email: "ana@x.com".into(),
        password: "secret1".into(),
        access_level: "hr".into(),
        profile: EmployeeProfile {
            position: "Recruiter".into(),
            work_location: "Jakarta".into(),
            salary: 12_500_000.0,
            ..Default::default()
        },
    }
}

fn setup() -> (EmployeeService<RecordingRepository>, RecordingRepository) {
    let repo = RecordingRepository::new();
    let svc = EmployeeService::new(repo.clone(), test_config());
    (svc, repo)
}

#[tokio::test]
async fn create_then_get_returns_public_projection() {
    let (svc, _repo) = setup();

    let created = svc.create(ana()).await.unwrap();
    assert!(!created.id.is_nil(), "create must return the generated id");

    let response = svc.get_by_id(created.id).await.unwrap();
    assert_eq!(response.id, created.id);
    assert_eq!(response.name, "Ana");
    assert_eq!(response.email, "ana@x.com");
    assert_eq!(response.access_level, AccessLevel::Hr);
    assert_eq!(response.created_at, created.created_at);

    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn create_stores_a_verifiable_hash_and_equal_timestamps() {
    let (svc, repo) = setup();

    let created = svc.create(ana()).await.unwrap();
    let stored = repo.stored(created.id).unwrap();

    assert_ne!(stored.password_hash, "secret1");
    assert!(stored.password_hash.starts_with("$argon2id$"));
    assert!(verify_password("secret1", &stored.password_hash, None).unwrap());
    assert!(!verify_password("secret2", &stored.password_hash, None).unwrap());

    assert_eq!(stored.created_at, stored.updated_at);
    assert_eq!(stored.created_at, stored.join_date);
    assert_eq!(stored.created_at.offset().local_minus_utc(), 7 * 3600);

    // Profile attributes are carried through unchanged.
    assert_eq!(stored.profile.position, "Recruiter");
    assert_eq!(stored.profile.salary, 12_500_000.0);
}

#[tokio::test]
async fn create_uses_configured_pepper() {
    let repo = RecordingRepository::new();
    let mut config = test_config();
    config.pepper = Some("server-pepper".into());
    let svc = EmployeeService::new(repo.clone(), config);

    let created = svc.create(ana()).await.unwrap();
    let stored = repo.stored(created.id).unwrap();

    assert!(verify_password("secret1", &stored.password_hash, Some("server-pepper")).unwrap());
    assert!(!verify_password("secret1", &stored.password_hash, None).unwrap());
}

#[tokio::test]
async fn create_rejects_missing_required_fields_without_storage_call() {
    let (svc, repo) = setup();

    let cases = [
        CreateEmployeeInput {
            name: String::new(),
            ..ana()
        },
        CreateEmployeeInput {
            email: String::new(),
            ..ana()
        },
        CreateEmployeeInput {
            password: String::new(),
            ..ana()
        },
        CreateEmployeeInput {
            name: "   ".into(),
            ..ana()
        },
    ];

    for input in cases {
        let err = svc.create(input).await.unwrap_err();
        assert!(
            matches!(err, HrisError::Validation { .. }),
            "expected Validation, got: {err:?}"
        );
    }
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn create_rejects_unknown_access_level() {
    let (svc, repo) = setup();

    for level in ["admin", "HR", "", "owner"] {
        let err = svc
            .create(CreateEmployeeInput {
                access_level: level.into(),
                ..ana()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, HrisError::Validation { .. }), "{level:?}");
    }
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn create_accepts_every_access_level() {
    let (svc, _repo) = setup();

    for (i, level) in AccessLevel::ALL.iter().enumerate() {
        let created = svc
            .create(CreateEmployeeInput {
                email: format!("user-{i}@x.com"),
                access_level: level.to_string(),
                ..ana()
            })
            .await
            .unwrap();
        let response = svc.get_by_id(created.id).await.unwrap();
        assert_eq!(response.access_level, *level);
    }
}

#[tokio::test]
async fn create_propagates_storage_errors() {
    let (svc, repo) = setup();
    repo.fail_with(|| HrisError::Database("connection refused".into()));

    let err = svc.create(ana()).await.unwrap_err();
    assert!(matches!(err, HrisError::Database(_)));
    assert!(!err.to_string().contains("secret1"));
}

#[tokio::test]
async fn duplicate_email_is_surfaced_from_storage() {
    let (svc, _repo) = setup();
    svc.create(ana()).await.unwrap();

    let err = svc.create(ana()).await.unwrap_err();
    assert!(matches!(err, HrisError::AlreadyExists { .. }));
}

#[tokio::test]
async fn slow_repository_times_out() {
    let repo = RecordingRepository::new();
    let mut config = test_config();
    config.repo_timeout = Duration::from_millis(20);
    let svc = EmployeeService::new(repo.clone(), config);
    repo.delay(Duration::from_millis(500));

    let err = svc.get_by_id(Uuid::now_v7()).await.unwrap_err();
    assert!(
        matches!(err, HrisError::Timeout { .. }),
        "expected Timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn get_by_id_unknown_is_not_found() {
    let (svc, _repo) = setup();

    let err = svc.get_by_id(Uuid::now_v7()).await.unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got: {err:?}");
}

#[tokio::test]
async fn get_by_email_finds_created_employee() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();

    let response = svc.get_by_email("ana@x.com").await.unwrap();
    assert_eq!(response.id, created.id);

    let err = svc.get_by_email("nobody@x.com").await.unwrap_err();
    assert!(err.is_not_found());

    let calls_before = repo.calls().len();
    let err = svc.get_by_email("").await.unwrap_err();
    assert!(matches!(err, HrisError::Validation { .. }));
    assert_eq!(repo.calls().len(), calls_before);
}

#[tokio::test]
async fn update_with_nil_id_is_rejected_before_storage() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let mut employee = repo.stored(created.id).unwrap();
    employee.id = Uuid::nil();
    let calls_before = repo.calls().len();

    let err = svc.update(employee).await.unwrap_err();
    assert!(matches!(err, HrisError::Validation { .. }));
    assert_eq!(repo.calls().len(), calls_before);
}

#[tokio::test]
async fn update_requires_identity_and_hash() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let original = repo.stored(created.id).unwrap();
    let calls_before = repo.calls().len();

    let mut no_name = original.clone();
    no_name.name.clear();
    let mut no_email = original.clone();
    no_email.email.clear();
    let mut no_hash = original.clone();
    no_hash.password_hash.clear();

    for employee in [no_name, no_email, no_hash] {
        let err = svc.update(employee).await.unwrap_err();
        assert!(matches!(err, HrisError::Validation { .. }));
    }
    assert_eq!(repo.calls().len(), calls_before);
}

#[tokio::test]
async fn update_restamps_updated_at_only() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let before = repo.stored(created.id).unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let mut changed = before.clone();
    changed.name = "Ana Maria".into();
    changed.access_level = AccessLevel::Manager;
    let written = svc.update(changed).await.unwrap();

    assert_eq!(written.id, before.id);
    assert_eq!(written.created_at, before.created_at);
    assert!(written.updated_at >= before.updated_at);
    assert!(written.updated_at >= written.created_at);
    assert_eq!(written.updated_at.offset().local_minus_utc(), 7 * 3600);

    let stored = repo.stored(created.id).unwrap();
    assert_eq!(stored.name, "Ana Maria");
    assert_eq!(stored.access_level, AccessLevel::Manager);
    assert_eq!(stored.created_at, before.created_at);
    assert_eq!(stored.updated_at, written.updated_at);
}

#[tokio::test]
async fn update_ignores_caller_supplied_updated_at() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let mut employee = repo.stored(created.id).unwrap();
    employee.updated_at = (chrono::Utc::now() + chrono::Duration::days(3650)).fixed_offset();

    let first = svc.update(employee).await.unwrap();
    assert_eq!(first.updated_at.offset().local_minus_utc(), 7 * 3600);
    assert!(first.updated_at < chrono::Utc::now() + chrono::Duration::minutes(1));
    assert!(first.updated_at >= first.created_at);

    tokio::time::sleep(Duration::from_millis(5)).await;

    let second = svc.update(first.clone()).await.unwrap();
    assert_ne!(second.updated_at, first.updated_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.updated_at.offset().local_minus_utc(), 7 * 3600);
    assert_eq!(repo.stored(created.id).unwrap().updated_at, second.updated_at);
}

#[tokio::test]
async fn update_of_missing_employee_is_not_found() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let mut ghost = repo.stored(created.id).unwrap();
    ghost.id = Uuid::now_v7();

    let err = svc.update(ghost).await.unwrap_err();
    assert!(err.is_not_found());
}

fn update_input(password: Option<&str>) -> UpdateEmployeeInput {
    UpdateEmployeeInput {
        name: "Ana Maria".into(),
        email: "ana.maria@x.com".into(),
        password: password.map(Into::into),
        access_level: "supervisor".into(),
        profile: EmployeeProfile {
            position: "Lead Recruiter".into(),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn apply_update_without_password_keeps_stored_hash() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let before = repo.stored(created.id).unwrap();

    let written = svc
        .apply_update(created.id, update_input(None))
        .await
        .unwrap();

    assert_eq!(written.password_hash, before.password_hash);
    assert_eq!(written.email, "ana.maria@x.com");
    assert_eq!(written.access_level, AccessLevel::Supervisor);
    assert_eq!(written.profile.position, "Lead Recruiter");
    assert_eq!(written.join_date, before.join_date);
    assert_eq!(written.created_at, before.created_at);
}

#[tokio::test]
async fn apply_update_with_password_rehashes() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();

    svc.apply_update(created.id, update_input(Some("n3w-secret")))
        .await
        .unwrap();

    let stored = repo.stored(created.id).unwrap();
    assert!(verify_password("n3w-secret", &stored.password_hash, None).unwrap());
    assert!(!verify_password("secret1", &stored.password_hash, None).unwrap());
}

#[tokio::test]
async fn apply_update_validates_before_loading() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();
    let calls_before = repo.calls().len();

    let bad_level = UpdateEmployeeInput {
        access_level: "admin".into(),
        ..update_input(None)
    };
    let empty_password = update_input(Some(""));

    for input in [bad_level, empty_password] {
        let err = svc.apply_update(created.id, input).await.unwrap_err();
        assert!(matches!(err, HrisError::Validation { .. }));
    }
    let err = svc
        .apply_update(Uuid::nil(), update_input(None))
        .await
        .unwrap_err();
    assert!(matches!(err, HrisError::Validation { .. }));

    assert_eq!(repo.calls().len(), calls_before);
}

#[tokio::test]
async fn apply_update_of_missing_employee_is_not_found() {
    let (svc, _repo) = setup();
    let err = svc
        .apply_update(Uuid::now_v7(), update_input(None))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_removes_employee() {
    let (svc, repo) = setup();
    let created = svc.create(ana()).await.unwrap();

    svc.delete(created.id).await.unwrap();
    assert!(repo.stored(created.id).is_none());
    assert!(repo.calls().contains(&Call::Delete(created.id)));

    let err = svc.delete(created.id).await.unwrap_err();
    assert!(err.is_not_found());

    let err = svc.delete(Uuid::nil()).await.unwrap_err();
    assert!(matches!(err, HrisError::Validation { .. }));
}
