use crate::common;
use crate::setup_test_db_or_skip;
use schoolapp::application::teachers::{TeacherInsertDto, TeacherService, TeacherUpdateDto};
use schoolapp::domain::teachers::TeacherRepository;
use schoolapp::infrastructure::repositories::teachers::PostgresTeacherRepository;
use schoolapp::shared::error::AppError;
use serial_test::serial;
use std::sync::Arc;

fn insert_dto(vat: &str, lastname: &str) -> TeacherInsertDto {
    TeacherInsertDto {
        vat: vat.to_string(),
        firstname: "Maria".to_string(),
        lastname: lastname.to_string(),
    }
}

#[tokio::test]
#[serial]
async fn test_insert_teacher_success() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let service = TeacherService::new(Arc::new(PostgresTeacherRepository::new(pool.clone())));

    let teacher = service
        .insert_teacher(insert_dto("BB222", "Papadopoulou"))
        .await
        .expect("Failed to insert teacher");

    assert_eq!(teacher.vat, "BB222");
    assert_eq!(teacher.lastname, "Papadopoulou");
    assert!(teacher.id > 0);
}

#[tokio::test]
#[serial]
async fn test_insert_teacher_duplicate_vat() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let repo = Arc::new(PostgresTeacherRepository::new(pool.clone()));
    let service = TeacherService::new(repo.clone());

    service
        .insert_teacher(insert_dto("AA111", "Alpha"))
        .await
        .expect("Failed to insert first teacher");

    let result = service.insert_teacher(insert_dto("AA111", "Other")).await;

    match result {
        Err(AppError::AlreadyExists(msg)) => assert!(msg.contains("AA111")),
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_update_teacher_own_and_foreign_vat() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let service = TeacherService::new(Arc::new(PostgresTeacherRepository::new(pool.clone())));

    let first = service
        .insert_teacher(insert_dto("AA111", "Alpha"))
        .await
        .unwrap();
    let second = service
        .insert_teacher(insert_dto("BB222", "Beta"))
        .await
        .unwrap();

    // Keeping its own vat is allowed
    let updated = service
        .update_teacher(
            second.id,
            TeacherUpdateDto {
                id: second.id,
                vat: "BB222".to_string(),
                firstname: "Eleni".to_string(),
                lastname: "Beta".to_string(),
            },
        )
        .await
        .expect("Failed to update teacher");
    assert_eq!(updated.firstname, "Eleni");

    // Taking another teacher's vat is not
    let result = service
        .update_teacher(
            second.id,
            TeacherUpdateDto {
                id: second.id,
                vat: first.vat.clone(),
                firstname: "Eleni".to_string(),
                lastname: "Beta".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
}

#[tokio::test]
#[serial]
async fn test_missing_teacher_is_not_found() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let service = TeacherService::new(Arc::new(PostgresTeacherRepository::new(pool.clone())));

    assert!(matches!(
        service.get_teacher_by_id(99).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_teacher(99).await,
        Err(AppError::NotFound(_))
    ));
    let update = TeacherUpdateDto {
        id: 99,
        vat: "ZZ999".to_string(),
        firstname: "Nobody".to_string(),
        lastname: "Nowhere".to_string(),
    };
    assert!(matches!(
        service.update_teacher(99, update).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[serial]
async fn test_list_skips_incomplete_rows() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let service = TeacherService::new(Arc::new(PostgresTeacherRepository::new(pool.clone())));

    service
        .insert_teacher(insert_dto("AA111", "Alpha"))
        .await
        .unwrap();
    service
        .insert_teacher(insert_dto("BB222", "Alpha"))
        .await
        .unwrap();

    // A legacy row without a lastname
    sqlx::query("INSERT INTO teachers (vat, firstname) VALUES ($1, $2)")
        .bind("CC333")
        .bind("Legacy")
        .execute(&pool)
        .await
        .unwrap();

    let all = service.get_all_teachers().await.unwrap();
    assert_eq!(all.len(), 2);

    let alphas = service.get_teachers_by_lastname("Alpha").await.unwrap();
    assert_eq!(alphas.len(), 2);

    let legacy_id: i32 = sqlx::query_scalar("SELECT id FROM teachers WHERE vat = 'CC333'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(matches!(
        service.get_teacher_by_id(legacy_id).await,
        Err(AppError::NotFound(_))
    ));
}
