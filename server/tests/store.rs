use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use server::store::{EmployeeFields, EmployeeStore, SeaOrmStore, StoreError};

async fn store() -> SeaOrmStore {
    let pool = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&pool, None).await.unwrap();
    SeaOrmStore::new(pool)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn fields(email: &str) -> EmployeeFields {
    EmployeeFields {
        first_name: "John".into(),
        middle_name: Some("A".into()),
        last_name: "Doe".into(),
        location_city: "New York".into(),
        address: "123 Street".into(),
        date_of_birth: date(1990, 1, 1),
        telephone: "1234567890".into(),
        position_title: "Developer".into(),
        hire_date: date(2020, 1, 1),
        email: email.into(),
        salary: 60000.0,
        status: "Active".into(),
    }
}

#[tokio::test]
async fn save_inserts_and_assigns_id() {
    let store = store().await;
    let saved = store.save(None, fields("a@example.com")).await.unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.email, "a@example.com");
    assert_eq!(saved.date_of_birth, date(1990, 1, 1));
    assert!(store.exists_by_id(saved.id).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(store.find_by_id(saved.id).await.unwrap(), Some(saved));
}

#[tokio::test]
async fn save_with_id_overwrites_the_row() {
    let store = store().await;
    let saved = store.save(None, fields("a@example.com")).await.unwrap();

    let mut changed = fields("a@example.com");
    changed.address = "456 Avenue".into();
    let updated = store.save(Some(saved.id), changed).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.address, "456 Avenue");
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_email_is_a_constraint_error() {
    let store = store().await;
    store.save(None, fields("a@example.com")).await.unwrap();

    let err = store
        .save(None, fields("a@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn empty_required_field_is_a_constraint_error() {
    let store = store().await;
    let mut input = fields("a@example.com");
    input.first_name = "  ".into();

    let err = store.save(None, input).await.unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn over_long_address_is_a_constraint_error() {
    let store = store().await;
    let mut input = fields("a@example.com");
    input.address = "x".repeat(256);

    let err = store.save(None, input).await.unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)));
}

#[tokio::test]
async fn delete_missing_id_is_a_noop() {
    let store = store().await;
    store.delete_by_id(999).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn find_all_returns_every_row() {
    let store = store().await;
    store.save(None, fields("a@example.com")).await.unwrap();
    store.save(None, fields("b@example.com")).await.unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}
