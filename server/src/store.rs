use async_trait::async_trait;
use chrono::NaiveDate;
use entity::employees::{self, Entity as Employees};
use platform_db::DbPool;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, PaginatorTrait, SqlErr};
use serde::Deserialize;
use thiserror::Error;

pub const MAX_ADDRESS_LEN: usize = 255;

/// The write model: every employee attribute except the id.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub location_city: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub telephone: String,
    pub position_title: String,
    pub hire_date: NaiveDate,
    pub email: String,
    pub salary: f64,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage for employee records. The production implementation
/// runs on sea-orm; tests substitute an in-memory double through the
/// same seam.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every stored record, no ordering guarantee.
    async fn find_all(&self) -> StoreResult<Vec<employees::Model>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<employees::Model>>;

    /// Inserts (the store assigns the id) when `id` is `None`, overwrites
    /// the row with that id otherwise. Empty required fields, an over-long
    /// address, or a duplicate email fail with [`StoreError::Constraint`].
    async fn save(&self, id: Option<i64>, fields: EmployeeFields)
    -> StoreResult<employees::Model>;

    /// Removes the row when present; a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;
}

#[derive(Clone)]
pub struct SeaOrmStore {
    pool: DbPool,
}

impl SeaOrmStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn check_fields(fields: &EmployeeFields) -> StoreResult<()> {
    let required = [
        ("firstName", &fields.first_name),
        ("lastName", &fields.last_name),
        ("locationCity", &fields.location_city),
        ("address", &fields.address),
        ("telephone", &fields.telephone),
        ("positionTitle", &fields.position_title),
        ("email", &fields.email),
        ("status", &fields.status),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(StoreError::Constraint(format!("{name} must not be empty")));
        }
    }
    if fields.address.len() > MAX_ADDRESS_LEN {
        return Err(StoreError::Constraint(format!(
            "address exceeds {MAX_ADDRESS_LEN} characters"
        )));
    }
    Ok(())
}

fn active_model(id: Option<i64>, fields: EmployeeFields) -> employees::ActiveModel {
    let mut model = employees::ActiveModel {
        first_name: Set(fields.first_name),
        middle_name: Set(fields.middle_name),
        last_name: Set(fields.last_name),
        location_city: Set(fields.location_city),
        address: Set(fields.address),
        date_of_birth: Set(fields.date_of_birth),
        telephone: Set(fields.telephone),
        position_title: Set(fields.position_title),
        hire_date: Set(fields.hire_date),
        email: Set(fields.email),
        salary: Set(fields.salary),
        status: Set(fields.status),
        ..Default::default()
    };
    if let Some(id) = id {
        model.id = Set(id);
    }
    model
}

fn map_save_err(err: sea_orm::DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => StoreError::Constraint(message),
        _ => StoreError::Db(err),
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmStore {
    async fn find_all(&self) -> StoreResult<Vec<employees::Model>> {
        Ok(Employees::find().all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<employees::Model>> {
        Ok(Employees::find_by_id(id).one(&self.pool).await?)
    }

    async fn save(
        &self,
        id: Option<i64>,
        fields: EmployeeFields,
    ) -> StoreResult<employees::Model> {
        check_fields(&fields)?;
        let is_update = id.is_some();
        let model = active_model(id, fields);
        let saved = if is_update {
            model.update(&self.pool).await
        } else {
            model.insert(&self.pool).await
        };
        saved.map_err(map_save_err)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        Employees::delete_by_id(id).exec(&self.pool).await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        Ok(Employees::find_by_id(id).one(&self.pool).await?.is_some())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(Employees::find().count(&self.pool).await?)
    }
}
