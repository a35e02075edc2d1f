use std::sync::Arc;

use entity::employees;
use thiserror::Error;

use crate::store::{EmployeeFields, EmployeeStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("employee not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business-facing operations over the store: lookups fail fast, updates
/// rewrite only the contact fields.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<employees::Model>> {
        Ok(self.store.find_all().await?)
    }

    /// Lookup that converts the store's "absent" into a hard failure.
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<employees::Model> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, fields: EmployeeFields) -> ServiceResult<employees::Model> {
        Ok(self.store.save(None, fields).await?)
    }

    /// Applies the contact fields from `patch` onto the stored record.
    /// Position title, hire date, email, salary and status keep their
    /// stored values no matter what the patch carries.
    pub async fn update(&self, id: i64, patch: EmployeeFields) -> ServiceResult<employees::Model> {
        let existing = self.get_by_id(id).await?;
        let merged = EmployeeFields {
            first_name: patch.first_name,
            middle_name: patch.middle_name,
            last_name: patch.last_name,
            location_city: patch.location_city,
            address: patch.address,
            date_of_birth: patch.date_of_birth,
            telephone: patch.telephone,
            position_title: existing.position_title,
            hire_date: existing.hire_date,
            email: existing.email,
            salary: existing.salary,
            status: existing.status,
        };
        Ok(self.store.save(Some(id), merged).await?)
    }

    pub async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        Ok(self.store.delete_by_id(id).await?)
    }

    pub async fn exists_by_id(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.store.exists_by_id(id).await?)
    }

    pub async fn count(&self) -> ServiceResult<u64> {
        Ok(self.store.count().await?)
    }
}
