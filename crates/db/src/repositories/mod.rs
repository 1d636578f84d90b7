//! Repository layer for the `employees` table.
//!
//! [`EmployeeRepository`] is the persistence boundary the HTTP handlers
//! depend on. Every method takes and returns plain values; there is no
//! identity map or change tracking, so an update carries the full new field
//! set explicitly.

use async_trait::async_trait;
use roster_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

pub mod employee_repo;
pub mod memory;

pub use employee_repo::PgEmployeeRepo;
pub use memory::InMemoryEmployeeRepo;

/// Collection-like access to employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by id. `None` if no such row exists.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, sqlx::Error>;

    /// List every employee, oldest first.
    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error>;

    /// Insert a new employee with a freshly generated id, returning the stored row.
    async fn insert(&self, input: &CreateEmployee) -> Result<Employee, sqlx::Error>;

    /// Overwrite all mutable fields of an employee.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn update(
        &self,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error>;

    /// Permanently delete an employee. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}
