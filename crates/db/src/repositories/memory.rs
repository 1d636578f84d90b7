//! In-process [`EmployeeRepository`] used by the HTTP-level tests.
//!
//! Records are kept in insertion order, which is also the order `list`
//! returns them in. Ids come from `Uuid::new_v4`.

use async_trait::async_trait;
use roster_core::types::DbId;
use tokio::sync::RwLock;

use super::EmployeeRepository;
use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepo {
    rows: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Ok(self.rows.read().await.clone())
    }

    async fn insert(&self, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let employee = Employee {
            id: DbId::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            salary: input.salary,
        };
        self.rows.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        row.name = input.name.clone();
        row.email = input.email.clone();
        row.phone = input.phone.clone();
        row.salary = input.salary;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
