//! PostgreSQL implementation of [`EmployeeRepository`].

use async_trait::async_trait;
use roster_core::types::DbId;
use sqlx::PgPool;

use super::EmployeeRepository;
use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, salary";

/// Employee repository backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepo {
    pool: PgPool,
}

impl PgEmployeeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY created_at, id");
        sqlx::query_as::<_, Employee>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn insert(&self, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, email, phone, salary)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.salary)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                name = $2,
                email = $3,
                phone = $4,
                salary = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.salary)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
