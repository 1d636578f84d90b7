use std::sync::Arc;

use roster_db::repositories::EmployeeRepository;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Employee persistence (PostgreSQL in production, in-memory in tests).
    pub employees: Arc<dyn EmployeeRepository>,
}
