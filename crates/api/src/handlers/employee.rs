//! Handlers for the `/employees` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::error::CoreError;
use roster_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};

use crate::error::AppResult;
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;

/// GET /employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

/// GET /employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or(CoreError::employee_not_found(id))?;
    Ok(Json(employee))
}

/// POST /employees
///
/// Responds 201 with the stored record and a `Location` pointing at it.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let employee = state.employees.insert(&input).await?;
    tracing::debug!(employee_id = %employee.id, "Employee created");

    let location = format!("/employees/{}", employee.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(employee)))
}

/// PUT /employees/{id}
///
/// Replaces all mutable fields.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(input): JsonBody<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    input.validate()?;

    let employee = state
        .employees
        .update(id, &input)
        .await?
        .ok_or(CoreError::employee_not_found(id))?;
    tracing::debug!(employee_id = %id, "Employee updated");
    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> AppResult<StatusCode> {
    if !state.employees.delete(id).await? {
        return Err(CoreError::employee_not_found(id).into());
    }
    tracing::debug!(employee_id = %id, "Employee deleted");
    Ok(StatusCode::OK)
}
