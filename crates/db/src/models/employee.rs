//! Employee entity model and DTOs.

use roster_core::employee::{validate_email, validate_name};
use roster_core::error::CoreError;
use roster_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// An employee row from the `employees` table.
///
/// Serializes as `{ id, name, email, phone, salary }` with `salary` as a
/// JSON number. The row's bookkeeping timestamps are never selected.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "salary_from_number"
    )]
    pub salary: Decimal,
}

/// Read a salary from a JSON number. Strings and other types are rejected.
fn salary_from_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Decimal::try_from(value).map_err(serde::de::Error::custom)
}

/// DTO for creating a new employee. Carries no id; the store assigns one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    /// Omitted and `null` are equivalent.
    pub phone: Option<String>,
    #[serde(deserialize_with = "salary_from_number")]
    pub salary: Decimal,
}

impl CreateEmployee {
    /// Build a validated create request.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        salary: Decimal,
    ) -> Result<Self, CoreError> {
        let input = Self {
            name: name.into(),
            email: email.into(),
            phone,
            salary,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the required fields of a deserialized request.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

/// DTO for replacing an existing employee's fields.
///
/// Full-replace semantics: every field is written, so an omitted `phone`
/// clears the stored value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateEmployee {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(deserialize_with = "salary_from_number")]
    pub salary: Decimal,
}

impl UpdateEmployee {
    /// Build a validated update request.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        salary: Decimal,
    ) -> Result<Self, CoreError> {
        let input = Self {
            name: name.into(),
            email: email.into(),
            phone,
            salary,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the required fields of a deserialized request.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_deserializes_without_phone() {
        let input: CreateEmployee = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "salary": 1000
        }))
        .unwrap();

        assert_eq!(input.phone, None);
        assert_eq!(input.salary, Decimal::new(1000, 0));
    }

    #[test]
    fn create_ignores_client_supplied_id() {
        let input: CreateEmployee = serde_json::from_value(json!({
            "id": "6f1c8c3e-2d7a-4d54-9b0e-1f2a3b4c5d6e",
            "name": "Ada",
            "email": "ada@example.com",
            "salary": 10.5
        }))
        .unwrap();

        assert_eq!(input.name, "Ada");
        assert_eq!(input.salary, Decimal::new(105, 1));
    }

    #[test]
    fn create_requires_email() {
        let result = serde_json::from_value::<CreateEmployee>(json!({
            "name": "Ada",
            "salary": 1000
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_requires_salary() {
        let result = serde_json::from_value::<CreateEmployee>(json!({
            "name": "Ada",
            "email": "ada@example.com"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_string_salary() {
        let result = serde_json::from_value::<CreateEmployee>(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "salary": "1000"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_rejects_string_salary() {
        let result = serde_json::from_value::<UpdateEmployee>(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "salary": "12.5"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn employee_round_trips_through_json() {
        let employee = Employee {
            id: DbId::nil(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: Some("123".into()),
            salary: Decimal::new(1250, 1),
        };

        let value = serde_json::to_value(&employee).unwrap();
        let decoded: Employee = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, employee);
    }

    #[test]
    fn create_new_rejects_empty_name() {
        let result = CreateEmployee::new("", "ada@example.com", None, Decimal::ZERO);
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_new_rejects_empty_email() {
        let result = UpdateEmployee::new("Ada", "", None, Decimal::ZERO);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("email"));
    }

    #[test]
    fn update_new_keeps_all_fields() {
        let input =
            UpdateEmployee::new("Ada L.", "ada@example.com", Some("123".into()), Decimal::new(1200, 0))
                .unwrap();
        assert_eq!(input.phone.as_deref(), Some("123"));
        assert_eq!(input.salary, Decimal::new(1200, 0));
    }

    #[test]
    fn employee_serializes_wire_shape() {
        let employee = Employee {
            id: DbId::nil(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            salary: Decimal::new(1000, 0),
        };

        let value = serde_json::to_value(&employee).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
        assert!(value["phone"].is_null());
        assert_eq!(value["salary"].as_f64(), Some(1000.0));
    }
}
