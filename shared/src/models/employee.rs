//! Employee profile DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Salary scheme attached to an employee profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    Hourly,
    Biweekly,
    Monthly,
}

/// Profile lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

/// Employee profile creation payload
///
/// `user_id` must reference an existing account holding the `employee` role;
/// the handler enforces that rule, the fields below carry their own limits.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeCreate {
    pub user_id: Uuid,
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    #[validate(length(min = 5, max = 50))]
    pub identification: String,
    #[validate(length(max = 100))]
    pub position: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub salary_type: Option<SalaryType>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = non_negative))]
    pub salary_hourly: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = non_negative))]
    pub salary_biweekly: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = non_negative))]
    pub salary_monthly: Option<Decimal>,
    pub resume_url: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Public view of an employee profile (mirrors an `employees` row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub identification: String,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub salary_type: Option<SalaryType>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_hourly: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_biweekly: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_monthly: Option<Decimal>,
    pub resume_url: Option<String>,
    pub status: EmployeeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("salary_negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_payload() -> EmployeeCreate {
        EmployeeCreate {
            user_id: Uuid::nil(),
            name: "Ana Torres".into(),
            identification: "CC-10293847".into(),
            position: Some("Backend developer".into()),
            phone: None,
            address: None,
            salary_type: Some(SalaryType::Monthly),
            salary_hourly: None,
            salary_biweekly: None,
            salary_monthly: Some(Decimal::new(4_500_00, 2)),
            resume_url: None,
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(base_payload().validate().is_ok());
    }

    #[test]
    fn test_identification_bounds() {
        let mut payload = base_payload();
        payload.identification = "1234".into();
        assert!(payload.validate().is_err());

        payload.identification = "1".repeat(51);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut payload = base_payload();
        payload.salary_monthly = Some(Decimal::new(-1, 0));
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_salary_type_serde() {
        assert_eq!(
            serde_json::to_string(&SalaryType::Biweekly).unwrap(),
            "\"biweekly\""
        );
        assert!(serde_json::from_str::<SalaryType>("\"weekly\"").is_err());
    }

    #[test]
    fn test_status_defaults_to_active() {
        let payload: EmployeeCreate = serde_json::from_str(
            r#"{
                "user_id": "00000000-0000-0000-0000-000000000000",
                "name": "Ana Torres",
                "identification": "CC-10293847"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.status, EmployeeStatus::Active);
        assert!(payload.salary_type.is_none());
    }

    #[test]
    fn test_salary_on_the_wire_as_number() {
        let mut payload = base_payload();
        payload.salary_monthly = Some(Decimal::new(4_500_50, 2));
        // deserialize accepts plain JSON numbers
        let parsed: EmployeeCreate = serde_json::from_str(
            r#"{
                "user_id": "00000000-0000-0000-0000-000000000000",
                "name": "Ana Torres",
                "identification": "CC-10293847",
                "salary_type": "monthly",
                "salary_monthly": 4500.5
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.salary_monthly, payload.salary_monthly);
    }
}
