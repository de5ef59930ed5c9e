use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use super::department::Department;

/// Request status. The only reachable initial value is Pending; an admin
/// overwrite may set any value afterwards, including back to Pending (flat
/// overwrite, no transition graph — observed behavior, possibly a bug,
/// deliberately not guarded here).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
    ToSchema,
)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Comma-separated list of the accepted values, for error messages.
    pub fn valid_values() -> String {
        use strum::IntoEnumIterator;
        Self::iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A leave petition. Employee email and department are snapshots copied from
/// the matching user at creation time; a later rename of the user orphans the
/// request (employeeName is the join key, by design of the original system).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 2,
    "employeeName": "Ann",
    "employeeEmail": "ann@example.com",
    "employeeDepartment": "HR",
    "fromDate": "2099-01-10",
    "toDate": "2099-01-12",
    "reason": "Family event travel",
    "days": 3,
    "status": "Pending",
    "appliedAt": "2026-01-01T00:00:00Z",
    "appliedDate": "01/01/2026"
}))]
pub struct LeaveRequest {
    #[schema(example = 2)]
    pub id: u64,
    #[schema(example = "Ann")]
    pub employee_name: String,
    #[schema(example = "ann@example.com")]
    pub employee_email: String,
    pub employee_department: Department,
    #[schema(example = "2099-01-10", format = "date", value_type = String)]
    pub from_date: NaiveDate,
    #[schema(example = "2099-01-12", format = "date", value_type = String)]
    pub to_date: NaiveDate,
    #[schema(example = "Family event travel")]
    pub reason: String,
    /// Inclusive day count: fromDate == toDate is one day.
    #[schema(example = 3)]
    pub days: i64,
    pub status: LeaveStatus,
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub applied_at: DateTime<Utc>,
    #[schema(example = "01/01/2026")]
    pub applied_date: String,
    /// Set only once the status moves away from its initial Pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-02T00:00:00Z", format = "date-time", value_type = Option<String>)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_parses_exact_names_only() {
        assert_eq!(LeaveStatus::from_str("Pending").unwrap(), LeaveStatus::Pending);
        assert_eq!(LeaveStatus::from_str("Approved").unwrap(), LeaveStatus::Approved);
        assert_eq!(LeaveStatus::from_str("Rejected").unwrap(), LeaveStatus::Rejected);
        assert!(LeaveStatus::from_str("Cancelled").is_err());
        assert!(LeaveStatus::from_str("approved").is_err());
    }

    #[test]
    fn update_fields_absent_until_set() {
        let request = LeaveRequest {
            id: 1,
            employee_name: "Ann".into(),
            employee_email: "ann@example.com".into(),
            employee_department: Department::Hr,
            from_date: NaiveDate::from_ymd_opt(2099, 1, 10).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2099, 1, 12).unwrap(),
            reason: "Family event travel".into(),
            days: 3,
            status: LeaveStatus::Pending,
            applied_at: Utc::now(),
            applied_date: "01/01/2026".into(),
            updated_at: None,
            updated_date: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("updatedAt").is_none());
        assert!(value.get("updatedDate").is_none());
        assert_eq!(value["employeeDepartment"], "HR");
        assert_eq!(value["fromDate"], "2099-01-10");
    }
}
