use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::department::Department;

/// A registered employee. The password is kept as given (a known weakness of
/// this system, not a goal) and never leaves the process: serde skips it in
/// every serialized view.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 1,
    "name": "Ann",
    "email": "ann@example.com",
    "department": "HR",
    "registeredAt": "2026-01-01T00:00:00Z"
}))]
pub struct User {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    pub department: Department,
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_never_serialized() {
        let user = User {
            id: 7,
            name: "Ann".into(),
            email: "ann@example.com".into(),
            password: "secret1".into(),
            department: Department::Hr,
            registered_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["department"], "HR");
    }
}
