use std::str::FromStr;

use chrono::Utc;

use super::Store;
use crate::error::ApiError;
use crate::model::{department::Department, user::User};

/// Same shape the original enforced: `local@domain.tld`, no whitespace or
/// extra `@`, domain with at least one dot and non-empty parts.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl Store {
    /// Registers an employee. Checks run in a fixed order (required fields,
    /// email shape, duplicate email, department) and nothing is stored unless
    /// all of them pass. Email comparison is case-insensitive; the stored
    /// email is trimmed and lower-cased, the name trimmed.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        department: &str,
    ) -> Result<User, ApiError> {
        if name.trim().is_empty()
            || email.trim().is_empty()
            || password.trim().is_empty()
            || department.trim().is_empty()
        {
            return Err(ApiError::validation(
                "All fields are required (name, email, password, department)",
            ));
        }

        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(ApiError::validation("Please provide a valid email address"));
        }

        if self.users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
            return Err(ApiError::conflict("User with this email already exists"));
        }

        let department = Department::from_str(department).map_err(|_| {
            ApiError::validation(format!(
                "Invalid department. Must be one of: {}",
                Department::valid_values()
            ))
        })?;

        let user = User {
            id: self.alloc_id(),
            name: name.trim().to_string(),
            email,
            // stored as given, never hashed -- known weakness of the system
            password: password.to_string(),
            department,
            registered_at: Utc::now(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// All registered users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}
