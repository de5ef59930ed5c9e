use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::Store;
use crate::error::ApiError;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};

/// Counts over the whole store, independent of any status filter applied to
/// the listed items.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaveStats {
    #[schema(example = 4)]
    pub total: usize,
    #[schema(example = 2)]
    pub pending: usize,
    #[schema(example = 1)]
    pub approved: usize,
    #[schema(example = 1)]
    pub rejected: usize,
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::from_str(value.trim()).map_err(|_| ApiError::validation("Invalid date format"))
}

/// Human-facing date string kept alongside the machine timestamp, as the
/// original exposed both.
fn display_date(at: DateTime<Utc>) -> String {
    at.format("%m/%d/%Y").to_string()
}

impl Store {
    /// Validates and files a leave application. The checks run in a fixed
    /// order (required fields, registered employee, date parse, not in the
    /// past, range order, reason length) and the store is only touched once
    /// every check has passed.
    ///
    /// The employee lookup is an exact, case-sensitive name match, unlike the
    /// case-insensitive email key on registration. Email and department are
    /// copied from the matched user as creation-time snapshots.
    pub fn apply(
        &mut self,
        employee_name: &str,
        from_date: &str,
        to_date: &str,
        reason: &str,
    ) -> Result<LeaveRequest, ApiError> {
        if employee_name.trim().is_empty()
            || from_date.trim().is_empty()
            || to_date.trim().is_empty()
            || reason.trim().is_empty()
        {
            return Err(ApiError::validation(
                "All fields are required (employeeName, fromDate, toDate, reason)",
            ));
        }

        let (employee_email, employee_department) =
            match self.users.iter().find(|u| u.name == employee_name) {
                Some(user) => (user.email.clone(), user.department),
                None => {
                    return Err(ApiError::not_found(
                        "Employee not found. Only registered users can apply for leave.",
                    ));
                }
            };

        let from = parse_date(from_date)?;
        let to = parse_date(to_date)?;

        let today = Utc::now().date_naive();
        if from < today {
            return Err(ApiError::validation("From date cannot be in the past"));
        }
        if to < from {
            return Err(ApiError::validation(
                "To date cannot be earlier than from date",
            ));
        }

        if reason.trim().chars().count() < 10 {
            return Err(ApiError::validation(
                "Reason must be at least 10 characters long",
            ));
        }

        // inclusive count: from == to is one day
        let days = (to - from).num_days() + 1;

        let now = Utc::now();
        let request = LeaveRequest {
            id: self.alloc_id(),
            employee_name: employee_name.trim().to_string(),
            employee_email,
            employee_department,
            from_date: from,
            to_date: to,
            reason: reason.trim().to_string(),
            days,
            status: LeaveStatus::Pending,
            applied_at: now,
            applied_date: display_date(now),
            updated_at: None,
            updated_date: None,
        };
        self.leaves.push(request.clone());
        Ok(request)
    }

    /// Overwrites a request's status. Any of the three values may be written
    /// regardless of the current one -- Approved back to Pending included.
    /// Stamps updatedAt/updatedDate on every write.
    pub fn set_status(&mut self, id: u64, status: &str) -> Result<LeaveRequest, ApiError> {
        let status = LeaveStatus::from_str(status).map_err(|_| {
            ApiError::validation(format!(
                "Invalid status. Must be one of: {}",
                LeaveStatus::valid_values()
            ))
        })?;

        let request = self
            .leaves
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::not_found("Leave request not found"))?;

        let now = Utc::now();
        request.status = status;
        request.updated_at = Some(now);
        request.updated_date = Some(display_date(now));
        Ok(request.clone())
    }

    /// Requests sorted by application time, newest first, optionally
    /// restricted to one status. A filter value that is not a valid status is
    /// silently ignored (the one documented place this service swallows bad
    /// input). Stats always cover the entire store, not the filtered subset.
    pub fn leaves_filtered(&self, status_filter: Option<&str>) -> (Vec<LeaveRequest>, LeaveStats) {
        let filter = status_filter.and_then(|s| LeaveStatus::from_str(s).ok());

        let mut items: Vec<LeaveRequest> = self
            .leaves
            .iter()
            .filter(|r| filter.is_none_or(|f| r.status == f))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));

        let count_of = |status: LeaveStatus| {
            self.leaves.iter().filter(|r| r.status == status).count()
        };
        let stats = LeaveStats {
            total: self.leaves.len(),
            pending: count_of(LeaveStatus::Pending),
            approved: count_of(LeaveStatus::Approved),
            rejected: count_of(LeaveStatus::Rejected),
        };
        (items, stats)
    }
}
