use crate::api::leave_request::{ApplyLeave, UpdateStatus};
use crate::api::users::RegisterUser;
use crate::model::department::Department;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::user::User;
use crate::store::leave::LeaveStats;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management API",
        version = "1.0.0",
        description = r#"
## Leave Management System

A minimal leave-management backend: register employees, file leave
applications against them, and track each request through
**Pending / Approved / Rejected**.

### 🔹 Key Features
- **User Registration**
  - Register employees with a department, list them (passwords never leave the server)
- **Leave Requests**
  - Apply for a date range with an inclusive day count, validated against the registered users
- **Admin Review**
  - Approve or reject requests; list them with store-wide status counts

### 📦 Response Format
- JSON-based RESTful responses
- Every failure is `{"success": false, "message": "..."}`

### ⚠️ Notes
Storage is in-memory and volatile: all users and requests are lost on
restart. There is no authentication.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::users::register_user,
        crate::api::users::list_users,

        crate::api::leave_request::apply_leave,
        crate::api::leave_request::leave_list,
        crate::api::leave_request::update_leave_status
    ),
    components(
        schemas(
            RegisterUser,
            User,
            Department,
            ApplyLeave,
            UpdateStatus,
            LeaveRequest,
            LeaveStatus,
            LeaveStats
        )
    ),
    tags(
        (name = "Users", description = "Employee registration APIs"),
        (name = "Leave", description = "Leave request APIs"),
    )
)]
pub struct ApiDoc;
