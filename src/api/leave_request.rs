use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::store::{self, SharedStore};

/// Missing fields default to empty strings so the store produces the
/// canonical "All fields are required" message instead of a serde error.
/// Dates stay strings here; the store owns the parse so a bad date maps to
/// the documented validation message.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplyLeave {
    #[schema(example = "Ann")]
    pub employee_name: String,
    #[schema(example = "2099-01-10", format = "date")]
    pub from_date: String,
    #[schema(example = "2099-01-12", format = "date")]
    pub to_date: String,
    #[schema(example = "Family event travel")]
    pub reason: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaveFilter {
    /// Restrict the listed items to one status. An unknown value is ignored,
    /// not rejected.
    #[param(example = "Approved")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStatus {
    #[schema(example = "Approved")]
    pub status: String,
}

/// Submit a leave application for a registered employee.
#[utoipa::path(
    post,
    path = "/api/leave/apply",
    request_body = ApplyLeave,
    responses(
        (status = 201, description = "Leave request filed as Pending", body = Object, example = json!({
            "success": true,
            "message": "Leave request submitted successfully",
            "leaveRequest": {
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
            }
        })),
        (status = 400, description = "Missing field, bad date, or short reason", body = Object, example = json!({
            "success": false,
            "message": "Reason must be at least 10 characters long"
        })),
        (status = 404, description = "Employee not registered", body = Object, example = json!({
            "success": false,
            "message": "Employee not found. Only registered users can apply for leave."
        }))
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    store: web::Data<SharedStore>,
    payload: web::Json<ApplyLeave>,
) -> Result<HttpResponse, ApiError> {
    let mut store = store::lock(&store)?;
    let request = store.apply(
        &payload.employee_name,
        &payload.from_date,
        &payload.to_date,
        &payload.reason,
    )?;

    info!(
        leave_id = request.id,
        employee = %request.employee_name,
        days = request.days,
        "New leave request"
    );

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Leave request submitted successfully",
        "leaveRequest": request,
    })))
}

/// List leave requests, newest application first, with store-wide stats.
#[utoipa::path(
    get,
    path = "/api/leave/all",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Requests plus counts over the whole store", body = Object, example = json!({
            "success": true,
            "count": 1,
            "stats": { "total": 2, "pending": 1, "approved": 1, "rejected": 0 },
            "leaveRequests": []
        }))
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    store: web::Data<SharedStore>,
    query: web::Query<LeaveFilter>,
) -> Result<HttpResponse, ApiError> {
    let store = store::lock(&store)?;
    let (items, stats) = store.leaves_filtered(query.status.as_deref());

    info!(count = items.len(), "Retrieved leave requests");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": items.len(),
        "stats": stats,
        "leaveRequests": items,
    })))
}

/// Overwrite a request's status (admin action).
#[utoipa::path(
    put,
    path = "/api/leave/{id}/status",
    params(
        ("id" = u64, Path, description = "Leave request id")
    ),
    request_body = UpdateStatus,
    responses(
        (status = 200, description = "Status overwritten", body = Object, example = json!({
            "success": true,
            "message": "Leave request approved successfully",
            "leaveRequest": {}
        })),
        (status = 400, description = "Unknown status value", body = Object, example = json!({
            "success": false,
            "message": "Invalid status. Must be one of: Pending, Approved, Rejected"
        })),
        (status = 404, description = "No request with that id", body = Object, example = json!({
            "success": false,
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn update_leave_status(
    store: web::Data<SharedStore>,
    path: web::Path<String>,
    payload: web::Json<UpdateStatus>,
) -> Result<HttpResponse, ApiError> {
    // a non-numeric id can't match any stored request
    let id: u64 = path
        .into_inner()
        .parse()
        .map_err(|_| ApiError::not_found("Leave request not found"))?;

    let mut store = store::lock(&store)?;
    let request = store.set_status(id, &payload.status)?;

    info!(leave_id = id, status = %request.status, "Leave request status updated");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!(
            "Leave request {} successfully",
            request.status.to_string().to_lowercase()
        ),
        "leaveRequest": request,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
    use actix_web::{App, web::Data};
    use serde_json::Value;

    use crate::store::Store;

    fn leave_scope() -> actix_web::Scope {
        web::scope("/api/leave")
            .service(web::resource("/apply").route(web::post().to(apply_leave)))
            .service(web::resource("/all").route(web::get().to(leave_list)))
            .service(web::resource("/{id}/status").route(web::put().to(update_leave_status)))
    }

    fn seeded_store() -> Data<SharedStore> {
        let mut store = Store::new();
        store
            .register("Ann", "ann@x.com", "secret1", "HR")
            .unwrap();
        Data::new(SharedStore::new(store))
    }

    #[actix_web::test]
    async fn full_lifecycle_over_http() {
        let store = seeded_store();
        let app = init_service(App::new().app_data(store.clone()).service(leave_scope())).await;

        let req = TestRequest::post()
            .uri("/api/leave/apply")
            .set_json(json!({
                "employeeName": "Ann",
                "fromDate": "2099-01-10",
                "toDate": "2099-01-12",
                "reason": "Family event travel"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["leaveRequest"]["days"], 3);
        assert_eq!(body["leaveRequest"]["status"], "Pending");
        assert_eq!(body["leaveRequest"]["employeeEmail"], "ann@x.com");
        let id = body["leaveRequest"]["id"].as_u64().unwrap();

        let req = TestRequest::put()
            .uri(&format!("/api/leave/{id}/status"))
            .set_json(json!({ "status": "Approved" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["message"], "Leave request approved successfully");
        assert_eq!(body["leaveRequest"]["status"], "Approved");
        assert!(body["leaveRequest"].get("updatedAt").is_some());

        let resp = call_service(
            &app,
            TestRequest::get()
                .uri("/api/leave/all?status=Approved")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["stats"]["total"], 1);
        assert_eq!(body["stats"]["approved"], 1);
    }

    #[actix_web::test]
    async fn apply_for_unregistered_employee_is_404() {
        let store = seeded_store();
        let app = init_service(App::new().app_data(store.clone()).service(leave_scope())).await;

        let req = TestRequest::post()
            .uri("/api/leave/apply")
            .set_json(json!({
                "employeeName": "Bob",
                "fromDate": "2099-01-10",
                "toDate": "2099-01-12",
                "reason": "Family event travel"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn status_update_rejects_unknown_value_and_id() {
        let store = seeded_store();
        let app = init_service(App::new().app_data(store.clone()).service(leave_scope())).await;

        let req = TestRequest::put()
            .uri("/api/leave/1/status")
            .set_json(json!({ "status": "Cancelled" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = TestRequest::put()
            .uri("/api/leave/9999/status")
            .set_json(json!({ "status": "Approved" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // a non-numeric id behaves like any other unmatched id
        let req = TestRequest::put()
            .uri("/api/leave/abc/status")
            .set_json(json!({ "status": "Approved" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn invalid_filter_returns_everything() {
        let store = seeded_store();
        let app = init_service(App::new().app_data(store.clone()).service(leave_scope())).await;

        let req = TestRequest::post()
            .uri("/api/leave/apply")
            .set_json(json!({
                "employeeName": "Ann",
                "fromDate": "2099-01-10",
                "toDate": "2099-01-10",
                "reason": "Medical appointment"
            }))
            .to_request();
        call_service(&app, req).await;

        let resp = call_service(
            &app,
            TestRequest::get()
                .uri("/api/leave/all?status=Cancelled")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["count"], 1);
    }
}
