use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::store::{self, SharedStore};

/// Missing fields default to empty strings so the store produces the
/// canonical "All fields are required" message instead of a serde error.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterUser {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@example.com", format = "email")]
    pub email: String,
    #[schema(example = "secret1")]
    pub password: String,
    #[schema(example = "HR")]
    pub department: String,
}

/// Register a new employee.
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = Object, example = json!({
            "success": true,
            "message": "User registered successfully",
            "user": {
                "id": 1,
                "name": "Ann",
                "email": "ann@example.com",
                "department": "HR",
                "registeredAt": "2026-01-01T00:00:00Z"
            }
        })),
        (status = 400, description = "Missing field, bad email, or unknown department", body = Object, example = json!({
            "success": false,
            "message": "Please provide a valid email address"
        })),
        (status = 409, description = "Email already registered", body = Object, example = json!({
            "success": false,
            "message": "User with this email already exists"
        }))
    ),
    tag = "Users"
)]
pub async fn register_user(
    store: web::Data<SharedStore>,
    payload: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    let mut store = store::lock(&store)?;
    let user = store.register(
        &payload.name,
        &payload.email,
        &payload.password,
        &payload.department,
    )?;

    info!(user_id = user.id, email = %user.email, "New user registered");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "User registered successfully",
        "user": user,
    })))
}

/// List all registered employees, oldest first, passwords excluded.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All registered users", body = Object, example = json!({
            "success": true,
            "count": 1,
            "users": [{
                "id": 1,
                "name": "Ann",
                "email": "ann@example.com",
                "department": "HR",
                "registeredAt": "2026-01-01T00:00:00Z"
            }]
        }))
    ),
    tag = "Users"
)]
pub async fn list_users(store: web::Data<SharedStore>) -> Result<HttpResponse, ApiError> {
    let store = store::lock(&store)?;
    let users = store.users();

    info!(count = users.len(), "Retrieved users");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": users.len(),
        "users": users,
    })))
}
