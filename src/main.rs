use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, get, web};
use dotenvy::dotenv;

mod api;
mod config;
mod docs;
mod error;
mod model;
mod routes;
mod store;

use config::Config;
use error::ApiError;
use serde_json::json;
use store::{SharedStore, Store};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;

/// Service self-description with live store counts, as the original exposed
/// at its root.
#[get("/")]
async fn index(store: Data<SharedStore>) -> Result<HttpResponse, ApiError> {
    let store = store::lock(&store)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave Management API",
        "version": "1.0.0",
        "endpoints": {
            "users": {
                "POST /users": "Register a user",
                "GET /users": "Get all registered users"
            },
            "leave": {
                "POST /api/leave/apply": "Apply for leave (Only registered users)",
                "GET /api/leave/all": "Get all leave requests (Admin)",
                "PUT /api/leave/{id}/status": "Update leave request status (Admin)"
            }
        },
        "stats": {
            "totalUsers": store.user_count(),
            "totalLeaveRequests": store.leave_count()
        }
    })))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Route not found"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    // single shared store; everything lives in memory and dies with the process
    let store = Data::new(SharedStore::new(Store::new()));

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(Data::new(config.clone()))
            // malformed JSON bodies get the same failure shape as everything else
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(json!({
                        "success": false,
                        "message": message
                    })),
                )
                .into()
            }))
            .service(index)
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
            .default_service(web::route().to(not_found))
    })
    .bind(server_addr)?
    .run()
    .await
}
