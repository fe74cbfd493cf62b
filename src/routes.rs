use crate::config::Settings;
use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

pub const SERVICE_TITLE: &str = "PRISM API";
pub const SERVICE_DESCRIPTION: &str = "Prompt Refinement & Image Synthesis Manager";

/// Shared, read-only state handed to every worker.
pub struct AppState {
    pub settings: Settings,
}

#[derive(Serialize)]
struct RootResponse {
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: format!("{SERVICE_TITLE} is running"),
    })
}

// --- Health Check ---
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "healthy" })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Development CORS policy: any origin, method and header, with credentials.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Access logging, only active when the `debug` setting is on.
pub fn request_logger(settings: &Settings) -> Condition<Logger> {
    Condition::new(settings.debug, Logger::default())
}
