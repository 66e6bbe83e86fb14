//! Liveness endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub posts: usize,
    pub timestamp: String,
}

/// GET /api/health
///
/// Public. Reports the loaded post count alongside liveness so a
/// monitor can tell an empty store from a seeded one.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        posts: state.posts.len().await,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
