//! Sport catalog for the composer picker and the filter chips.

use actix_web::HttpResponse;
use serde::Serialize;

use gobuddy_core::domain::sport;
use gobuddy_shared::ApiResponse;

/// One catalog entry: canonical name plus display icon.
#[derive(Debug, Serialize)]
pub struct SportEntry {
    pub name: &'static str,
    pub icon: &'static str,
}

/// GET /api/sports
///
/// Public. The catalog is fixed at compile time.
pub async fn catalog() -> HttpResponse {
    let sports: Vec<SportEntry> = sport::SPORTS
        .iter()
        .map(|&name| SportEntry {
            name,
            icon: sport::icon(name),
        })
        .collect();

    HttpResponse::Ok().json(ApiResponse::ok(sports))
}
