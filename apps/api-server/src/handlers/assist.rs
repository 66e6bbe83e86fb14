//! Content assist handler.

use actix_web::{HttpResponse, web};

use gobuddy_shared::ApiResponse;
use gobuddy_shared::dto::{EnhanceRequest, EnhanceResponse};

use crate::state::AppState;

/// POST /api/assist/enhance
///
/// Public, and always answers 200 with a rewrite: the service treats
/// every backend failure as a cue for the local fallback.
pub async fn enhance(state: web::Data<AppState>, body: web::Json<EnhanceRequest>) -> HttpResponse {
    let text = state.assist.enhance(&body.text).await;

    HttpResponse::Ok().json(ApiResponse::ok(EnhanceResponse { text }))
}
