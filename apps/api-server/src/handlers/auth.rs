//! Session handlers - the demo OTP sign-in flow.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use gobuddy_shared::ApiResponse;
use gobuddy_shared::dto::{OtpChallengeResponse, OtpRequest, OtpVerifyRequest, SessionResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/otp/request
///
/// Issues the demo challenge and echoes the code: there is no SMS
/// gateway here, the client shows the code in a toast.
pub async fn request_otp(
    state: web::Data<AppState>,
    body: web::Json<OtpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let challenge = state.session.request_otp(&req.phone).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        OtpChallengeResponse {
            expires_in_secs: challenge.seconds_left(Utc::now()),
            phone: challenge.phone,
            code: challenge.code,
        },
        "Verification code sent",
    )))
}

/// POST /api/auth/otp/verify
pub async fn verify_otp(
    state: web::Data<AppState>,
    body: web::Json<OtpVerifyRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state.session.verify_otp(&req.phone, &req.code).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        SessionResponse {
            authenticated: true,
        },
        "Signed in",
    )))
}

/// GET /api/auth/session
pub async fn session(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(SessionResponse {
        authenticated: state.session.is_authenticated(),
    }))
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    state.session.log_out().await;

    HttpResponse::Ok().json(ApiResponse::ok(SessionResponse {
        authenticated: false,
    }))
}
