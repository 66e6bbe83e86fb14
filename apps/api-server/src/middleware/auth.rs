//! Authentication extractor for the demo session.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Extractor that admits a request only while the session flag is set.
///
/// Use this in handlers to require sign-in:
/// ```ignore
/// async fn protected_route(_session: Authenticated) -> impl Responder {
///     "only for signed-in users"
/// }
/// ```
///
/// This is the demo session model: one boolean, no identity. Extraction
/// reads the cached flag and never touches storage.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated;

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AppError::Internal(
                "Server configuration error".to_string(),
            )));
        };

        if state.session.is_authenticated() {
            ready(Ok(Authenticated))
        } else {
            ready(Err(AppError::Unauthorized(
                "Sign in to continue".to_string(),
            )))
        }
    }
}
