use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{DetailResponse, RequestCodeRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

use super::AppState;

/// Handler for POST /api/v1/auth/resend-code
///
/// Sends a fresh verification code to an existing account. Unlike the
/// code request endpoint this never registers anyone.
///
/// # Response
///
/// - 200 OK: code sent
/// - 404 Not Found: email is not registered
pub async fn resend_code<U, C, Q, T>(
    state: web::Data<AppState<U, C, Q, T>>,
    request: web::Json<RequestCodeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: VerificationCodeRepository + 'static,
    Q: EmailQueue + 'static,
    T: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.resend_code(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(DetailResponse::new("Verification code sent to email")),
        Err(error) => handle_domain_error(error),
    }
}
