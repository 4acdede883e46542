use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{DetailResponse, RequestCodeRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

use super::AppState;

/// Handler for POST /api/v1/auth
///
/// Requests a verification code for an email address. Unknown emails
/// are registered on the spot; the account stays unverified until a
/// code is confirmed.
///
/// # Request Body
///
/// ```json
/// { "email": "owner@example.com" }
/// ```
///
/// # Response
///
/// - 200 OK: code sent to an already confirmed account
/// - 201 Created: account newly registered or still awaiting its first
///   confirmation
/// - 400 Bad Request: invalid email
/// - 403 Forbidden: registration disabled
pub async fn request_code<U, C, Q, T>(
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

    match state.auth_service.request_code(&request.email).await {
        Ok(outcome) => {
            let body = DetailResponse::new("Verification code sent to email");
            if outcome.registered {
                HttpResponse::Created().json(body)
            } else {
                HttpResponse::Ok().json(body)
            }
        }
        Err(error) => handle_domain_error(error),
    }
}
