use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthUserResponse, VerifyCodeRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

use super::AppState;

/// Handler for POST /api/v1/auth/verify
///
/// Verifies the emailed code and signs the user in, returning the
/// public user fields and a fresh token pair.
///
/// # Request Body
///
/// ```json
/// { "email": "owner@example.com", "code": "123456" }
/// ```
///
/// # Response
///
/// - 201 Created: first-ever confirmation of this email
/// - 200 OK: repeat sign-in of an already confirmed account
/// - 400 Bad Request: wrong or expired code
/// - 404 Not Found: email is not registered
pub async fn verify_code<U, C, Q, T>(
    state: web::Data<AppState<U, C, Q, T>>,
    request: web::Json<VerifyCodeRequest>,
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

    match state
        .auth_service
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(outcome) => {
            let body = AuthUserResponse::from(outcome.payload);
            if outcome.first_confirmation {
                HttpResponse::Created().json(body)
            } else {
                HttpResponse::Ok().json(body)
            }
        }
        Err(error) => handle_domain_error(error),
    }
}
