use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{DetailResponse, LogoutRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented refresh token. With `all_tokens` set, every
/// active session of the user is revoked. Requires a valid access
/// token.
///
/// # Request Body
///
/// ```json
/// { "refresh": "<refresh token>", "all_tokens": false }
/// ```
pub async fn logout<U, C, Q, T>(
    _auth: AuthContext,
    state: web::Data<AppState<U, C, Q, T>>,
    request: web::Json<LogoutRequest>,
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
        .logout(&request.refresh, request.all_tokens)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(DetailResponse::new("Logged out")),
        Err(error) => handle_domain_error(error),
    }
}
