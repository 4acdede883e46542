use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{ConfirmDeletionRequest, DetailResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

use super::AppState;

/// Handler for POST /api/v1/auth/delete-account
///
/// Sends a deletion confirmation code to the signed-in user's email.
/// The account is only removed once the code is confirmed.
pub async fn request_deletion<U, C, Q, T>(
    auth: AuthContext,
    state: web::Data<AppState<U, C, Q, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: VerificationCodeRepository + 'static,
    Q: EmailQueue + 'static,
    T: TokenRepository + 'static,
{
    match state
        .auth_service
        .request_account_deletion(auth.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(DetailResponse::new("Verification code sent to email")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/confirm-deletion
///
/// Confirms account deletion with the emailed code. Every session of
/// the user is revoked and the account is removed.
///
/// # Response
///
/// - 200 OK: account deleted
/// - 400 Bad Request: wrong or expired code
pub async fn confirm_deletion<U, C, Q, T>(
    auth: AuthContext,
    state: web::Data<AppState<U, C, Q, T>>,
    request: web::Json<ConfirmDeletionRequest>,
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
        .confirm_account_deletion(auth.user_id, &request.code)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(DetailResponse::new("Account deleted")),
        Err(error) => handle_domain_error(error),
    }
}
