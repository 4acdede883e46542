use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{RefreshRequest, TokenPairResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

use super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new access/refresh pair. The
/// presented refresh token is revoked by the exchange.
///
/// # Response
///
/// - 200 OK: new token pair
/// - 401 Unauthorized: unknown, revoked or expired refresh token
pub async fn refresh<U, C, Q, T>(
    state: web::Data<AppState<U, C, Q, T>>,
    request: web::Json<RefreshRequest>,
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

    match state.auth_service.refresh_token(&request.refresh).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse {
            access: pair.access,
            refresh: pair.refresh,
        }),
        Err(error) => handle_domain_error(error),
    }
}
