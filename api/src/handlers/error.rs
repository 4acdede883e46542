//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use dc_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Convert a failed request body validation into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut details = std::collections::HashMap::new();
    details.insert("validation_errors".to_string(), serde_json::json!(errors));

    HttpResponse::BadRequest().json(
        ErrorResponse::new(
            "validation_error".to_string(),
            "Invalid request data".to_string(),
        )
        .with_details(details),
    )
}

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    tracing::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidEmailFormat { email } => {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "invalid_email_format".to_string(),
                    format!("Invalid email address: {}", email),
                ))
            }
            AuthError::InvalidVerificationCode => {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "invalid_verification_code".to_string(),
                    "Invalid confirmation code".to_string(),
                ))
            }
            AuthError::VerificationCodeExpired => {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "verification_code_expired".to_string(),
                    "The confirmation code has expired".to_string(),
                ))
            }
            AuthError::UserNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                "user_not_found".to_string(),
                "Email not found".to_string(),
            )),
            AuthError::RegistrationDisabled => {
                HttpResponse::Forbidden().json(ErrorResponse::new(
                    "registration_disabled".to_string(),
                    "Registration is currently disabled".to_string(),
                ))
            }
        },
        DomainError::Token(token_error) => {
            let (code, message) = match token_error {
                TokenError::TokenExpired => ("token_expired", "Access token has expired"),
                TokenError::RefreshTokenExpired => {
                    ("refresh_token_expired", "Refresh token has expired")
                }
                TokenError::TokenRevoked => ("token_revoked", "Token has been revoked"),
                TokenError::InvalidRefreshToken => {
                    ("invalid_refresh_token", "Invalid refresh token")
                }
                _ => ("invalid_token", "Invalid token"),
            };
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                code.to_string(),
                message.to_string(),
            ))
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error".to_string(), message),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found".to_string(),
            format!("{} not found", resource),
        )),
        // Internal detail never leaks to clients
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error".to_string(),
                "An internal error occurred".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_user_not_found_maps_to_404() {
        let response = handle_domain_error(AuthError::UserNotFound.into());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_code_errors_map_to_400() {
        let response = handle_domain_error(AuthError::InvalidVerificationCode.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_domain_error(AuthError::VerificationCodeExpired.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_errors_map_to_401() {
        let response = handle_domain_error(TokenError::TokenRevoked.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_dto_validation_failure_maps_to_400() {
        use crate::dto::auth_dto::VerifyCodeRequest;
        use validator::Validate;

        let request = VerifyCodeRequest {
            email: "owner@example.com".to_string(),
            code: "123".to_string(),
        };
        let errors = request.validate().unwrap_err();

        let response = handle_validation_errors(errors);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_hides_detail() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused at 10.0.0.5".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
