//! Application factory
//!
//! Builds the actix-web application from shared state, so the binary
//! and the integration tests assemble exactly the same route table.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes::auth::{
    delete_account::{confirm_deletion, request_deletion},
    logout::logout,
    refresh::refresh,
    request_code::request_code,
    resend_code::resend_code,
    verify_code::verify_code,
    AppState,
};

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::email::EmailQueue;

/// Create and configure the application with all dependencies
pub fn create_app<U, C, Q, T>(
    app_state: web::Data<AppState<U, C, Q, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: VerificationCodeRepository + 'static,
    Q: EmailQueue + 'static,
    T: TokenRepository + 'static,
{
    let cors = create_cors();
    let jwt_secret = app_state.jwt_secret.clone();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("", web::post().to(request_code::<U, C, Q, T>))
                    .route("/resend-code", web::post().to(resend_code::<U, C, Q, T>))
                    .route("/verify", web::post().to(verify_code::<U, C, Q, T>))
                    .route("/refresh", web::post().to(refresh::<U, C, Q, T>))
                    .route(
                        "/logout",
                        web::post()
                            .to(logout::<U, C, Q, T>)
                            .wrap(JwtAuth::with_secret(jwt_secret.clone())),
                    )
                    .route(
                        "/delete-account",
                        web::post()
                            .to(request_deletion::<U, C, Q, T>)
                            .wrap(JwtAuth::with_secret(jwt_secret.clone())),
                    )
                    .route(
                        "/confirm-deletion",
                        web::post()
                            .to(confirm_deletion::<U, C, Q, T>)
                            .wrap(JwtAuth::with_secret(jwt_secret)),
                    ),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "dogandcare-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
