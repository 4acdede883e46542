use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

use dc_api::app::create_app;
use dc_api::routes::auth::AppState;
use dc_core::services::auth::{AuthService, AuthServiceConfig};
use dc_core::services::token::{TokenService, TokenServiceConfig};
use dc_core::services::verification::VerificationService;
use dc_infra::database::{
    create_pool, MySqlTokenRepository, MySqlUserRepository, MySqlVerificationCodeRepository,
};
use dc_infra::email::{ChannelEmailQueue, SmtpMailer};
use dc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Dog&Care API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Database and repositories
    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let code_repository = Arc::new(MySqlVerificationCodeRepository::new(pool.clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool));

    // Email delivery: SMTP behind a background queue
    let mailer = SmtpMailer::new(config.email.clone())
        .context("failed to build the SMTP transport")?;
    let email_queue = Arc::new(ChannelEmailQueue::start(mailer));

    // Services
    let verification_service = Arc::new(VerificationService::new(code_repository, email_queue));
    let token_service = Arc::new(TokenService::new(
        token_repository,
        TokenServiceConfig {
            jwt_secret: config.auth.jwt_secret.clone(),
            access_token_expiry_minutes: config.auth.access_token_expiry_minutes,
            refresh_token_expiry_days: config.auth.refresh_token_expiry_days,
        },
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        verification_service,
        token_service,
        AuthServiceConfig {
            allow_registration: config.auth.allow_registration,
        },
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        jwt_secret: config.auth.jwt_secret.clone(),
    });

    info!("Server binding to {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
