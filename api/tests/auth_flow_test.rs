//! End-to-end HTTP tests for the authentication flow, backed by the
//! in-memory repositories from the core crate.

use actix_web::{http::StatusCode, test, web};
use std::sync::Arc;

use dc_api::app::create_app;
use dc_api::routes::auth::AppState;
use dc_core::repositories::{
    MockTokenRepository, MockUserRepository, MockVerificationCodeRepository, UserRepository,
};
use dc_core::services::auth::{AuthService, AuthServiceConfig};
use dc_core::services::email::MockEmailQueue;
use dc_core::services::token::{TokenService, TokenServiceConfig};
use dc_core::services::verification::VerificationService;

const JWT_SECRET: &str = "integration-test-secret";
const EMAIL: &str = "owner@example.com";

struct Harness {
    state: web::Data<
        AppState<
            MockUserRepository,
            MockVerificationCodeRepository,
            MockEmailQueue,
            MockTokenRepository,
        >,
    >,
    users: Arc<MockUserRepository>,
    codes: Arc<MockVerificationCodeRepository>,
    queue: Arc<MockEmailQueue>,
}

impl Harness {
    fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let codes = Arc::new(MockVerificationCodeRepository::new());
        let queue = Arc::new(MockEmailQueue::new());
        let tokens = Arc::new(MockTokenRepository::new());

        let verification_service =
            Arc::new(VerificationService::new(codes.clone(), queue.clone()));
        let token_service = Arc::new(TokenService::new(
            tokens,
            TokenServiceConfig {
                jwt_secret: JWT_SECRET.to_string(),
                ..TokenServiceConfig::default()
            },
        ));
        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            verification_service,
            token_service,
            AuthServiceConfig::default(),
        ));

        let state = web::Data::new(AppState {
            auth_service,
            jwt_secret: JWT_SECRET.to_string(),
        });

        Self {
            state,
            users,
            codes,
            queue,
        }
    }

    /// The most recently issued code string for an email
    async fn latest_code(&self, email: &str) -> String {
        let user = self
            .users
            .find_by_email(email)
            .await
            .unwrap()
            .expect("user exists");
        self.codes
            .codes_for(user.id)
            .await
            .first()
            .map(|c| c.code.clone())
            .expect("a code was issued")
    }
}

#[actix_rt::test]
async fn test_health_check() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_request_code_registers_and_emails() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": EMAIL }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    assert_eq!(h.users.count().await, 1);
    let sent = h.queue.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient_list, vec![EMAIL]);
    assert!(sent[0].subject.contains(&h.latest_code(EMAIL).await));
}

#[actix_rt::test]
async fn test_request_code_invalid_email() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(h.users.count().await, 0);
}

#[actix_rt::test]
async fn test_full_verification_flow() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    // Request a code for a new account
    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": EMAIL }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // First confirmation answers 201 with user and tokens
    let code = h.latest_code(EMAIL).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .set_json(serde_json::json!({ "email": EMAIL, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], EMAIL);
    assert!(body["tokens"]["access"].as_str().is_some());
    assert!(body["tokens"]["refresh"].as_str().is_some());

    // A further code request is now a login: 200
    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": EMAIL }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Repeat sign-in answers 200
    let code = h.latest_code(EMAIL).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .set_json(serde_json::json!({ "email": EMAIL, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_verify_wrong_code() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": EMAIL }))
        .to_request();
    test::call_service(&app, req).await;

    let code = h.latest_code(EMAIL).await;
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .set_json(serde_json::json!({ "email": EMAIL, "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_verification_code");
}

#[actix_rt::test]
async fn test_verify_unknown_email() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .set_json(serde_json::json!({ "email": "ghost@example.com", "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "user_not_found");
}

#[actix_rt::test]
async fn test_resend_code_unknown_email() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/resend-code")
        .set_json(serde_json::json!({ "email": "ghost@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_refresh_rotation() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": EMAIL }))
        .to_request();
    test::call_service(&app, req).await;

    let code = h.latest_code(EMAIL).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .set_json(serde_json::json!({ "email": EMAIL, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let refresh = body["tokens"]["refresh"].as_str().unwrap().to_string();

    // Exchange succeeds once
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({ "refresh": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Replaying the spent token fails
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({ "refresh": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_logout_requires_auth() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .set_json(serde_json::json!({ "refresh": "whatever" }))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    assert!(resp.is_err() || resp.unwrap().status() == StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_logout_with_access_token() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth")
        .set_json(serde_json::json!({ "email": EMAIL }))
        .to_request();
    test::call_service(&app, req).await;

    let code = h.latest_code(EMAIL).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .set_json(serde_json::json!({ "email": EMAIL, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access = body["tokens"]["access"].as_str().unwrap().to_string();
    let refresh = body["tokens"]["refresh"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", access)))
        .set_json(serde_json::json!({ "refresh": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The revoked refresh token no longer exchanges
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({ "refresh": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_unknown_route_is_404() {
    let h = Harness::new();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/nothing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
