//! Unit tests for token issuance, verification and rotation

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> (TokenService<MockTokenRepository>, Arc<MockTokenRepository>) {
    let repo = Arc::new(MockTokenRepository::new());
    let config = TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..TokenServiceConfig::default()
    };
    (TokenService::new(repo.clone(), config), repo)
}

fn verified_user() -> User {
    let mut user = User::new("owner@example.com".to_string());
    user.is_verified = true;
    user
}

#[tokio::test]
async fn test_issue_and_verify_access_token() {
    let (service, _repo) = service();
    let user = verified_user();

    let pair = service.issue_tokens(&user).await.unwrap();
    let claims = service.verify_access_token(&pair.access).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert!(claims.email_verified);
    assert_eq!(claims.iss, "dogandcare");
}

#[tokio::test]
async fn test_access_token_rejected_with_wrong_secret() {
    let (service, _repo) = service();
    let pair = service.issue_tokens(&verified_user()).await.unwrap();

    let other = TokenService::new(
        Arc::new(MockTokenRepository::new()),
        TokenServiceConfig {
            jwt_secret: "different-secret".to_string(),
            ..TokenServiceConfig::default()
        },
    );

    let result = other.verify_access_token(&pair.access);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[tokio::test]
async fn test_garbage_access_token_rejected() {
    let (service, _repo) = service();
    let result = service.verify_access_token("not-a-jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[tokio::test]
async fn test_refresh_token_stored_hashed() {
    let (service, repo) = service();
    let pair = service.issue_tokens(&verified_user()).await.unwrap();

    assert_eq!(pair.refresh.len(), 32);
    // The raw token never appears in the store
    assert!(repo
        .find_by_token_hash(&pair.refresh)
        .await
        .unwrap()
        .is_none());
    assert!(service.verify_refresh_token(&pair.refresh).await.is_ok());
}

#[tokio::test]
async fn test_unknown_refresh_token_rejected() {
    let (service, _repo) = service();
    let result = service.verify_refresh_token("nonexistent-token").await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_expired_refresh_token_rejected() {
    let (service, repo) = service();
    let pair = service.issue_tokens(&verified_user()).await.unwrap();

    let mut record = service.verify_refresh_token(&pair.refresh).await.unwrap();
    record.expires_at = Utc::now() - Duration::seconds(1);
    repo.put(record).await;

    let result = service.verify_refresh_token(&pair.refresh).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RefreshTokenExpired))
    ));
}

#[tokio::test]
async fn test_rotation_is_single_use() {
    let (service, _repo) = service();
    let user = verified_user();
    let pair = service.issue_tokens(&user).await.unwrap();

    let rotated = service
        .rotate_refresh_token(&pair.refresh, &user)
        .await
        .unwrap();
    assert_ne!(rotated.refresh, pair.refresh);

    // Replaying the consumed token fails
    let replay = service.rotate_refresh_token(&pair.refresh, &user).await;
    assert!(matches!(
        replay,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));

    // The replacement still works
    assert!(service.verify_refresh_token(&rotated.refresh).await.is_ok());
}

#[tokio::test]
async fn test_revoke_all_for_user() {
    let (service, repo) = service();
    let user = verified_user();
    let first = service.issue_tokens(&user).await.unwrap();
    let second = service.issue_tokens(&user).await.unwrap();

    assert_eq!(service.revoke_all_for_user(user.id).await.unwrap(), 2);
    assert_eq!(repo.active_count(user.id).await, 0);

    for token in [first.refresh, second.refresh] {
        let result = service.verify_refresh_token(&token).await;
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenRevoked))
        ));
    }
}

#[tokio::test]
async fn test_unverified_user_claim() {
    let (service, _repo) = service();
    let user = User::new("new@example.com".to_string());

    let pair = service.issue_tokens(&user).await.unwrap();
    let claims = service.verify_access_token(&pair.access).unwrap();
    assert!(!claims.email_verified);
}
