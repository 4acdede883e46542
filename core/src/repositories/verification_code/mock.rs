//! Mock implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

use super::repository::VerificationCodeRepository;

/// In-memory code store for tests
///
/// The write lock held across the read-check-write in `mark_used`
/// mirrors the atomicity of the SQL conditional update.
#[derive(Clone)]
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// All records issued to a user, newest first, test helper
    pub async fn codes_for(&self, user_id: Uuid) -> Vec<VerificationCode> {
        let codes = self.codes.read().await;
        let mut result: Vec<VerificationCode> = codes
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Fetch one record by id, test helper
    pub async fn get(&self, id: Uuid) -> Option<VerificationCode> {
        self.codes.read().await.get(&id).cloned()
    }

    /// Overwrite a record in place, test helper for aging codes
    pub async fn put(&self, code: VerificationCode) {
        self.codes.write().await.insert(code.id, code);
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .filter(|c| c.user_id == user_id && !c.is_used && c.matches(code))
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        match codes.get_mut(&id) {
            Some(record) if !record.is_used => {
                record.mark_as_used();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
