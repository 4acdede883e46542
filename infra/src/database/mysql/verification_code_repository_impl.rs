//! MySQL implementation of the VerificationCodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use dc_core::domain::entities::verification_code::VerificationCode;
use dc_core::errors::DomainError;
use dc_core::repositories::VerificationCodeRepository;

/// MySQL implementation of VerificationCodeRepository
///
/// Rows are only ever inserted and flagged; nothing here deletes, so
/// the table doubles as an audit trail of every code ever issued.
pub struct MySqlVerificationCodeRepository {
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let user_id: String = row.try_get("user_id").map_err(db_err)?;

        Ok(VerificationCode {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            code: row.try_get("code").map_err(db_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err)?,
            is_used: row.try_get("is_used").map_err(db_err)?,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database operation failed: {}", e),
    }
}

fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID: {}", e),
    })
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let query = r#"
            INSERT INTO verification_codes (id, user_id, code, created_at, is_used)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(code.user_id.to_string())
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.is_used)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(code)
    }

    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        // Expiry is checked by the caller on created_at, so an expired
        // match can be reported distinctly from a missing one
        let query = r#"
            SELECT id, user_id, code, created_at, is_used
            FROM verification_codes
            WHERE user_id = ? AND code = ? AND is_used = FALSE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError> {
        // Conditional update: of any set of concurrent callers, the row
        // lock guarantees exactly one sees an affected row
        let query = r#"
            UPDATE verification_codes
            SET is_used = TRUE
            WHERE id = ? AND is_used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() == 1)
    }
}
