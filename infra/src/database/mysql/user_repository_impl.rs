//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use dc_core::domain::entities::user::User;
use dc_core::errors::DomainError;
use dc_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(db_err)?,
            first_name: row.try_get("first_name").map_err(db_err)?,
            last_name: row.try_get("last_name").map_err(db_err)?,
            date_of_birth: row
                .try_get::<Option<NaiveDate>, _>("date_of_birth")
                .map_err(db_err)?,
            bio: row.try_get("bio").map_err(db_err)?,
            is_verified: row.try_get("is_verified").map_err(db_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(db_err)?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(db_err)?,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database operation failed: {}", e),
    }
}

const USER_COLUMNS: &str = "id, email, first_name, last_name, date_of_birth, bio, \
                            is_verified, created_at, updated_at, last_login_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1"
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        let query = r#"
            INSERT INTO users (
                id, email, first_name, last_name, date_of_birth, bio,
                is_verified, created_at, updated_at, last_login_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.date_of_birth)
            .bind(&user.bio)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, first_name = ?, last_name = ?, date_of_birth = ?,
                bio = ?, is_verified = ?, updated_at = ?, last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.date_of_birth)
            .bind(&user.bio)
            .bind(user.is_verified)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
