//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, User, UserId, UserProfile, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, login, password, name
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to get user by login", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, login, name
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to list users", e))?;

        rows.iter().map(row_to_profile).collect()
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (login, password, name)
            VALUES ($1, $2, $3)
            RETURNING id, login, password, name
            "#,
        )
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &user.login))?;

        row_to_user(&row)
    }

    async fn update_name_by_login(
        &self,
        login: &str,
        name: &str,
    ) -> Result<UserProfile, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET name = $2
            WHERE login = $1
            RETURNING id, login, name
            "#,
        )
        .bind(login)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to update user", e))?;

        match row {
            Some(row) => row_to_profile(&row),
            None => Err(DomainError::not_found(format!("User '{}' not found", login))),
        }
    }

    async fn delete_by_login(&self, login: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE login = $1")
            .bind(login)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("User '{}' not found", login)));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Database unreachable", e))?;

        Ok(())
    }
}

fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::storage(format!("{}: {}", context, e))
}

/// Unique-constraint violations lose the check-then-insert race; report them
/// as a conflict rather than a generic storage failure.
fn map_insert_error(e: sqlx::Error, login: &str) -> DomainError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::conflict(format!("Login '{}' already exists", login))
        }
        _ => storage_error("Failed to create user", e),
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| storage_error("Invalid user row", e))?;
    let login: String = row
        .try_get("login")
        .map_err(|e| storage_error("Invalid user row", e))?;
    let password: String = row
        .try_get("password")
        .map_err(|e| storage_error("Invalid user row", e))?;
    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| storage_error("Invalid user row", e))?;

    Ok(User::new(UserId::new(id), login, password, name))
}

fn row_to_profile(row: &PgRow) -> Result<UserProfile, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| storage_error("Invalid user row", e))?;
    let login: String = row
        .try_get("login")
        .map_err(|e| storage_error("Invalid user row", e))?;
    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| storage_error("Invalid user row", e))?;

    Ok(UserProfile {
        id: UserId::new(id),
        login,
        name,
    })
}
