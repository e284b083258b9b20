//! User repository
//!
//! - create: INSERT ... RETURNING, duplicate email surfaces as a variant
//! - list: ordered by id
//! - delete: affected-row count decides between commit and NotFound

use serde::{Deserialize, Serialize};
use sqlx::{Connection, FromRow};

use crate::db::{DbError, Gateway};

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Fields supplied by the caller when creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// User repository
pub struct UserRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> UserRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Insert a user and return it with its assigned id.
    ///
    /// Email uniqueness is left to the database; a violation comes back as
    /// [`DbError::DuplicateEmail`] and nothing is committed.
    pub async fn create(&self, new: &NewUser) -> Result<User, DbError> {
        let mut conn = self.gateway.acquire().await?;
        let mut tx = conn.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(&new.name)
        .bind(&new.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    /// All users in ascending id order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let mut conn = self.gateway.acquire().await?;

        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(users)
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut conn = self.gateway.acquire().await?;
        let mut tx = conn.begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Dropping the uncommitted transaction rolls it back
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tx.commit().await?;
        Ok(())
    }
}
