//! Postgres-backed record store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use api::{NewUser, UserPatch, UserQuery};

use super::{StoreError, UserStore};
use crate::models::User;

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a unique-index violation into the store's conflict error.
fn map_db_err(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, age, address, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.age)
        .bind(&new.address)
        .bind(&new.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_one(&self, query: &UserQuery) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users
             WHERE ($1::text IS NULL OR name = $1)
               AND ($2::text IS NULL OR email = $2)
               AND ($3::int4 IS NULL OR age = $3)
               AND ($4::text IS NULL OR address = $4)
               AND ($5::text IS NULL OR phone = $5)
             ORDER BY created_at
             LIMIT 1",
        )
        .bind(&query.name)
        .bind(&query.email)
        .bind(query.age)
        .bind(&query.address)
        .bind(&query.phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                age = COALESCE($4, age),
                address = COALESCE($5, address),
                phone = COALESCE($6, phone)
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.email)
        .bind(patch.age)
        .bind(&patch.address)
        .bind(&patch.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
