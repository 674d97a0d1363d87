//! Record store: the persistent collection of user records.
//!
//! The [`UserStore`] trait is the seam between the CRUD service and the backing
//! storage. Both implementations enforce the unique-email constraint inside the
//! store itself — a unique index in Postgres, a check under the mutex in memory —
//! so a create or update can never race its own uniqueness check.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use api::{NewUser, UserPatch, UserQuery};

use crate::models::User;

mod memory;
mod postgres;

pub use memory::MemUserStore;
pub use postgres::PgUserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email is already in use")]
    DuplicateEmail,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a record, assigning a fresh id. Fails with
    /// [`StoreError::DuplicateEmail`] when the email is already taken.
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;

    /// All records, in insertion order.
    async fn all(&self) -> Result<Vec<User>, StoreError>;

    /// First record matching the exact-match AND of the provided filter fields.
    async fn find_one(&self, query: &UserQuery) -> Result<Option<User>, StoreError>;

    /// Merge the patch into the record: present fields overwrite, absent fields
    /// are left untouched. Returns the merged record, or `None` for an unknown id.
    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, StoreError>;

    /// Remove a record. Returns `false` for an unknown id.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
}
