//! CRUD service: business rules over the record store.
//!
//! Create rejects missing required fields before touching the store and turns a
//! store-level email conflict into [`ApiError::Conflict`]. Update and delete
//! signal unknown ids as [`ApiError::NotFound`]; a filter query that matches
//! nothing is NotFound as well.

use uuid::Uuid;

use api::{NewUser, UserPatch, UserQuery};

use crate::error::ApiError;
use crate::models::User;
use crate::store::UserStore;

pub async fn create(store: &dyn UserStore, new: NewUser) -> Result<User, ApiError> {
    if new.name.trim().is_empty() {
        return Err(ApiError::Invalid("Name is required".into()));
    }
    if new.email.trim().is_empty() {
        return Err(ApiError::Invalid("Email is required".into()));
    }
    Ok(store.insert(new).await?)
}

pub async fn list(store: &dyn UserStore) -> Result<Vec<User>, ApiError> {
    Ok(store.all().await?)
}

/// First record matching the exact-match AND of the provided fields.
pub async fn find(store: &dyn UserStore, query: &UserQuery) -> Result<User, ApiError> {
    store.find_one(query).await?.ok_or(ApiError::NotFound)
}

/// Merge the patch into the record and return the fully merged result.
pub async fn update(store: &dyn UserStore, id: Uuid, patch: &UserPatch) -> Result<User, ApiError> {
    store.update(id, patch).await?.ok_or(ApiError::NotFound)
}

pub async fn delete(store: &dyn UserStore, id: Uuid) -> Result<(), ApiError> {
    if store.remove(id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound)
    }
}
