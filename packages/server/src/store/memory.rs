//! In-memory record store for tests and database-less development.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use api::{NewUser, UserPatch, UserQuery};

use super::{StoreError, UserStore};
use crate::models::User;

#[derive(Clone, Debug, Default)]
pub struct MemUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(user: &User, query: &UserQuery) -> bool {
    query.name.as_ref().map_or(true, |v| &user.name == v)
        && query.email.as_ref().map_or(true, |v| &user.email == v)
        && query.age.map_or(true, |v| user.age == Some(v))
        && query.address.as_ref().map_or(true, |v| user.address.as_ref() == Some(v))
        && query.phone.as_ref().map_or(true, |v| user.phone.as_ref() == Some(v))
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        // The lock makes the uniqueness check and the insert a single step.
        if users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            age: new.age,
            address: new.address,
            phone: new.phone,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_one(&self, query: &UserQuery) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| matches(u, query)).cloned())
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, StoreError> {
        let mut users = self.users.lock().unwrap();
        if let Some(email) = &patch.email {
            if users.iter().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            user.name = name.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(age) = patch.age {
            user.age = Some(age);
        }
        if let Some(address) = &patch.address {
            user.address = Some(address.clone());
        }
        if let Some(phone) = &patch.phone {
            user.phone = Some(phone.clone());
        }
        Ok(Some(user.clone()))
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> NewUser {
        NewUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            age: Some(30),
            address: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_round_trips_fields() {
        let store = MemUserStore::new();
        let user = store.insert(ann()).await.unwrap();

        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
        assert_eq!(user.age, Some(30));

        let all = store.all().await.unwrap();
        assert_eq!(all, vec![user]);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_leaves_store_unchanged() {
        let store = MemUserStore::new();
        store.insert(ann()).await.unwrap();

        let dup = NewUser {
            name: "Other Ann".into(),
            ..ann()
        };
        let err = store.insert(dup).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_update_preserves_unspecified_fields() {
        let store = MemUserStore::new();
        let user = store.insert(ann()).await.unwrap();

        let patch = UserPatch {
            age: Some(31),
            ..Default::default()
        };
        let updated = store.update(user.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.age, Some(31));
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.email, "ann@x.com");
    }

    #[tokio::test]
    async fn update_to_taken_email_conflicts() {
        let store = MemUserStore::new();
        store.insert(ann()).await.unwrap();
        let bob = store
            .insert(NewUser {
                name: "Bob".into(),
                email: "bob@x.com".into(),
                age: None,
                address: None,
                phone: None,
            })
            .await
            .unwrap();

        let patch = UserPatch {
            email: Some("ann@x.com".into()),
            ..Default::default()
        };
        let err = store.update(bob.id, &patch).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = MemUserStore::new();
        let result = store.update(Uuid::new_v4(), &UserPatch::default()).await.unwrap();
        assert!(result.is_none());
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_one_matches_all_provided_fields() {
        let store = MemUserStore::new();
        store.insert(ann()).await.unwrap();

        let query = UserQuery {
            name: Some("Ann".into()),
            age: Some(30),
            ..Default::default()
        };
        let found = store.find_one(&query).await.unwrap().unwrap();
        assert_eq!(found.email, "ann@x.com");

        let miss = UserQuery {
            name: Some("Ann".into()),
            age: Some(31),
            ..Default::default()
        };
        assert!(store.find_one(&miss).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_is_idempotent_only_once() {
        let store = MemUserStore::new();
        let user = store.insert(ann()).await.unwrap();

        assert!(store.remove(user.id).await.unwrap());
        assert!(store.all().await.unwrap().is_empty());
        assert!(!store.remove(user.id).await.unwrap());
    }
}
