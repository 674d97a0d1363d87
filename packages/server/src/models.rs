//! Database model for a stored user and its wire projection.

use api::UserRecord;
use sqlx::FromRow;
use uuid::Uuid;

/// Full user row. The `users` table also carries a `created_at` column used only
/// for stable list ordering; it never crosses the wire.
#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// Convert to the client-safe wire record.
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            address: self.address.clone(),
            phone: self.phone.clone(),
        }
    }
}
