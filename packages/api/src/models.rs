//! Wire types shared by the server and its clients.
//!
//! [`UserRecord`] is the client-safe projection of a stored user: the id is a
//! `String` so callers never need the server's `Uuid` type. [`UserPatch`] encodes
//! partial updates as per-field presence: an absent field leaves the stored value
//! untouched, a present field overwrites it. Fields that are `None` are not
//! serialized at all, so a patch only carries what it intends to change.

use serde::{Deserialize, Serialize};

/// A single user record as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Payload for creating a user. Name and email are required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial update for an existing user. Every field is optional; only fields
/// present in the serialized body are applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.address.is_none()
            && self.phone.is_none()
    }
}

/// Exact-match filter for `GET /api/users?field=value`. Provided fields are
/// ANDed together; the endpoint returns the first matching record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserQuery {
    /// True when no filter fields were supplied (a bare list request).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.address.is_none()
            && self.phone.is_none()
    }
}

/// Error body returned by the server for every failed request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Acknowledgment body for operations without a record result (delete).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_serializes_to_nothing() {
        let patch = UserPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn patch_only_carries_present_fields() {
        let patch = UserPatch {
            age: Some(31),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"age":31}"#);

        let parsed: UserPatch = serde_json::from_str(r#"{"age":31}"#).unwrap();
        assert_eq!(parsed.age, Some(31));
        assert_eq!(parsed.name, None);
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"User not found"}"#).unwrap();
        assert_eq!(body.message, "User not found");
        assert_eq!(body.error, None);
    }

    #[test]
    fn record_round_trips() {
        let record = UserRecord {
            id: "0b0c8a80-3f6b-4a86-9d3e-25d0f0ffe1f0".into(),
            name: "Ann".into(),
            email: "ann@x.com".into(),
            age: Some(30),
            address: None,
            phone: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
