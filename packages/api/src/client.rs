//! Typed HTTP client for the user-record REST API.
//!
//! One method per endpoint, mirroring the routes the server mounts under
//! `/api/users`. Any non-2xx response is decoded as an [`ErrorBody`] and surfaced
//! as [`ClientError::Api`] so the UI can show the server's message verbatim.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Ack, ErrorBody, NewUser, UserPatch, UserQuery, UserRecord};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error status and a message.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    /// The request never produced a usable response.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Client for the user-record service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    /// `GET /api/users` — the full record list.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, ClientError> {
        let resp = self.http.get(self.users_url()).send().await?;
        decode(resp).await
    }

    /// `GET /api/users?field=value` — first record matching the filter.
    pub async fn find_user(&self, query: &UserQuery) -> Result<UserRecord, ClientError> {
        let resp = self.http.get(self.users_url()).query(query).send().await?;
        decode(resp).await
    }

    /// `POST /api/users` — create a record, returning it with its assigned id.
    pub async fn create_user(&self, new: &NewUser) -> Result<UserRecord, ClientError> {
        let resp = self.http.post(self.users_url()).json(new).send().await?;
        decode(resp).await
    }

    /// `PUT /api/users/{id}` — apply a partial update, returning the merged record.
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, ClientError> {
        let url = format!("{}/{id}", self.users_url());
        let resp = self.http.put(url).json(patch).send().await?;
        decode(resp).await
    }

    /// `DELETE /api/users/{id}` — remove a record.
    pub async fn delete_user(&self, id: &str) -> Result<Ack, ClientError> {
        let url = format!("{}/{id}", self.users_url());
        let resp = self.http.delete(url).send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }
    // Prefer the server's message; fall back to the bare status if the body
    // isn't the expected shape.
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {status}"),
    };
    Err(ClientError::Api { status, message })
}
