//! # API crate — wire contract for the user-record service
//!
//! Everything that crosses the HTTP boundary lives here, so the server and every
//! frontend agree on a single definition of the payloads.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | — | Wire types: [`UserRecord`], [`NewUser`], [`UserPatch`], [`UserQuery`], [`ErrorBody`], [`Ack`] |
//! | [`client`] | `client` | Typed [`ApiClient`](client::ApiClient) over reqwest, one method per REST endpoint |
//!
//! The server depends on this crate without the `client` feature and never pulls in
//! reqwest; the UI enables `client` and talks to `/api/users` through it.

pub mod models;

#[cfg(feature = "client")]
pub mod client;

pub use models::{Ack, ErrorBody, NewUser, UserPatch, UserQuery, UserRecord};

#[cfg(feature = "client")]
pub use client::{ApiClient, ClientError};
