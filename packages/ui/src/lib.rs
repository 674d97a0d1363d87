//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod state;
pub mod views;

pub use state::{Banner, BannerKind, LoadState, Overlay, UserForm, UsersScreen};
pub use views::UsersView;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
