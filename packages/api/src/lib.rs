//! # API crate — wire types and REST client for the remote user store
//!
//! The user records live in a remote HTTP JSON service; this crate is the only
//! place that talks to it. The frontends never issue requests themselves —
//! they hold a [`UsersClient`] (usually via context) and call its four
//! methods, which map one-to-one onto the service's REST surface:
//!
//! | Method | Request | Response |
//! |--------|---------|----------|
//! | [`UsersClient::fetch_all`] | `GET /users/` | every stored [`User`] |
//! | [`UsersClient::create`] | `POST /users` | the created [`User`], id assigned |
//! | [`UsersClient::update`] | `PUT /users/{id}` | the updated [`User`] |
//! | [`UsersClient::delete`] | `DELETE /users/{id}` | status only |
//!
//! Record identifiers are assigned by the remote store; nothing in this crate
//! (or its callers) ever invents one.

pub mod client;
pub mod error;
pub mod models;

pub use client::UsersClient;
pub use error::ApiError;
pub use models::{Gender, User, UserDraft};
