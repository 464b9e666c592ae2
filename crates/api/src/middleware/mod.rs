//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the requester identified by a JWT Bearer token.

pub mod auth;
