//! Pure domain logic for the amend portal.
//!
//! Nothing in this crate performs I/O. The database, submission and API
//! crates build on these types, constants and validation helpers.

pub mod amend;
pub mod error;
pub mod storage;
pub mod types;
