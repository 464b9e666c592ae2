//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the entity is writable

pub mod amend;
pub mod annotation;
pub mod deliverable;
pub mod order;
