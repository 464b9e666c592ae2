//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod amend_repo;
pub mod annotation_repo;
pub mod deliverable_repo;
pub mod order_repo;

pub use amend_repo::AmendRepo;
pub use annotation_repo::AnnotationRepo;
pub use deliverable_repo::DeliverableRepo;
pub use order_repo::OrderRepo;
