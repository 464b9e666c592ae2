//! Amendment submission workflow.
//!
//! A single user action selects an order, one or more of its services, and
//! optionally some reference images per service. [`submit_amends_for_services`]
//! turns that into one amend request per service plus best-effort
//! annotations, reporting which annotations could not be created.
//!
//! Persistence goes through the [`AmendGateway`] trait; [`PgAmendGateway`]
//! is the PostgreSQL implementation.

pub mod error;
pub mod gateway;
pub mod orchestrator;
pub mod outcome;
pub mod requester;

pub use error::{GatewayError, SubmissionError};
pub use gateway::{AmendGateway, PgAmendGateway};
pub use orchestrator::{
    create_amend, create_annotation, submit_amends_for_services, AmendSubmission,
};
pub use outcome::{FailedAnnotation, SubmissionOutcome, SubmissionReport};
pub use requester::Requester;
