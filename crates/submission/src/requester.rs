//! The identity on whose behalf amends are written.

use portal_core::types::DbId;

use crate::error::SubmissionError;

/// A requester whose identity and portal scope have both been resolved.
///
/// Holding a `Requester` is proof that neither is missing, so the write
/// paths take one instead of re-checking optional ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub agent_id: DbId,
    pub portal_id: DbId,
}

impl Requester {
    /// Resolve a requester from optional ids. A nil UUID counts as absent.
    ///
    /// Identity is checked before portal, so an anonymous caller always gets
    /// [`SubmissionError::AuthenticationRequired`].
    pub fn resolve(
        agent_id: Option<DbId>,
        portal_id: Option<DbId>,
    ) -> Result<Self, SubmissionError> {
        let agent_id = agent_id
            .filter(|id| !id.is_nil())
            .ok_or(SubmissionError::AuthenticationRequired)?;
        let portal_id = portal_id
            .filter(|id| !id.is_nil())
            .ok_or(SubmissionError::PortalMissing)?;
        Ok(Self {
            agent_id,
            portal_id,
        })
    }
}
