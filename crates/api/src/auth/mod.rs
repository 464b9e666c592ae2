//! Bearer token primitives.
//!
//! Tokens are issued by the portal's identity service; this server only
//! verifies them and reads the requester and portal out of the claims.

pub mod jwt;
