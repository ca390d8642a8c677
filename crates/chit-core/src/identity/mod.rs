//! Member-identity resolution.
//!
//! Maps an authenticated session payload to the canonical backend member id
//! through a fixed fallback chain: embedded id, then username search, then
//! the session's own identifier.

pub mod model;
pub mod resolver;

pub use model::SessionIdentity;
pub use resolver::resolve_member_id;
