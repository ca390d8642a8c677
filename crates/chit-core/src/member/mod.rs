//! Member domain: canonical identifiers, search summaries, and the
//! directory port for member lookups.

pub mod directory;
pub mod model;

pub use directory::MemberDirectory;
pub use model::{MemberId, MemberSummary};
