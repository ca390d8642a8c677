//! Committee domain: the committee model and its directory port.

pub mod directory;
pub mod model;

pub use directory::CommitteeDirectory;
pub use model::{Committee, CommitteeId};
