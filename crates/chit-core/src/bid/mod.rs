//! Bid domain: the bid model and its directory port.

pub mod directory;
pub mod model;

pub use directory::BidDirectory;
pub use model::{Bid, BidId};
