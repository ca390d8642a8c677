//! Derived views over committees and bids.
//!
//! Pure, synchronous functions: bid grouping by committee and the merged
//! recent-activity feed. Everything here is recomputed fresh from its inputs
//! on every call; nothing is cached or persisted.

pub mod feed;
pub mod model;

pub use feed::{build_recent_activity, group_bids_by_committee};
pub use model::ActivityEntry;
