//! Core domain logic for the chit-fund committee client.
//!
//! Holds the domain models, the collaborator ports, and the two pieces of
//! pure logic everything else is built on: member-identity resolution and
//! activity aggregation. No network code lives here; transports implement
//! the ports in `chit-infrastructure`.

pub mod activity;
pub mod bid;
pub mod committee;
pub mod error;
pub mod identity;
pub mod member;

// Re-export common error type
pub use error::ChitError;
