//! Transport and storage implementations for the chit client core.
//!
//! Implements the `chit-core` directory ports over the backend REST API and
//! provides the injected token store, configuration loading, and path
//! management.

pub mod api_client;
pub mod bid_api;
pub mod committee_api;
pub mod config;
pub mod dto;
pub mod member_api;
pub mod paths;
pub mod token_store;

pub use crate::api_client::ApiClient;
pub use crate::bid_api::ApiBidDirectory;
pub use crate::committee_api::ApiCommitteeDirectory;
pub use crate::config::ApiConfig;
pub use crate::member_api::ApiMemberDirectory;
pub use crate::token_store::{FileTokenStore, InMemoryTokenStore, SessionSnapshot, TokenStore};
