//! Use cases for the chit client.
//!
//! Wires the `chit-core` logic to the infrastructure ports: session-scoped
//! identity resolution, dashboard assembly, and committees-view grouping.

pub mod committees;
pub mod dashboard;
pub mod session;

pub use committees::group_committees_by_owner;
pub use dashboard::{DashboardUseCase, DashboardView, RECENT_ACTIVITY_LIMIT};
pub use session::SessionService;
