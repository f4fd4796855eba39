//! Application State Module
//!
//! Contains all state types used by the application, organized by slice.

mod bugs;

pub use bugs::BugsState;

/// Root application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub bugs: BugsState,
}
