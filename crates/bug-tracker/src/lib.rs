//! Bug tracker store
//!
//! A Redux-style store for the bugs slice of a bug tracking client:
//!
//! ```text
//! Dispatch ──► LoggingMiddleware ──► EffectMiddleware ──► Reducer ──► AppState
//!                                        │
//!                                        ▼
//!                                    BugClient (GET/POST/PATCH /bugs)
//! ```
//!
//! Front ends dispatch the action creators from [`actions`] and read state
//! through the [`selectors`].

pub mod actions;
pub mod dispatcher;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

use bug_client::BugClient;
use bug_tracker_config::AppConfig;
use middleware::{EffectMiddleware, LoggingMiddleware};
use state::AppState;
use std::sync::Arc;
use store::Store;

pub use actions::{add_bug, assign_bug_to_user, load_bugs, resolve_bug};
pub use dispatcher::Dispatcher;
pub use selectors::{get_bugs_by_user, get_unresolved_bugs};

/// Create a store with an empty bugs slice and the standard middleware chain
pub fn configure_store(client: Arc<dyn BugClient>, config: &AppConfig) -> Store {
    let mut store = Store::new(AppState::default());

    // Middleware executes in the order it is added
    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(EffectMiddleware::new(client, config.cache_ttl()));

    store
}
