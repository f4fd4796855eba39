//! Dispatcher handed to middleware and effects
//!
//! The dispatcher is the `(dispatch, getState)` pair an effect runs with.
//! Values dispatched through it re-enter the middleware chain from the
//! beginning, so an effect's follow-up actions are logged and reduced like
//! any other dispatch.

use crate::actions::Dispatch;
use crate::middleware::BoxFuture;
use crate::state::AppState;
use crate::store::Store;

/// Dispatcher for sending values back through the store
#[derive(Clone)]
pub struct Dispatcher {
    store: Store,
}

impl Dispatcher {
    pub(crate) fn new(store: Store) -> Self {
        Self { store }
    }

    /// Dispatch a value through the full middleware chain
    ///
    /// The returned future completes once the value has been reduced or,
    /// for effects, once the effect has finished.
    pub fn dispatch(&self, dispatch: impl Into<Dispatch>) -> BoxFuture<'_, ()> {
        self.store.dispatch(dispatch)
    }

    /// Current state (not the snapshot the middleware chain started with)
    pub fn state(&self) -> AppState {
        self.store.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::BugsAction;

    #[tokio::test]
    async fn test_dispatcher_reaches_reducer() {
        let store = Store::default();
        let dispatcher = store.dispatcher();

        dispatcher.dispatch(BugsAction::Requested).await;

        assert!(dispatcher.state().bugs.loading);
        assert!(store.state().bugs.loading);
    }
}
