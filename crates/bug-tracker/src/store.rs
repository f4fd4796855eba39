use crate::actions::{Action, Dispatch};
use crate::dispatcher::Dispatcher;
use crate::middleware::{BoxFuture, Middleware};
use crate::reducers::reduce;
use crate::state::AppState;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared state that middleware reads and the reducer writes
pub type SharedState = Arc<RwLock<AppState>>;

/// Redux-style Store that holds application state and dispatches actions
///
/// - Centralized state management
/// - Values are dispatched through the middleware chain
/// - Pure reducers handle state transitions
/// - State is replaced on each action
///
/// The store is cheap to clone; clones share state and middleware. The lock
/// is only taken to snapshot the state or to apply one reducer step, never
/// across an `.await`, so the reducer is the single writer.
///
/// ```rust,ignore
/// let mut store = Store::new(AppState::default());
/// store.add_middleware(LoggingMiddleware::new());
/// store.add_middleware(EffectMiddleware::new(client, cache_ttl));
///
/// store.dispatch(load_bugs()).await;
/// ```
#[derive(Clone)]
pub struct Store {
    state: SharedState,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            middleware: Vec::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added. Clones made before
    /// this call do not see the new middleware.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Arc::new(middleware));
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| {
                log::error!("State lock poisoned, recovering");
                PoisonError::into_inner(poisoned)
            })
            .clone()
    }

    /// Get a dispatcher bound to this store
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.clone())
    }

    /// Process a value through the middleware chain and reducer
    ///
    /// Actions not consumed by middleware are reduced. Effects are expected
    /// to be consumed by `EffectMiddleware`; an effect that falls through the
    /// whole chain is dropped.
    pub fn dispatch(&self, dispatch: impl Into<Dispatch>) -> BoxFuture<'_, ()> {
        let dispatch = dispatch.into();

        Box::pin(async move {
            let state = self.state();
            let dispatcher = self.dispatcher();

            // Pass through middleware chain
            for middleware in &self.middleware {
                if !middleware.handle(&dispatch, &state, &dispatcher).await {
                    return;
                }
            }

            match dispatch {
                Dispatch::Action(action) => self.apply(&action),
                Dispatch::Effect(effect) => {
                    log::warn!("No middleware handled effect {:?}, dropping it", effect);
                }
            }
        })
    }

    fn apply(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|poisoned| {
            log::error!("State lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        });
        let current = std::mem::take(&mut *state);
        *state = reduce(current, action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
