//! LoggingMiddleware - logs every dispatched value for debugging

use super::{BoxFuture, Middleware};
use crate::{actions::Dispatch, dispatcher::Dispatcher, state::AppState};

/// LoggingMiddleware - logs all dispatched values that pass through the store
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle<'a>(
        &'a self,
        dispatch: &'a Dispatch,
        _state: &'a AppState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match dispatch {
                Dispatch::Action(action) => log::debug!("Action: {:?}", action),
                Dispatch::Effect(effect) => log::debug!("Effect: {:?}", effect),
            }
            // Always continue to next middleware
            true
        })
    }
}
