//! Middleware system for the store
//!
//! Middleware sits between dispatch and reducer execution, allowing
//! side effects, async operations and logging to be handled in a
//! composable way.
//!
//! ## Design
//!
//! ```text
//! Dispatch → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect dispatched values and state
//! - Dispatch new values (which re-enter the chain from the start)
//! - Perform side effects (API calls, logging)
//! - Consume a value so it never reaches the reducer
//!
//! ## Example
//!
//! ```rust,ignore
//! struct CountingMiddleware(AtomicUsize);
//!
//! impl Middleware for CountingMiddleware {
//!     fn handle<'a>(
//!         &'a self,
//!         _dispatch: &'a Dispatch,
//!         _state: &'a AppState,
//!         _dispatcher: &'a Dispatcher,
//!     ) -> BoxFuture<'a, bool> {
//!         Box::pin(async move {
//!             self.0.fetch_add(1, Ordering::SeqCst);
//!             true // Continue to next middleware
//!         })
//!     }
//! }
//! ```

use crate::actions::Dispatch;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use std::future::Future;
use std::pin::Pin;

mod effect_middleware;
mod logging;

pub use effect_middleware::EffectMiddleware;
pub use logging::LoggingMiddleware;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Middleware trait - handles dispatched values before they reach the reducer
///
/// Middleware is shared between concurrent dispatches, so `handle` takes
/// `&self`; implementations that keep state use interior mutability.
pub trait Middleware: Send + Sync {
    /// Handle a dispatched value before it reaches the reducer
    ///
    /// # Parameters
    /// - `dispatch`: The value being dispatched
    /// - `state`: Snapshot of the state taken when the dispatch started
    /// - `dispatcher`: Dispatches new values and reads the current state
    ///
    /// # Returns
    /// - `true`: Continue to next middleware/reducer
    /// - `false`: Consume the value
    fn handle<'a>(
        &'a self,
        dispatch: &'a Dispatch,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}
