//! Actions module
//!
//! Everything that can be dispatched to the store is a `Dispatch`:
//! - `Dispatch::Action`: plain data handled by the reducers
//! - `Dispatch::Effect`: asynchronous work handled by `EffectMiddleware`
//!
//! Actions are tagged by slice, so each sub-reducer only sees its own enum.

pub mod bugs;
pub mod effect;

pub use bugs::{
    add_bug, assign_bug_to_user, bugs_request_failed, load_bugs, resolve_bug, BugsAction,
};
pub use effect::Effect;

/// Root action enum - tagged by slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Bugs slice actions
    Bugs(BugsAction),
}

/// A value handed to `Store::dispatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Synchronous action, forwarded through the middleware chain to the reducer
    Action(Action),
    /// Effect descriptor, intercepted by the effect middleware
    Effect(Effect),
}

impl From<Action> for Dispatch {
    fn from(action: Action) -> Self {
        Dispatch::Action(action)
    }
}

impl From<BugsAction> for Action {
    fn from(action: BugsAction) -> Self {
        Action::Bugs(action)
    }
}

impl From<BugsAction> for Dispatch {
    fn from(action: BugsAction) -> Self {
        Dispatch::Action(Action::Bugs(action))
    }
}

impl From<Effect> for Dispatch {
    fn from(effect: Effect) -> Self {
        Dispatch::Effect(effect)
    }
}
