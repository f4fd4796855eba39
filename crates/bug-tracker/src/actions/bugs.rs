//! Bugs slice actions and action creators
//!
//! `BugsAction` values are plain data consumed by the bugs reducer.
//! The action creators (`load_bugs`, `add_bug`, ...) return effects that the
//! effect middleware runs against the API before dispatching `BugsAction`s.

use super::{Dispatch, Effect};
use bug_client::{Bug, BugDraft, BugId, BugUpdate, UserId};
use chrono::{DateTime, Local};

/// Lifecycle actions for the bugs slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BugsAction {
    // List fetch
    /// A list fetch was started
    Requested,
    /// The list fetch succeeded with the server's bugs
    Received {
        bugs: Vec<Bug>,
        fetched_at: DateTime<Local>,
    },
    /// The list fetch failed (error message)
    RequestFailed(String),

    // Mutations
    /// A bug was saved by the server (carries the assigned id)
    Added(Bug),
    /// The server marked a bug as resolved (fields it sent back)
    Resolved(BugUpdate),
    /// The server assigned a bug to a user (fields it sent back)
    AssignedToUser(BugUpdate),
    /// A create or update request failed; `bug_id` is None for creates
    MutationFailed {
        bug_id: Option<BugId>,
        error: String,
    },
}

/// Load the bug list unless the cached list is still fresh
pub fn load_bugs() -> Dispatch {
    Dispatch::Effect(Effect::LoadBugs)
}

/// Save a new bug; it is added to the list once the server has stored it
pub fn add_bug(draft: BugDraft) -> Dispatch {
    Dispatch::Effect(Effect::AddBug(draft))
}

/// Mark a bug as resolved on the server
pub fn resolve_bug(id: BugId) -> Dispatch {
    Dispatch::Effect(Effect::ResolveBug(id))
}

/// Assign a bug to a user on the server
pub fn assign_bug_to_user(bug_id: BugId, user_id: UserId) -> Dispatch {
    Dispatch::Effect(Effect::AssignBugToUser { bug_id, user_id })
}

/// Convenience for dispatching `BugsAction::RequestFailed` directly
pub fn bugs_request_failed(error: impl Into<String>) -> Dispatch {
    BugsAction::RequestFailed(error.into()).into()
}
