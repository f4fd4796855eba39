//! Selectors - pure functions deriving views from state

use crate::state::{AppState, BugsState};
use bug_client::{Bug, UserId};
use chrono::{DateTime, Local, TimeDelta};
use std::time::Duration;

/// Bugs that are not resolved yet, in list order
pub fn get_unresolved_bugs(state: &AppState) -> Vec<&Bug> {
    state.bugs.list.iter().filter(|bug| !bug.resolved).collect()
}

/// Bugs assigned to `user_id`, in list order
pub fn get_bugs_by_user(state: &AppState, user_id: UserId) -> Vec<&Bug> {
    state
        .bugs
        .list
        .iter()
        .filter(|bug| bug.user_id == Some(user_id))
        .collect()
}

/// Whether the last successful fetch happened less than `window` before `now`
///
/// A slice that has never been fetched is never fresh. A zero window
/// disables caching.
pub fn is_cache_fresh(bugs: &BugsState, now: DateTime<Local>, window: Duration) -> bool {
    let Some(last_fetch) = bugs.last_fetch else {
        return false;
    };

    let window = TimeDelta::from_std(window).unwrap_or(TimeDelta::MAX);
    now.signed_duration_since(last_fetch) < window
}
