//! Bugs Reducer
//!
//! Handles state updates for the bugs slice using tagged BugsAction.

use crate::actions::BugsAction;
use crate::state::BugsState;
use bug_client::{Bug, BugUpdate};

/// Replace the entry with the same id as `bug`; unknown ids leave the list untouched
fn replace_bug(state: &mut BugsState, bug: &Bug) {
    match state.list.iter_mut().find(|existing| existing.id == bug.id) {
        Some(existing) => *existing = bug.clone(),
        None => log::warn!("Bug {} not found in state, ignoring update", bug.id),
    }
}

/// Merge a server update into the entry with the same id, keeping fields it left out
fn merge_update(state: &mut BugsState, update: &BugUpdate) {
    match state.list.iter_mut().find(|existing| existing.id == update.id) {
        Some(existing) => update.apply_to(existing),
        None => log::warn!("Bug {} not found in state, ignoring update", update.id),
    }
}

/// Reduce the bugs slice
///
/// Accepts only BugsAction, making it type-safe and focused.
pub fn reduce(mut state: BugsState, action: &BugsAction) -> BugsState {
    match action {
        BugsAction::Requested => {
            state.loading = true;
        }

        BugsAction::Received { bugs, fetched_at } => {
            state.list = bugs.clone();
            state.loading = false;
            state.last_fetch = Some(*fetched_at);
            log::info!("Loaded {} bugs", bugs.len());
        }

        BugsAction::RequestFailed(error) => {
            state.loading = false;
            log::error!("Failed to load bugs: {}", error);
        }

        BugsAction::Added(bug) => {
            if state.find(bug.id).is_some() {
                // Ids are unique; a repeated id means the server echoed an existing bug
                replace_bug(&mut state, bug);
            } else {
                state.list.push(bug.clone());
            }
        }

        BugsAction::Resolved(update) | BugsAction::AssignedToUser(update) => {
            merge_update(&mut state, update);
        }

        BugsAction::MutationFailed { bug_id, error } => match bug_id {
            Some(id) => log::error!("Failed to update bug {}: {}", id, error),
            None => log::error!("Failed to add bug: {}", error),
        },
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use bug_client::{BugId, UserId};
    use chrono::Local;

    fn bug(id: u64) -> Bug {
        Bug::new(BugId(id), format!("bug {}", id))
    }

    fn state_with(bugs: Vec<Bug>) -> BugsState {
        BugsState {
            list: bugs,
            ..Default::default()
        }
    }

    #[test]
    fn test_requested_sets_loading() {
        let state = reduce(BugsState::default(), &BugsAction::Requested);
        assert!(state.loading);
        assert!(state.list.is_empty());
        assert!(state.last_fetch.is_none());
    }

    #[test]
    fn test_received_replaces_list_and_stamps_fetch() {
        let now = Local::now();
        let state = BugsState {
            list: vec![bug(9)],
            loading: true,
            last_fetch: None,
        };

        let state = reduce(
            state,
            &BugsAction::Received {
                bugs: vec![bug(1), bug(2)],
                fetched_at: now,
            },
        );

        assert_eq!(state.list, vec![bug(1), bug(2)]);
        assert!(!state.loading);
        assert_eq!(state.last_fetch, Some(now));
    }

    #[test]
    fn test_request_failed_keeps_list() {
        let state = BugsState {
            list: vec![bug(1)],
            loading: true,
            last_fetch: None,
        };

        let state = reduce(state, &BugsAction::RequestFailed("boom".into()));

        assert!(!state.loading);
        assert_eq!(state.list, vec![bug(1)]);
        assert!(state.last_fetch.is_none());
    }

    #[test]
    fn test_added_appends_in_order() {
        let state = reduce(state_with(vec![bug(1)]), &BugsAction::Added(bug(2)));
        assert_eq!(state.list, vec![bug(1), bug(2)]);
    }

    #[test]
    fn test_added_with_known_id_does_not_duplicate() {
        let mut updated = bug(1);
        updated.description = "renamed".into();

        let state = reduce(state_with(vec![bug(1)]), &BugsAction::Added(updated.clone()));

        assert_eq!(state.list, vec![updated]);
    }

    fn update(id: u64) -> BugUpdate {
        BugUpdate {
            id: BugId(id),
            description: None,
            resolved: None,
            user_id: None,
        }
    }

    #[test]
    fn test_resolved_updates_matching_entry() {
        let resolved = BugUpdate {
            resolved: Some(true),
            ..update(2)
        };

        let state = reduce(
            state_with(vec![bug(1), bug(2), bug(3)]),
            &BugsAction::Resolved(resolved),
        );

        assert!(!state.list[0].resolved);
        assert!(state.list[1].resolved);
        assert!(!state.list[2].resolved);
    }

    #[test]
    fn test_assigned_updates_matching_entry() {
        let assigned = BugUpdate {
            user_id: Some(UserId(5)),
            ..update(1)
        };

        let state = reduce(state_with(vec![bug(1)]), &BugsAction::AssignedToUser(assigned));

        assert_eq!(state.list[0].user_id, Some(UserId(5)));
    }

    #[test]
    fn test_partial_update_keeps_description_and_user() {
        let mut existing = Bug::new(BugId(1), "crash on save");
        existing.user_id = Some(UserId(5));
        let resolved = BugUpdate {
            resolved: Some(true),
            ..update(1)
        };

        let state = reduce(state_with(vec![existing]), &BugsAction::Resolved(resolved));

        assert!(state.list[0].resolved);
        assert_eq!(state.list[0].description, "crash on save");
        assert_eq!(state.list[0].user_id, Some(UserId(5)));
    }

    #[test]
    fn test_update_for_unknown_bug_is_ignored() {
        let resolved = BugUpdate {
            resolved: Some(true),
            ..update(7)
        };

        let state = reduce(state_with(vec![bug(1)]), &BugsAction::Resolved(resolved));

        assert_eq!(state.list, vec![bug(1)]);
    }

    #[test]
    fn test_mutation_failed_leaves_state_unchanged() {
        let before = BugsState {
            list: vec![bug(1)],
            loading: true,
            last_fetch: None,
        };

        let after = reduce(
            before.clone(),
            &BugsAction::MutationFailed {
                bug_id: Some(BugId(1)),
                error: "500".into(),
            },
        );

        assert_eq!(after, before);
    }
}
