//! EffectMiddleware - runs effect descriptors against the bugs API
//!
//! Every `Dispatch::Effect` is consumed here: the matching API call is made
//! and its outcome is dispatched as a `BugsAction`. Plain actions pass
//! through untouched.
//!
//! Request failures never escape: they become `RequestFailed` (list fetch)
//! or `MutationFailed` (create/update) actions.

use super::{BoxFuture, Middleware};
use crate::actions::{BugsAction, Dispatch, Effect};
use crate::dispatcher::Dispatcher;
use crate::selectors::is_cache_fresh;
use crate::state::AppState;
use bug_client::{BugClient, BugDraft, BugId, BugPatch, BugUpdate};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;

pub struct EffectMiddleware {
    client: Arc<dyn BugClient>,
    /// Freshness window for the bug list
    cache_ttl: Duration,
}

impl EffectMiddleware {
    pub fn new(client: Arc<dyn BugClient>, cache_ttl: Duration) -> Self {
        Self { client, cache_ttl }
    }

    async fn run(&self, effect: &Effect, dispatcher: &Dispatcher) {
        match effect {
            Effect::LoadBugs => self.load_bugs(dispatcher).await,
            Effect::AddBug(draft) => self.add_bug(draft, dispatcher).await,
            Effect::ResolveBug(id) => {
                self.update_bug(*id, BugPatch::resolve(), BugsAction::Resolved, dispatcher)
                    .await
            }
            Effect::AssignBugToUser { bug_id, user_id } => {
                self.update_bug(
                    *bug_id,
                    BugPatch::assign_to(*user_id),
                    BugsAction::AssignedToUser,
                    dispatcher,
                )
                .await
            }
        }
    }

    async fn load_bugs(&self, dispatcher: &Dispatcher) {
        // Concurrent loads can both pass this check and fetch twice
        if is_cache_fresh(&dispatcher.state().bugs, Local::now(), self.cache_ttl) {
            log::debug!("EffectMiddleware: bug list is fresh, skipping fetch");
            return;
        }

        dispatcher.dispatch(BugsAction::Requested).await;

        match self.client.list_bugs().await {
            Ok(bugs) => {
                dispatcher
                    .dispatch(BugsAction::Received {
                        bugs,
                        fetched_at: Local::now(),
                    })
                    .await;
            }
            Err(err) => {
                dispatcher
                    .dispatch(BugsAction::RequestFailed(err.to_string()))
                    .await;
            }
        }
    }

    async fn add_bug(&self, draft: &BugDraft, dispatcher: &Dispatcher) {
        match self.client.create_bug(draft).await {
            Ok(bug) => dispatcher.dispatch(BugsAction::Added(bug)).await,
            Err(err) => {
                dispatcher
                    .dispatch(BugsAction::MutationFailed {
                        bug_id: None,
                        error: err.to_string(),
                    })
                    .await;
            }
        }
    }

    async fn update_bug(
        &self,
        id: BugId,
        patch: BugPatch,
        on_success: fn(BugUpdate) -> BugsAction,
        dispatcher: &Dispatcher,
    ) {
        match self.client.update_bug(id, &patch).await {
            Ok(update) => dispatcher.dispatch(on_success(update)).await,
            Err(err) => {
                dispatcher
                    .dispatch(BugsAction::MutationFailed {
                        bug_id: Some(id),
                        error: err.to_string(),
                    })
                    .await;
            }
        }
    }
}

impl Middleware for EffectMiddleware {
    fn handle<'a>(
        &'a self,
        dispatch: &'a Dispatch,
        _state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match dispatch {
                Dispatch::Effect(effect) => {
                    self.run(effect, dispatcher).await;
                    false
                }
                Dispatch::Action(_) => true,
            }
        })
    }
}
