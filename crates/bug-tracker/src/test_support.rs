//! In-memory `BugClient` for store tests
//!
//! Replies are scripted per route; unscripted routes answer 404. Every
//! request is recorded so tests can assert how often the API was hit.

use async_trait::async_trait;
use bug_client::{Bug, BugClient, BugDraft, BugId, BugPatch, BugUpdate, RequestError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted reply: `Ok(body)` or `Err(status)`
pub type Reply<T> = std::result::Result<T, u16>;

/// Lets a test observe a pending `GET /bugs` and decide when it completes
#[derive(Clone, Default)]
pub struct ListGate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[derive(Default)]
pub struct FakeBugClient {
    list_reply: Mutex<Option<Reply<Vec<Bug>>>>,
    create_reply: Mutex<Option<Reply<Bug>>>,
    update_replies: Mutex<HashMap<BugId, Reply<BugUpdate>>>,
    list_gate: Mutex<Option<ListGate>>,
    gets: Mutex<usize>,
    posts: Mutex<Vec<BugDraft>>,
    patches: Mutex<Vec<(BugId, BugPatch)>>,
}

impl FakeBugClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_list(&self, reply: Reply<Vec<Bug>>) {
        *self.list_reply.lock().unwrap() = Some(reply);
    }

    pub fn reply_create(&self, reply: Reply<Bug>) {
        *self.create_reply.lock().unwrap() = Some(reply);
    }

    pub fn reply_update(&self, id: BugId, reply: Reply<BugUpdate>) {
        self.update_replies.lock().unwrap().insert(id, reply);
    }

    /// Hold every following `GET /bugs` until the gate is released
    pub fn hold_list_requests(&self) -> ListGate {
        let gate = ListGate::default();
        *self.list_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn get_count(&self) -> usize {
        *self.gets.lock().unwrap()
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn patch_count(&self) -> usize {
        self.patches.lock().unwrap().len()
    }

    pub fn patches(&self) -> Vec<(BugId, BugPatch)> {
        self.patches.lock().unwrap().clone()
    }
}

fn respond<T>(reply: Option<Reply<T>>) -> Result<T> {
    match reply {
        Some(Ok(body)) => Ok(body),
        Some(Err(status)) => Err(RequestError::Status {
            status,
            message: "scripted failure".to_string(),
        }),
        None => Err(RequestError::Status {
            status: 404,
            message: "no reply scripted".to_string(),
        }),
    }
}

#[async_trait]
impl BugClient for FakeBugClient {
    async fn list_bugs(&self) -> Result<Vec<Bug>> {
        *self.gets.lock().unwrap() += 1;

        let gate = self.list_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        // Suspend like a real network call would
        tokio::task::yield_now().await;
        respond(self.list_reply.lock().unwrap().clone())
    }

    async fn create_bug(&self, draft: &BugDraft) -> Result<Bug> {
        self.posts.lock().unwrap().push(draft.clone());
        tokio::task::yield_now().await;
        respond(self.create_reply.lock().unwrap().clone())
    }

    async fn update_bug(&self, id: BugId, patch: &BugPatch) -> Result<BugUpdate> {
        self.patches.lock().unwrap().push((id, patch.clone()));
        tokio::task::yield_now().await;
        respond(self.update_replies.lock().unwrap().get(&id).cloned())
    }
}
