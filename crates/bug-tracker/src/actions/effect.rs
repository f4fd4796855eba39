//! Effect descriptors
//!
//! Effects describe asynchronous work (API calls followed by further
//! dispatches). They are consumed by `EffectMiddleware` and never reach the
//! reducer.

use bug_client::{BugDraft, BugId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /bugs`, skipped while the cached list is fresh
    LoadBugs,
    /// `POST /bugs`
    AddBug(BugDraft),
    /// `PATCH /bugs/{id}` with `resolved: true`
    ResolveBug(BugId),
    /// `PATCH /bugs/{id}` with `userId`
    AssignBugToUser { bug_id: BugId, user_id: UserId },
}
