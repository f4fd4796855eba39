//! Bugs client trait
//!
//! Defines the `BugClient` trait that all client implementations must
//! satisfy. The store only ever talks to the API through this trait, which
//! lets tests swap in an in-memory implementation.

use crate::error::Result;
use crate::types::{Bug, BugDraft, BugId, BugPatch, BugUpdate};
use async_trait::async_trait;

/// Bugs API client trait
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bug_client::{Bug, BugClient};
///
/// async fn count_open(client: &dyn BugClient) -> bug_client::Result<usize> {
///     let bugs = client.list_bugs().await?;
///     Ok(bugs.iter().filter(|bug| !bug.resolved).count())
/// }
/// ```
#[async_trait]
pub trait BugClient: Send + Sync {
    /// Fetch all bugs (`GET /bugs`)
    async fn list_bugs(&self) -> Result<Vec<Bug>>;

    /// Save a new bug (`POST /bugs`)
    ///
    /// Returns the stored bug including its server-assigned id.
    async fn create_bug(&self, draft: &BugDraft) -> Result<Bug>;

    /// Apply a partial update to a bug (`PATCH /bugs/{id}`)
    ///
    /// Returns the server's view of the bug, which may carry only the
    /// changed fields.
    async fn update_bug(&self, id: BugId, patch: &BugPatch) -> Result<BugUpdate>;
}
