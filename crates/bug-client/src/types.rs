//! Bugs API data transfer objects
//!
//! These types mirror the JSON bodies exchanged with the bugs endpoint.
//! Field names are camelCase on the wire (`userId`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned bug identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BugId(pub u64);

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier a bug can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bug as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    pub id: BugId,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub resolved: bool,

    /// Assigned user (None = unassigned)
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl Bug {
    /// Create an unresolved, unassigned bug
    pub fn new(id: BugId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            resolved: false,
            user_id: None,
        }
    }
}

/// A bug that has not been saved yet, sent as the body of `POST /bugs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugDraft {
    pub description: String,

    #[serde(default)]
    pub resolved: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl BugDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Partial update sent as the body of `PATCH /bugs/{id}`
///
/// Only the fields that are set end up in the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl BugPatch {
    /// Patch that marks a bug as resolved
    pub fn resolve() -> Self {
        Self {
            resolved: Some(true),
            ..Default::default()
        }
    }

    /// Patch that assigns a bug to a user
    pub fn assign_to(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

/// A bug as returned by `PATCH /bugs/{id}`
///
/// The server may answer with only the fields it changed, so everything
/// but the id is optional. A `null` user counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugUpdate {
    pub id: BugId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl BugUpdate {
    /// Merge the fields present in this update into `bug`
    pub fn apply_to(&self, bug: &mut Bug) {
        if let Some(description) = &self.description {
            bug.description.clone_from(description);
        }
        if let Some(resolved) = self.resolved {
            bug.resolved = resolved;
        }
        if let Some(user_id) = self.user_id {
            bug.user_id = Some(user_id);
        }
    }
}

impl From<Bug> for BugUpdate {
    fn from(bug: Bug) -> Self {
        Self {
            id: bug.id,
            description: Some(bug.description),
            resolved: Some(bug.resolved),
            user_id: bug.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_keeps_missing_fields() {
        let update: BugUpdate = serde_json::from_str(r#"{ "id": 1, "resolved": true }"#).unwrap();
        let mut bug = Bug::new(BugId(1), "crash on save");
        bug.user_id = Some(UserId(5));

        update.apply_to(&mut bug);

        assert!(bug.resolved);
        assert_eq!(bug.description, "crash on save");
        assert_eq!(bug.user_id, Some(UserId(5)));
    }

    #[test]
    fn test_full_update_overwrites_fields() {
        let json = r#"{ "id": 1, "description": "crash on load", "resolved": true, "userId": 2 }"#;
        let update: BugUpdate = serde_json::from_str(json).unwrap();
        let mut bug = Bug::new(BugId(1), "crash on save");

        update.apply_to(&mut bug);

        assert_eq!(bug.description, "crash on load");
        assert!(bug.resolved);
        assert_eq!(bug.user_id, Some(UserId(2)));
    }

    #[test]
    fn test_bug_deserialize_minimal() {
        let bug: Bug = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert_eq!(bug.id, BugId(1));
        assert!(bug.description.is_empty());
        assert!(!bug.resolved);
        assert_eq!(bug.user_id, None);
    }

    #[test]
    fn test_bug_deserialize_camel_case() {
        let json = r#"{ "id": 3, "description": "crash", "resolved": true, "userId": 7 }"#;
        let bug: Bug = serde_json::from_str(json).unwrap();
        assert_eq!(bug.description, "crash");
        assert!(bug.resolved);
        assert_eq!(bug.user_id, Some(UserId(7)));
    }

    #[test]
    fn test_bug_deserialize_null_user() {
        let bug: Bug = serde_json::from_str(r#"{ "id": 2, "userId": null }"#).unwrap();
        assert_eq!(bug.user_id, None);
    }

    #[test]
    fn test_draft_omits_unset_user() {
        let json = serde_json::to_value(BugDraft::new("a")).unwrap();
        assert_eq!(json, serde_json::json!({ "description": "a", "resolved": false }));
    }

    #[test]
    fn test_patch_bodies() {
        assert_eq!(
            serde_json::to_value(BugPatch::resolve()).unwrap(),
            serde_json::json!({ "resolved": true })
        );
        assert_eq!(
            serde_json::to_value(BugPatch::assign_to(UserId(4))).unwrap(),
            serde_json::json!({ "userId": 4 })
        );
    }
}
