//! Bugs REST API client
//!
//! This crate provides a trait-based client for the bugs endpoint:
//!
//! - `GET /bugs` → list of bugs
//! - `POST /bugs` with a draft → created bug (server-assigned id)
//! - `PATCH /bugs/{id}` with a partial bug → updated bug
//!
//! ```text
//! ┌──────────────────────────┐
//! │     BugClient trait      │
//! │  - list_bugs()           │
//! │  - create_bug()          │
//! │  - update_bug()          │
//! └──────────────────────────┘
//!              │
//!              ▼
//!     ┌─────────────────┐
//!     │ HttpBugClient   │
//!     │ (reqwest, JSON) │
//!     └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bug_client::{BugClient, HttpBugClient};
//!
//! # async fn example() -> bug_client::Result<()> {
//! let client = HttpBugClient::new("http://localhost:9001/api")?;
//! let bugs = client.list_bugs().await?;
//! println!("{} bugs", bugs.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::BugClient;
pub use error::{RequestError, Result};
pub use http_client::HttpBugClient;
pub use types::{Bug, BugDraft, BugId, BugPatch, BugUpdate, UserId};
