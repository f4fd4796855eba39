use bug_client::{Bug, BugId};
use chrono::{DateTime, Local};

/// Bugs slice - the authoritative in-memory list of bugs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugsState {
    /// Bugs in fetch/creation order; ids are unique
    pub list: Vec<Bug>,
    /// True while a list fetch is in flight
    pub loading: bool,
    /// When the list was last fetched successfully
    pub last_fetch: Option<DateTime<Local>>,
}

impl BugsState {
    pub fn find(&self, id: BugId) -> Option<&Bug> {
        self.list.iter().find(|bug| bug.id == id)
    }
}
