use bug_client::{BugDraft, BugId, UserId};
use bug_tracker::actions::{add_bug, assign_bug_to_user, resolve_bug, Dispatch};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bug-tracker", about = "List, add and resolve bugs", version)]
pub struct Cli {
    /// Root URL of the bugs API (overrides config and BUG_TRACKER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List unresolved bugs (the default)
    List {
        /// Only show bugs assigned to this user
        #[arg(long)]
        user: Option<u64>,
    },
    /// Report a new bug
    Add { description: String },
    /// Mark a bug as resolved
    Resolve { id: u64 },
    /// Assign a bug to a user
    Assign { bug_id: u64, user_id: u64 },
}

impl Default for Command {
    fn default() -> Self {
        Command::List { user: None }
    }
}

impl Command {
    /// What to dispatch after the bug list has been loaded
    pub fn to_dispatch(&self) -> Option<Dispatch> {
        match self {
            Command::List { .. } => None,
            Command::Add { description } => Some(add_bug(BugDraft::new(description.clone()))),
            Command::Resolve { id } => Some(resolve_bug(BugId(*id))),
            Command::Assign { bug_id, user_id } => {
                Some(assign_bug_to_user(BugId(*bug_id), UserId(*user_id)))
            }
        }
    }

    /// User filter for the printed list
    pub fn user_filter(&self) -> Option<UserId> {
        match self {
            Command::List { user } => user.map(UserId),
            _ => None,
        }
    }
}
