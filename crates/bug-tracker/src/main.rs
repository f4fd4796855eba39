use anyhow::Context;
use bug_client::{Bug, HttpBugClient};
use bug_tracker::selectors::{get_bugs_by_user, get_unresolved_bugs};
use bug_tracker::state::AppState;
use bug_tracker::{configure_store, load_bugs, logger};
use bug_tracker_config::AppConfig;
use clap::Parser;
use std::sync::Arc;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting bug-tracker (logging to {})", log_file.display());

    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }

    let config = AppConfig::load().with_api_url_override(cli.api_url.clone());
    let client = HttpBugClient::new(&config.api_base_url)
        .with_context(|| format!("Cannot use API URL {}", config.api_base_url))?;
    let store = configure_store(Arc::new(client), &config);

    let command = cli.command.unwrap_or_default();

    // Mount: load the list first, like the bugs view does
    store.dispatch(load_bugs()).await;

    if let Some(dispatch) = command.to_dispatch() {
        store.dispatch(dispatch).await;
    }

    let state = store.state();
    let bugs = match command.user_filter() {
        Some(user_id) => get_bugs_by_user(&state, user_id),
        None => get_unresolved_bugs(&state),
    };
    render(&state, &bugs);

    log::info!("Exiting bug-tracker");
    Ok(())
}

fn render(state: &AppState, bugs: &[&Bug]) {
    if bugs.is_empty() {
        if state.bugs.last_fetch.is_none() {
            println!("No bugs loaded.");
        } else {
            println!("No bugs.");
        }
        return;
    }

    for bug in bugs {
        let mut line = format!("#{} {}", bug.id, bug.description);
        if let Some(user_id) = bug.user_id {
            line.push_str(&format!(" (user {})", user_id));
        }
        if bug.resolved {
            line.push_str(" [resolved]");
        }
        println!("{}", line);
    }
}
