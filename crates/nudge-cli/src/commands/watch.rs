//! A minimal polling host for the scheduler.
//!
//! Fires due reminders to stdout, one at a time. After each dismissal the
//! loop yields for the configured requery delay before asking the queue
//! again, and falls back to the poll interval while nothing is due.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use nudge_core::storage::state;
use nudge_core::{Config, Notification, SharedNotifier};

use super::common::CommandResult;

pub fn run(interval_ms: Option<u64>) -> CommandResult {
    let config = Config::load()?;
    let poll = Duration::from_millis(interval_ms.unwrap_or(config.poll_interval_ms));
    let requery = Duration::from_millis(config.requery_delay_ms);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch_loop(poll, requery))
}

async fn watch_loop(poll: Duration, requery: Duration) -> CommandResult {
    let notifier: SharedNotifier = Arc::new(Mutex::new(state::load_notifier()?));

    // Startup is a context re-entry: flush any viewing flag left behind by
    // a previous host and surface whatever is already due.
    let initial = notifier.lock().unwrap().context_reentered();
    if let Some(notification) = initial {
        surface(&notifier, &notification)?;
        tokio::time::sleep(requery).await;
    }

    tracing::info!(
        "watching queue (poll {}ms, requery {}ms)",
        poll.as_millis(),
        requery.as_millis()
    );

    loop {
        let next = notifier.lock().unwrap().next_notification();
        match next {
            Some(notification) => {
                surface(&notifier, &notification)?;
                // Cooperative delay before the follow-up query.
                tokio::time::sleep(requery).await;
            }
            None => tokio::time::sleep(poll).await,
        }
    }
}

/// Display a fired reminder, then immediately dismiss it so the next poll
/// can surface the following one.
fn surface(notifier: &SharedNotifier, notification: &Notification) -> CommandResult {
    println!(
        "[{}] {}",
        notification.due_at.format("%H:%M:%S"),
        notification.text
    );
    let mut guard = notifier.lock().unwrap();
    guard.set_viewing(true);
    guard.dismiss();
    state::save_notifier(&guard)?;
    Ok(())
}
