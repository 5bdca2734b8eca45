//! Cooperative deferred tasks.
//!
//! After a dismissal the host does not re-query immediately -- it yields,
//! waits a short delay, and then asks for the next notification. These
//! helpers run that pattern on the tokio runtime without blocking the
//! calling context, and the pending task can be cancelled if the view is
//! torn down before it fires.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::notification::Notification;
use crate::notifier::Notifier;

/// Delay between a dismissal and the follow-up queue query.
pub const REQUERY_DELAY: Duration = Duration::from_millis(500);

/// A notifier shared with deferred tasks. Queue mutations are not atomic
/// across calls, so multi-threaded hosts serialize them under one mutex.
pub type SharedNotifier = Arc<Mutex<Notifier>>;

/// Handle to a scheduled deferred task.
pub struct DeferredTask {
    handle: JoinHandle<()>,
}

impl DeferredTask {
    /// Abort the task if it has not fired yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Run `f` after `delay` without blocking the caller.
///
/// Must be called from within a tokio runtime.
pub fn defer<F>(delay: Duration, f: F) -> DeferredTask
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        f();
    });
    DeferredTask { handle }
}

/// After `delay`, pull the next due notification from `notifier` and hand
/// it to `on_fire`. Nothing happens if the queue has nothing displayable
/// by then (still viewing, empty, or not yet due).
pub fn requery_after<F>(notifier: SharedNotifier, delay: Duration, on_fire: F) -> DeferredTask
where
    F: FnOnce(Notification) + Send + 'static,
{
    defer(delay, move || {
        let next = notifier
            .lock()
            .expect("notifier mutex poisoned")
            .next_notification();
        if let Some(notification) = next {
            on_fire(notification);
        }
    })
}
