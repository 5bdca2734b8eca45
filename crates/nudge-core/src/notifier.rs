//! The notifier: single authority deciding when reminders surface.
//!
//! The notifier is pull-driven. It does not run threads -- the host asks
//! for the next due notification (directly, or via
//! [`requery_after`](crate::deferred::requery_after) after a dismissal) and
//! calls back in for user actions.
//!
//! ## Viewing gate
//!
//! At most one notification is ever displayed. `is_viewing` is the single
//! source of truth: the host sets it before showing a notification and
//! clears it only once the presentation is fully hidden (dismiss/confirm do
//! this). While it is set, [`Notifier::next_notification`] returns `None`
//! regardless of queue contents -- suppression, not an error.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::Event;
use crate::notification::{Notification, NotificationState};
use crate::queue::NotificationQueue;
use crate::unit::TimeUnit;

pub type ListenerId = u64;

type Listener = Box<dyn Fn(&Notification) + Send>;

/// The scheduling engine.
///
/// Created at host start and living for the host lifetime. Pending
/// reminders are lost on shutdown unless the host persists the notifier
/// (the CLI does; see `storage::state`).
#[derive(Serialize, Deserialize)]
pub struct Notifier {
    queue: NotificationQueue,
    is_viewing: bool,
    #[serde(skip)]
    listeners: Vec<(ListenerId, Listener)>,
    #[serde(skip)]
    next_listener_id: ListenerId,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: NotificationQueue::new(),
            is_viewing: false,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_viewing(&self) -> bool {
        self.is_viewing
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::QueueSnapshot {
            pending: self.queue.len(),
            viewing: self.is_viewing,
            next_due_at: self.queue.peek_earliest().map(|n| n.due_at),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Insert a reminder into the queue. No immediate firing -- surfacing
    /// happens when the host pulls via [`Notifier::next_notification`].
    pub fn register(&mut self, notification: Notification) -> Event {
        tracing::debug!(
            "registered notification {} due {}",
            notification.id,
            notification.due_at
        );
        let event = Event::NotificationRegistered {
            id: notification.id,
            text: notification.text.clone(),
            due_at: notification.due_at,
            at: Utc::now(),
        };
        self.queue.insert(notification);
        event
    }

    /// Register a reminder due `length` units from now.
    pub fn register_after(&mut self, text: impl Into<String>, length: i64, unit: TimeUnit) -> Event {
        self.register(Notification::after(text, length, unit, Utc::now()))
    }

    /// Pull the next displayable notification.
    ///
    /// Returns `None` while a notification is being viewed, when the queue
    /// is empty, or when the earliest entry is not yet due. On fire the
    /// entry leaves the queue, transitions to `Fired`, and registered
    /// listeners are pinged with it.
    pub fn next_notification(&mut self) -> Option<Notification> {
        self.next_due_at(Utc::now())
    }

    /// [`Notifier::next_notification`] against an explicit clock.
    pub fn next_due_at(&mut self, now: DateTime<Utc>) -> Option<Notification> {
        if self.is_viewing {
            return None;
        }
        if !self.queue.peek_earliest()?.is_due(now) {
            return None;
        }
        // Peek said non-empty, so the pop cannot miss.
        let mut notification = self.queue.pop_earliest().ok()?;
        notification.state = NotificationState::Fired;
        tracing::info!("notification {} fired: {}", notification.id, notification.text);
        for (_, listener) in &self.listeners {
            listener(&notification);
        }
        Some(notification)
    }

    /// Remove a pending notification without firing it.
    /// An unknown id is a no-op and returns `None`.
    pub fn cancel(&mut self, id: Uuid) -> Option<Event> {
        match self.queue.remove(id) {
            Ok(cancelled) => {
                tracing::debug!("cancelled notification {id}: {}", cancelled.text);
                Some(Event::NotificationCancelled { id, at: Utc::now() })
            }
            Err(_) => {
                tracing::debug!("cancel: no pending notification {id}");
                None
            }
        }
    }

    /// Push a pending notification's due time to `now + delay`.
    /// An unknown id is a no-op and returns `None`.
    pub fn snooze(&mut self, id: Uuid, delay: Duration) -> Option<Event> {
        self.snooze_at(id, delay, Utc::now())
    }

    /// [`Notifier::snooze`] against an explicit clock.
    pub fn snooze_at(&mut self, id: Uuid, delay: Duration, now: DateTime<Utc>) -> Option<Event> {
        match self.queue.remove(id) {
            Ok(mut snoozed) => {
                snoozed.reschedule(now + delay);
                let due_at = snoozed.due_at;
                self.queue.insert(snoozed);
                tracing::debug!("snoozed notification {id} until {due_at}");
                Some(Event::NotificationSnoozed {
                    id,
                    due_at,
                    at: Utc::now(),
                })
            }
            Err(_) => {
                tracing::debug!("snooze: no pending notification {id}");
                None
            }
        }
    }

    /// Acknowledge the currently displayed notification by scheduling a
    /// follow-up with the same text, due `length` units from now, and
    /// hiding the view.
    pub fn confirm(&mut self, text: impl Into<String>, length: i64, unit: TimeUnit) -> Event {
        self.confirm_at(text, length, unit, Utc::now())
    }

    /// [`Notifier::confirm`] against an explicit clock.
    pub fn confirm_at(
        &mut self,
        text: impl Into<String>,
        length: i64,
        unit: TimeUnit,
        now: DateTime<Utc>,
    ) -> Event {
        self.is_viewing = false;
        self.register(Notification::after(text, length, unit, now))
    }

    /// Hide the current notification without scheduling a follow-up.
    pub fn dismiss(&mut self) -> Event {
        self.is_viewing = false;
        tracing::debug!("notification dismissed");
        Event::NotificationDismissed { at: Utc::now() }
    }

    /// Mark a notification as being displayed (or no longer displayed).
    /// Hosts set this before showing and clear it only when fully hidden.
    pub fn set_viewing(&mut self, viewing: bool) {
        self.is_viewing = viewing;
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Flush transient view state. For hosts whose display context can be
    /// torn down out from under them (context switch, crash recovery).
    pub fn flush_view_state(&mut self) {
        self.is_viewing = false;
    }

    /// Host context was re-entered: flush transient view state, then
    /// re-query for the next due notification.
    pub fn context_reentered(&mut self) -> Option<Notification> {
        self.flush_view_state();
        self.next_notification()
    }

    // ── Listeners ────────────────────────────────────────────────────

    /// Subscribe to fired notifications. The callback runs synchronously
    /// inside the pull that fires.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Notification) + Send + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a subscription. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("queue", &self.queue)
            .field("is_viewing", &self.is_viewing)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn due_in(text: &str, secs: i64) -> Notification {
        Notification::new(text, Utc::now() + Duration::seconds(secs))
    }

    fn overdue(text: &str) -> Notification {
        Notification::new(text, Utc::now() - Duration::seconds(1))
    }

    #[test]
    fn empty_queue_yields_none() {
        let mut notifier = Notifier::new();
        assert!(notifier.next_notification().is_none());
    }

    #[test]
    fn past_due_notification_fires() {
        let mut notifier = Notifier::new();
        notifier.register(overdue("Stretch"));
        let fired = notifier.next_notification().expect("should fire");
        assert_eq!(fired.text, "Stretch");
        assert_eq!(fired.state, NotificationState::Fired);
        // Gone from the queue; never re-fired under the same identity.
        assert!(notifier.next_notification().is_none());
    }

    #[test]
    fn future_notification_is_gated() {
        let mut notifier = Notifier::new();
        notifier.register(due_in("Later", 3600));
        assert!(notifier.next_notification().is_none());
        assert_eq!(notifier.pending_count(), 1);
    }

    #[test]
    fn viewing_suppresses_regardless_of_queue() {
        let mut notifier = Notifier::new();
        notifier.register(overdue("Ready"));
        notifier.set_viewing(true);
        assert!(notifier.next_notification().is_none());

        notifier.set_viewing(false);
        assert!(notifier.next_notification().is_some());
    }

    #[test]
    fn earliest_due_fires_first() {
        let mut notifier = Notifier::new();
        let now = Utc::now();
        notifier.register(Notification::new("A", now + Duration::minutes(5)));
        notifier.register(Notification::new("B", now + Duration::minutes(1)));

        let fired = notifier.next_due_at(now + Duration::minutes(2)).unwrap();
        assert_eq!(fired.text, "B");
    }

    #[test]
    fn cancel_removes_without_firing() {
        let mut notifier = Notifier::new();
        let event = notifier.register(overdue("Unwanted"));
        let id = match event {
            Event::NotificationRegistered { id, .. } => id,
            _ => panic!("expected registration event"),
        };

        assert!(notifier.cancel(id).is_some());
        assert!(notifier.next_notification().is_none());
        // Second cancel is a no-op, not a fault.
        assert!(notifier.cancel(id).is_none());
    }

    #[test]
    fn snooze_recomputes_due_time() {
        let mut notifier = Notifier::new();
        let n = due_in("Snoozable", 10);
        let id = n.id;
        let old_due = n.due_at;
        notifier.register(n);

        let now = Utc::now();
        let event = notifier.snooze_at(id, Duration::minutes(5), now).unwrap();
        match event {
            Event::NotificationSnoozed { due_at, .. } => {
                assert_eq!(due_at, now + Duration::minutes(5));
            }
            _ => panic!("expected snooze event"),
        }

        // The old due time is no longer in the queue.
        let snoozed = notifier.pending().find(|p| p.id == id).unwrap();
        assert_ne!(snoozed.due_at, old_due);
        assert_eq!(snoozed.state, NotificationState::Pending);
    }

    #[test]
    fn snooze_unknown_id_is_noop() {
        let mut notifier = Notifier::new();
        assert!(notifier.snooze(Uuid::new_v4(), Duration::minutes(5)).is_none());
    }

    #[test]
    fn confirm_schedules_followup_and_hides() {
        let mut notifier = Notifier::new();
        notifier.set_viewing(true);

        let now = Utc::now();
        let event = notifier.confirm_at("Stretch", 30, TimeUnit::Seconds, now);
        match event {
            Event::NotificationRegistered { text, due_at, .. } => {
                assert_eq!(text, "Stretch");
                assert_eq!(due_at, now + Duration::seconds(30));
            }
            _ => panic!("expected registration event"),
        }
        assert!(!notifier.is_viewing());
        assert_eq!(notifier.pending_count(), 1);
    }

    #[test]
    fn dismiss_clears_viewing_only() {
        let mut notifier = Notifier::new();
        notifier.register(due_in("Pending", 3600));
        notifier.set_viewing(true);
        notifier.dismiss();
        assert!(!notifier.is_viewing());
        assert_eq!(notifier.pending_count(), 1);
    }

    #[test]
    fn listeners_ping_on_fire() {
        let mut notifier = Notifier::new();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = notifier.subscribe(move |n| sink.lock().unwrap().push(n.text.clone()));

        notifier.register(overdue("Ping"));
        notifier.next_notification();
        assert_eq!(seen.lock().unwrap().as_slice(), ["Ping".to_string()]);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));

        notifier.register(overdue("Silent"));
        notifier.next_notification();
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn context_reentry_flushes_and_requeries() {
        let mut notifier = Notifier::new();
        notifier.register(overdue("Waiting"));
        // A stale viewing flag (display context torn down) blocks delivery.
        notifier.set_viewing(true);
        assert!(notifier.next_notification().is_none());

        let fired = notifier.context_reentered().expect("should requery");
        assert_eq!(fired.text, "Waiting");
    }

    #[test]
    fn state_roundtrips_without_listeners() {
        let mut notifier = Notifier::new();
        notifier.subscribe(|_| {});
        notifier.register(due_in("Kept", 60));
        notifier.set_viewing(true);

        let json = serde_json::to_string(&notifier).unwrap();
        let mut restored: Notifier = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.pending_count(), 1);
        assert!(restored.is_viewing());
        // Listeners are transient and do not survive the roundtrip.
        assert_eq!(restored.listeners.len(), 0);
        restored.flush_view_state();
        assert!(!restored.is_viewing());
    }
}
