//! The notification entity.
//!
//! ## State Transitions
//!
//! ```text
//! Pending -> Fired -> (Dismissed | Snoozed | Cancelled)
//!    ^                     |
//!    +------ Snoozed ------+
//! ```
//!
//! `Dismissed` and `Cancelled` are terminal. Snoozing returns the
//! notification to `Pending` with a recomputed due time; the text and id
//! are kept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::unit::TimeUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationState {
    Pending,
    Fired,
    Snoozed,
    Dismissed,
    Cancelled,
}

impl NotificationState {
    /// Terminal states never return to the queue.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            NotificationState::Dismissed | NotificationState::Cancelled
        )
    }
}

/// One scheduled reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    /// Display text. Immutable after creation.
    pub text: String,
    /// Absolute timestamp at which the notification should fire.
    pub due_at: DateTime<Utc>,
    pub state: NotificationState,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(text: impl Into<String>, due_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            due_at,
            state: NotificationState::Pending,
            created_at: Utc::now(),
        }
    }

    /// Build a reminder due `length` units after `now`.
    ///
    /// This is the confirm/create path: the host collects text, length, and
    /// unit from user input and the due time is computed here.
    pub fn after(text: impl Into<String>, length: i64, unit: TimeUnit, now: DateTime<Utc>) -> Self {
        Self::new(text, now + unit.duration(length))
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }

    /// Reschedule to `due_at`, returning the notification to `Pending`.
    pub(crate) fn reschedule(&mut self, due_at: DateTime<Utc>) {
        self.due_at = due_at;
        self.state = NotificationState::Pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_starts_pending() {
        let n = Notification::new("Stretch", Utc::now());
        assert_eq!(n.state, NotificationState::Pending);
        assert_eq!(n.text, "Stretch");
    }

    #[test]
    fn after_computes_due_time_from_unit() {
        let now = Utc::now();
        let n = Notification::after("Drink water", 30, TimeUnit::Seconds, now);
        assert_eq!(n.due_at, now + Duration::seconds(30));

        let n = Notification::after("Break", 2, TimeUnit::Hours, now);
        assert_eq!(n.due_at, now + Duration::hours(2));
    }

    #[test]
    fn is_due_compares_against_now() {
        let now = Utc::now();
        let n = Notification::new("Past", now - Duration::seconds(1));
        assert!(n.is_due(now));

        let n = Notification::new("Future", now + Duration::minutes(5));
        assert!(!n.is_due(now));
        // Due exactly now counts as due.
        let n = Notification::new("Now", now);
        assert!(n.is_due(now));
    }

    #[test]
    fn reschedule_resets_to_pending() {
        let now = Utc::now();
        let mut n = Notification::new("Snoozed", now);
        n.state = NotificationState::Fired;
        n.reschedule(now + Duration::minutes(5));
        assert_eq!(n.state, NotificationState::Pending);
        assert_eq!(n.due_at, now + Duration::minutes(5));
    }

    #[test]
    fn terminal_states() {
        assert!(NotificationState::Dismissed.is_terminal());
        assert!(NotificationState::Cancelled.is_terminal());
        assert!(!NotificationState::Pending.is_terminal());
        assert!(!NotificationState::Fired.is_terminal());
        assert!(!NotificationState::Snoozed.is_terminal());
    }

    #[test]
    fn serde_roundtrip() {
        let n = Notification::new("Persisted", Utc::now());
        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, n.id);
        assert_eq!(back.text, n.text);
        assert_eq!(back.due_at, n.due_at);
        assert_eq!(back.state, n.state);
    }
}
