use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every state change in the notifier produces an Event.
/// Hosts poll for them or print them; listeners receive the fired
/// notification itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    NotificationRegistered {
        id: Uuid,
        text: String,
        due_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    NotificationFired {
        id: Uuid,
        text: String,
        at: DateTime<Utc>,
    },
    NotificationSnoozed {
        id: Uuid,
        due_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    NotificationCancelled {
        id: Uuid,
        at: DateTime<Utc>,
    },
    /// The currently displayed notification was acknowledged and hidden.
    NotificationDismissed {
        at: DateTime<Utc>,
    },
    /// Full scheduler state for host polling.
    QueueSnapshot {
        pending: usize,
        viewing: bool,
        next_due_at: Option<DateTime<Utc>>,
        at: DateTime<Utc>,
    },
}
