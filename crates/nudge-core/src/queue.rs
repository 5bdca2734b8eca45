//! The ordered store of pending notifications.
//!
//! Entries are kept in ascending due-time order; duplicates of the same due
//! time keep their insertion order. The queue is owned exclusively by the
//! [`Notifier`](crate::Notifier) -- hosts never mutate it directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::notification::Notification;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a notification, maintaining ascending due-time order.
    /// Stable under duplicate due times: later inserts go after earlier ones.
    pub fn insert(&mut self, notification: Notification) {
        let idx = self
            .entries
            .partition_point(|e| e.due_at <= notification.due_at);
        self.entries.insert(idx, notification);
    }

    /// The notification with the smallest due time, if any. Does not mutate.
    pub fn peek_earliest(&self) -> Option<&Notification> {
        self.entries.first()
    }

    /// Remove and return the earliest notification.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyQueue`] if nothing is pending. Callers
    /// must check emptiness first or treat the error as "nothing to show".
    pub fn pop_earliest(&mut self) -> Result<Notification, CoreError> {
        if self.entries.is_empty() {
            return Err(CoreError::EmptyQueue);
        }
        Ok(self.entries.remove(0))
    }

    /// Remove a specific notification by identity.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no pending entry has `id`.
    pub fn remove(&mut self, id: Uuid) -> Result<Notification, CoreError> {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => Ok(self.entries.remove(idx)),
            None => Err(CoreError::NotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
}
