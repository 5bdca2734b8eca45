//! # Nudge Core Library
//!
//! This library provides the core business logic for Nudge, a notification
//! scheduling engine. It accepts timed reminder requests, keeps them ordered
//! by due time, and hands the earliest due one to a presentation host under
//! a single-visible-notification gate, with cancel, snooze, confirm, and
//! dismiss semantics.
//!
//! ## Architecture
//!
//! - **Notifier**: a pull-driven scheduler; the host periodically asks for
//!   the next due notification and calls back in for user actions
//! - **Notification Queue**: pending reminders ordered by ascending due time,
//!   owned exclusively by the notifier
//! - **Deferred Tasks**: cooperative delay-then-requery helpers for hosts
//!   that re-poll shortly after a dismissal
//! - **Storage**: TOML-based configuration and JSON state persistence for
//!   CLI-style hosts
//!
//! ## Key Components
//!
//! - [`Notifier`]: the scheduling engine
//! - [`Notification`]: one scheduled reminder
//! - [`TimeUnit`]: the closed unit enumeration used for due-time input
//! - [`Event`]: state-change events the host can poll or print

pub mod deferred;
pub mod error;
pub mod events;
pub mod notification;
pub mod notifier;
pub mod queue;
pub mod storage;
pub mod unit;

pub use deferred::{defer, requery_after, DeferredTask, SharedNotifier, REQUERY_DELAY};
pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use notification::{Notification, NotificationState};
pub use notifier::{ListenerId, Notifier};
pub use queue::NotificationQueue;
pub use storage::Config;
pub use unit::TimeUnit;
