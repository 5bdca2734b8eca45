use clap::Subcommand;
use uuid::Uuid;

use nudge_core::{Config, TimeUnit};

use super::common::{load_notifier, print_json, save_notifier, CommandResult};

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Create a reminder due after a delay
    Add {
        /// Reminder text
        text: String,
        /// Delay length (defaults from config)
        length: Option<i64>,
        /// seconds | minutes | hours (defaults from config)
        unit: Option<TimeUnit>,
    },
    /// List pending reminders as JSON
    List,
    /// Pull the next due reminder for display
    Next,
    /// Remove a pending reminder without firing it
    Cancel {
        id: Uuid,
    },
    /// Push a pending reminder's due time to now + delay
    Snooze {
        id: Uuid,
        /// Delay length (defaults from config)
        length: Option<i64>,
        /// seconds | minutes | hours (defaults from config)
        unit: Option<TimeUnit>,
    },
    /// Hide the currently displayed reminder
    Dismiss,
    /// Acknowledge the displayed reminder and schedule a follow-up
    Confirm {
        /// Follow-up text (normally the displayed reminder's text)
        text: String,
        /// Delay length (defaults from config)
        length: Option<i64>,
        /// seconds | minutes | hours (defaults from config)
        unit: Option<TimeUnit>,
    },
}

pub fn run(action: ReminderAction) -> CommandResult {
    let config = Config::load()?;
    let defaults = &config.reminders;
    let mut notifier = load_notifier()?;

    match action {
        ReminderAction::Add { text, length, unit } => {
            let length = length.unwrap_or(defaults.default_length);
            let unit = unit.unwrap_or(defaults.default_unit);
            let event = notifier.register_after(text, length, unit);
            print_json(&event)?;
        }
        ReminderAction::List => {
            let pending: Vec<_> = notifier.pending().collect();
            print_json(&pending)?;
        }
        ReminderAction::Next => match notifier.next_notification() {
            Some(notification) => {
                // Displayed until an explicit dismiss/confirm.
                notifier.set_viewing(true);
                print_json(&notification)?;
            }
            None => println!("null"),
        },
        ReminderAction::Cancel { id } => match notifier.cancel(id) {
            Some(event) => print_json(&event)?,
            None => eprintln!("no pending reminder {id}"),
        },
        ReminderAction::Snooze { id, length, unit } => {
            let length = length.unwrap_or(defaults.default_length);
            let unit = unit.unwrap_or(defaults.default_unit);
            match notifier.snooze(id, unit.duration(length)) {
                Some(event) => print_json(&event)?,
                None => eprintln!("no pending reminder {id}"),
            }
        }
        ReminderAction::Dismiss => {
            let event = notifier.dismiss();
            print_json(&event)?;
        }
        ReminderAction::Confirm { text, length, unit } => {
            let length = length.unwrap_or(defaults.default_length);
            let unit = unit.unwrap_or(defaults.default_unit);
            let event = notifier.confirm(text, length, unit);
            print_json(&event)?;
        }
    }

    save_notifier(&notifier)?;
    Ok(())
}
