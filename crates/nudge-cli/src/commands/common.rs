//! Helpers shared by the command modules.

use nudge_core::storage::state;
use nudge_core::Notifier;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn load_notifier() -> Result<Notifier, Box<dyn std::error::Error>> {
    Ok(state::load_notifier()?)
}

pub fn save_notifier(notifier: &Notifier) -> CommandResult {
    state::save_notifier(notifier)?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
