use super::common::{load_notifier, print_json, CommandResult};

pub fn run() -> CommandResult {
    let notifier = load_notifier()?;
    print_json(&notifier.snapshot())
}
