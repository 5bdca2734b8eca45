//! JSON persistence of the notifier for CLI-style hosts.
//!
//! The engine itself keeps everything in memory for the host lifetime;
//! persistence exists so that separate short-lived CLI invocations see one
//! logical scheduler. Listeners are transient and are not persisted.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::Result;
use crate::notifier::Notifier;

const STATE_FILE: &str = "state.json";

pub fn state_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STATE_FILE))
}

/// Load the persisted notifier, or a fresh one if no state exists yet.
pub fn load_notifier() -> Result<Notifier> {
    load_notifier_from(state_path()?)
}

pub fn load_notifier_from(path: impl AsRef<Path>) -> Result<Notifier> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Notifier::new());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_notifier(notifier: &Notifier) -> Result<()> {
    save_notifier_to(state_path()?, notifier)
}

pub fn save_notifier_to(path: impl AsRef<Path>, notifier: &Notifier) -> Result<()> {
    let raw = serde_json::to_string_pretty(notifier)?;
    std::fs::write(path, raw)?;
    Ok(())
}
