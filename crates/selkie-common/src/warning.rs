//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Warnings are diagnostic only and never change what a builder renders.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format a warning line for `component`.
fn format_warning(component: &str, message: &str) -> String {
    format!("[selkie {component}] ⚠ {message}")
}

/// Record `key` in the dedup set, returning `true` the first time it is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "empty value appended as class");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let line = format_warning(component, message);
    if record(line.clone()) {
        eprintln!("{}", line.yellow());
    }
}

/// Returns `true` if this exact warning has already been emitted.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&format_warning(component, message)))
}

/// Clear all recorded warnings
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
