//! Builder diagnostics with colored terminal output.
//!
//! Warnings are deduplicated so that a hot loop rebuilding the same markup
//! does not spam the terminal. Used for misuse that optimized builds tolerate
//! (debug builds panic instead).

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings already printed, for deduplication.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about builder misuse (prints once per unique component/message pair).
///
/// # Example
/// ```ignore
/// warn_once("styles", "hyphenated style property name `background-color`");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        eprintln!(
            "{}",
            format!("[magpie {component}] warning: {message}").yellow()
        );
    }
}

/// Clear all recorded warnings (call when starting a fresh build session).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_warnings_do_not_panic() {
        clear_warnings();
        warn_once("test", "same message");
        warn_once("test", "same message");
        warn_once("test", "different message");
        clear_warnings();
        warn_once("test", "same message");
    }
}
