// Per-word "is toggling" guard
// Rejects a second toggle on the same word while the first is still in flight

use parking_lot::Mutex;
use std::collections::HashSet;

/// Set of words with a toggle in flight, keyed case-insensitively
#[derive(Debug, Default)]
pub(super) struct ToggleGuard {
    in_flight: Mutex<HashSet<String>>,
}

impl ToggleGuard {
    /// Claim `word`. Returns None when a toggle for it is already running.
    pub(super) fn try_claim(&self, word: &str) -> Option<ToggleTicket<'_>> {
        let key = word.to_lowercase();
        if !self.in_flight.lock().insert(key.clone()) {
            return None;
        }
        Some(ToggleTicket { guard: self, key })
    }

    pub(super) fn is_claimed(&self, word: &str) -> bool {
        self.in_flight.lock().contains(&word.to_lowercase())
    }
}

/// Releases the claimed word when dropped
#[derive(Debug)]
pub struct ToggleTicket<'a> {
    guard: &'a ToggleGuard,
    key: String,
}

impl ToggleTicket<'_> {
    /// Lowercased word this ticket holds
    pub fn word(&self) -> &str {
        &self.key
    }
}

impl Drop for ToggleTicket<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.lock().remove(&self.key);
    }
}
