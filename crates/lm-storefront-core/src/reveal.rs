//! Reveal-on-scroll bookkeeping.
//!
//! Elements are keyed by a small integer the frontend stamps on them at
//! registration. Activation is one-shot: once a key is active it never goes
//! back, whatever the observer reports later.

use std::collections::HashSet;

/// Class added to every observed element; CSS hides it until `active`.
pub const REVEAL_CLASS: &str = "reveal";
/// Class that turns the transition on.
pub const ACTIVE_CLASS: &str = "active";
/// Sections carrying this class animate on their own and are never observed.
pub const EXCLUDED_CLASS: &str = "brands-section";

/// Whether an element with these classes takes part in section reveals.
pub fn is_candidate<'a>(mut classes: impl Iterator<Item = &'a str>) -> bool {
    !classes.any(|c| c == EXCLUDED_CLASS)
}

#[derive(Clone, Debug, Default)]
pub struct RevealLedger {
    next_key: u32,
    active: HashSet<u32>,
}

impl RevealLedger {
    pub fn register(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    /// Returns `true` only the first time `key` is activated.
    pub fn activate(&mut self, key: u32) -> bool {
        self.active.insert(key)
    }
}

/// One card activation scheduled from an observer batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredReveal {
    pub key: u32,
    pub delay_ms: u32,
}

/// Plans product-card activations for one observer callback.
///
/// Only intersecting, not-yet-active cards are scheduled; their delay grows by
/// `stagger_ms` per card in batch order. Scheduled cards are marked active
/// immediately so a second batch cannot schedule them again.
pub fn plan_staggered(
    ledger: &mut RevealLedger,
    batch: impl IntoIterator<Item = (u32, bool)>,
    stagger_ms: u32,
) -> Vec<StaggeredReveal> {
    let mut planned = Vec::new();
    for (key, intersecting) in batch {
        if !intersecting || !ledger.activate(key) {
            continue;
        }
        let delay_ms = stagger_ms.saturating_mul(planned.len() as u32);
        planned.push(StaggeredReveal { key, delay_ms });
    }
    planned
}
