//! Offer countdown in the `.timer-number` slots.

use crate::state;
use chrono::Utc;
use gloo_timers::callback::Interval;
use lm_storefront_core::countdown::Countdown;
use web_sys::Element;

fn tick(countdown: &Countdown, slots: &[Element]) {
    let Some(remaining) = countdown.remaining(Utc::now()) else {
        return;
    };
    if slots.len() < 3 {
        return;
    }
    for (slot, text) in slots.iter().zip(remaining.slots()) {
        slot.set_text_content(Some(&text));
    }
}

/// Tick once now, then on every `countdown_tick_ms`. The schedule lives as
/// long as the page.
pub fn init(slots: Vec<Element>) {
    let config = state::config();
    let countdown = Countdown::from_config(
        Utc::now(),
        config.countdown_deadline,
        config.countdown_days,
    );
    tracing::debug!(target_at = %countdown.target(), "countdown started");

    tick(&countdown, &slots);
    Interval::new(config.countdown_tick_ms, move || tick(&countdown, &slots)).forget();
}
