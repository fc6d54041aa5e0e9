//! Reveal-on-scroll.
//!
//! Two observers: one for page sections and `.reveal` elements, one for
//! product cards with a per-batch stagger. Each element carries a
//! `data-reveal-key` from its ledger and is activated at most once.

use crate::dom;
use crate::state::{self, AppState};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use lm_storefront_core::StorefrontConfig;
use lm_storefront_core::reveal::{self, ACTIVE_CLASS, REVEAL_CLASS, RevealLedger};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const KEY_ATTR: &str = "data-reveal-key";

type Batch = Vec<(u32, bool, Element)>;

fn entries(batch: Array) -> Batch {
    batch
        .iter()
        .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let target = entry.target();
            let key = target.get_attribute(KEY_ATTR)?.parse().ok()?;
            Some((key, entry.is_intersecting(), target))
        })
        .collect()
}

fn observer(
    config: &StorefrontConfig,
    root_margin: Option<&str>,
    mut on_batch: impl FnMut(Batch, IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let cb = Closure::wrap(Box::new(move |batch: Array, obs: IntersectionObserver| {
        on_batch(entries(batch), obs);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let obs = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    Ok(obs)
}

/// Tag `el` for reveal and observe it, once per element.
fn register(
    el: &Element,
    obs: &IntersectionObserver,
    ledger: fn(&mut AppState) -> &mut RevealLedger,
) -> Result<(), JsValue> {
    if el.has_attribute(KEY_ATTR) {
        return Ok(());
    }
    let key = state::with_mut(|s| ledger(s).register());
    el.set_attribute(KEY_ATTR, &key.to_string())?;
    dom::add_class(el, REVEAL_CLASS);
    obs.observe(el);
    Ok(())
}

fn section_ledger(s: &mut AppState) -> &mut RevealLedger {
    &mut s.sections
}

fn card_ledger(s: &mut AppState) -> &mut RevealLedger {
    &mut s.cards
}

pub fn init() -> Result<(), JsValue> {
    let config = state::config();

    let sections = observer(&config, Some(config.reveal_root_margin.as_str()), |batch, obs| {
        for (key, intersecting, target) in batch {
            if intersecting && state::with_mut(|s| s.sections.activate(key)) {
                dom::add_class(&target, ACTIVE_CLASS);
                obs.unobserve(&target);
            }
        }
    })?;
    let mut section_count = 0;
    for el in dom::query_all("section, .reveal") {
        let class_name = el.class_name();
        if reveal::is_candidate(class_name.split_whitespace()) {
            register(&el, &sections, section_ledger)?;
            section_count += 1;
        }
    }

    let stagger_ms = config.reveal_stagger_ms;
    let cards = observer(&config, None, move |batch, obs| {
        let plan = state::with_mut(|s| {
            reveal::plan_staggered(
                &mut s.cards,
                batch.iter().map(|(key, hit, _)| (*key, *hit)),
                stagger_ms,
            )
        });
        for step in plan {
            let Some((_, _, target)) = batch.iter().find(|(key, _, _)| *key == step.key) else {
                continue;
            };
            obs.unobserve(target);
            let target = target.clone();
            Timeout::new(step.delay_ms, move || dom::add_class(&target, ACTIVE_CLASS)).forget();
        }
    })?;
    let card_els = dom::query_all(".product-card");
    for card in &card_els {
        register(card, &cards, card_ledger)?;
    }

    tracing::debug!(sections = section_count, cards = card_els.len(), "reveal observers ready");
    Ok(())
}
