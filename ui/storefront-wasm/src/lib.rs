//! Lomiees storefront WASM frontend
//!
//! Drives the storefront page: hero carousel, brand strip, product grid,
//! reveal-on-scroll, offer countdown, toasts and the auth drawer. Component
//! state lives in `lm-storefront-core`; this crate binds it to the DOM.

pub mod api;
pub mod auth;
pub mod carousel;
pub mod countdown;
pub mod dom;
pub mod events;
pub mod logging;
pub mod profile;
pub mod reveal;
pub mod shop;
pub mod state;
pub mod ticker;
pub mod toast;

use lm_storefront_core::StorefrontConfig;
use lm_storefront_core::config::CONFIG_ELEMENT_ID;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let (config, problem) = load_config();
    logging::init(config.max_level());
    if let Some(err) = problem {
        tracing::warn!("ignoring page configuration: {err:#}");
    }
    state::set_config(config);

    init()
}

/// Page configuration from the optional JSON block, defaults otherwise.
fn load_config() -> (StorefrontConfig, Option<anyhow::Error>) {
    let raw = dom::by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    match raw {
        None => (StorefrontConfig::default(), None),
        Some(text) => match StorefrontConfig::from_json(&text) {
            Ok(config) => (config, None),
            Err(err) => (StorefrontConfig::default(), Some(err)),
        },
    }
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Page content first: brand strip and product grid feed the observers.
    if let Some(brands) = &els.brands {
        ticker::init(brands);
    }
    shop::init(&els);
    reveal::init()?;
    if !els.timer_slots.is_empty() {
        countdown::init(els.timer_slots.clone());
    }

    if let Some(hero) = &els.carousel {
        carousel::init(hero)?;
    }

    profile::refresh(&els);
    profile::bind(&els);
    auth::init(&els);
    events::bind_events(&els);

    tracing::info!(
        route = ?auth::current_route(),
        signed_in = state::session().is_signed_in(),
        "storefront ready"
    );
    Ok(())
}
