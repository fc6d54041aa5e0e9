//! Brand strip: renders the tripled brand list and scrolls it every frame.

use crate::dom::{self, BrandElements};
use crate::state;
use gloo_timers::callback::Timeout;
use lm_storefront_core::catalog::{self, BRANDS};
use lm_storefront_core::layout;
use lm_storefront_core::ticker::BrandTicker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement};

pub fn init(els: &BrandElements) {
    let config = state::config();
    els.track
        .set_inner_html(&catalog::brand_track(BRANDS, &config.asset_base));
    update_brands_per_view(&els.track);

    let track = els.track.clone();
    dom::listen(&dom::window(), "resize", move |_: Event| {
        update_brands_per_view(&track);
    });

    dom::listen(&els.container, "mouseenter", |_: Event| set_paused(true));
    dom::listen(&els.container, "mouseleave", |_: Event| set_paused(false));

    let track = els.track.clone();
    Timeout::new(config.ticker_start_delay_ms, move || {
        if track.child_element_count() == 0 {
            tracing::debug!("brand track empty, not scrolling");
            return;
        }
        state::with_mut(|s| {
            s.ticker = Some(BrandTicker::new(
                BRANDS.len(),
                config.ticker_step_px,
                config.ticker_gap_px,
            ));
        });
        start_loop(track);
    })
    .forget();
}

fn update_brands_per_view(track: &Element) {
    let width = dom::window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let per_view = layout::brands_per_view(width);
    dom::set_style(track, "--brands-per-view", &per_view.to_string());
}

fn set_paused(paused: bool) {
    state::with_mut(|s| {
        if let Some(ticker) = s.ticker.as_mut() {
            ticker.set_paused(paused);
        }
    });
}

fn card_width(track: &Element) -> f64 {
    track
        .first_element_child()
        .and_then(|c| c.dyn_into::<HtmlElement>().ok())
        .map(|c| f64::from(c.offset_width()))
        .unwrap_or(0.0)
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Err(e) = dom::window().request_animation_frame(cb.as_ref().unchecked_ref()) {
        tracing::warn!("animation frame refused: {e:?}");
    }
}

fn start_loop(track: Element) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let width = card_width(&track);
        let transform = state::with_mut(|s| {
            s.ticker.as_mut().map(|t| {
                t.tick(width);
                t.transform()
            })
        });
        if let Some(transform) = transform {
            dom::set_style(&track, "transform", &transform);
        }
        if let Some(cb) = f.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        request_frame(cb);
    }
}
