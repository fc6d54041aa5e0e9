//! Toast notifications: a fixed stack in the bottom-right corner.

use crate::{dom, state};
use gloo_timers::callback::Timeout;
use lm_storefront_core::toast::{Toast, ToastKind};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const CONTAINER_ID: &str = "toast-container";

const CONTAINER_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; z-index: 9999; \
     display: flex; flex-direction: column; gap: 10px;";

thread_local! {
    static CONTAINER: RefCell<Option<Element>> = const { RefCell::new(None) };
}

fn toast_style(kind: ToastKind) -> String {
    format!(
        "background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(10px); \
         padding: 12px 20px; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.1); \
         color: #333; font-weight: 600; display: flex; align-items: center; gap: 10px; \
         transform: translateX(120%); \
         transition: all 0.5s cubic-bezier(0.68, -0.55, 0.265, 1.55); \
         border-left: 4px solid {};",
        kind.accent()
    )
}

fn icon_style(kind: ToastKind) -> String {
    format!(
        "background: {}; color: white; width: 22px; height: 22px; border-radius: 50%; \
         display: flex; align-items: center; justify-content: center; font-size: 12px;",
        kind.accent()
    )
}

/// The shared container, created on first use.
fn container() -> Result<Element, JsValue> {
    if let Some(el) = CONTAINER.with(|c| c.borrow().clone()) {
        return Ok(el);
    }
    let el = match dom::by_id(CONTAINER_ID) {
        Some(el) => el,
        None => {
            let el = dom::create_element("div")?;
            el.set_id(CONTAINER_ID);
            el.set_attribute("style", CONTAINER_STYLE)?;
            dom::document()
                .body()
                .ok_or_else(|| JsValue::from_str("missing <body>"))?
                .append_child(&el)?;
            el
        }
    };
    CONTAINER.with(|c| *c.borrow_mut() = Some(el.clone()));
    Ok(el)
}

pub fn show(toast: &Toast) {
    if let Err(e) = try_show(toast) {
        tracing::warn!("toast not shown: {e:?}");
    }
}

fn try_show(toast: &Toast) -> Result<(), JsValue> {
    let config = state::config();

    let el = dom::create_element("div")?;
    el.set_class_name(&format!("toast {}", toast.kind.class_name()));
    el.set_attribute("style", &toast_style(toast.kind))?;

    let icon = dom::create_element("span")?;
    icon.set_attribute("style", &icon_style(toast.kind))?;
    icon.set_text_content(Some(toast.kind.icon()));
    let text = dom::create_element("span")?;
    text.set_text_content(Some(&toast.message));
    el.append_child(&icon)?;
    el.append_child(&text)?;
    container()?.append_child(&el)?;

    let entering = el.clone();
    let slide_in = Closure::once_into_js(move || {
        dom::set_style(&entering, "transform", "translateX(0)");
    });
    dom::window().request_animation_frame(slide_in.unchecked_ref())?;

    let exit_ms = config.toast_exit_ms;
    Timeout::new(config.toast_duration_ms, move || {
        dom::set_style(&el, "transform", "translateX(140%)");
        dom::set_style(&el, "opacity", "0");
        Timeout::new(exit_ms, move || el.remove()).forget();
    })
    .forget();
    Ok(())
}
