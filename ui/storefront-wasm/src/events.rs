//! Page-wide event binding.
//!
//! Markup declares intent with data attributes and one delegated listener on
//! the document dispatches them:
//!
//! - `data-auth-action="open" | "close" | "logout"`
//! - `data-auth-mode="login" | "signup" | "profile"`
//! - `data-toggle-password="<input id>"`
//!
//! The header search box reports its query on Enter.

use crate::dom::{self, Elements};
use crate::{auth, toast};
use lm_storefront_core::drawer::AuthForm;
use lm_storefront_core::toast::Toast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, MouseEvent};

/// Flip the input between `password` and `text` and swap the eye icon.
fn toggle_password(input_id: &str, icon: &Element) {
    let Some(input) = dom::by_id_typed::<HtmlInputElement>(input_id) else {
        tracing::debug!(input_id, "password toggle without input");
        return;
    };
    let reveal = input.type_() == "password";
    input.set_type(if reveal { "text" } else { "password" });

    // The control may be the icon itself or wrap it.
    let icon = dom::query_all_within(icon, ".fa-eye, .fa-eye-slash")
        .into_iter()
        .next()
        .unwrap_or_else(|| icon.clone());
    dom::toggle_class(&icon, "fa-eye", !reveal);
    dom::toggle_class(&icon, "fa-eye-slash", reveal);
}

fn on_document_click(els: &Elements, e: &MouseEvent) {
    let Some(target) = e.target() else { return };

    if let Some((_, action)) = dom::closest_with_attr(&target, "data-auth-action") {
        e.prevent_default();
        match action.as_str() {
            "open" => auth::open_drawer(els),
            "close" => auth::close_drawer(els),
            "logout" => auth::logout(els),
            other => tracing::debug!(action = other, "unknown auth action"),
        }
        return;
    }

    if let Some((_, mode)) = dom::closest_with_attr(&target, "data-auth-mode") {
        e.prevent_default();
        auth::switch_mode(els, AuthForm::from_name(&mode));
        return;
    }

    if let Some((control, input_id)) = dom::closest_with_attr(&target, "data-toggle-password") {
        toggle_password(&input_id, &control);
    }
}

fn bind_search(els: &Elements) {
    let Some(input) = els.search_input.clone() else {
        return;
    };
    let source = input.clone();
    dom::listen(&source, "keypress", move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            toast::show(&Toast::info(format!("Search functionality: {}", input.value())));
        }
    });
}

/// Bind all page-wide listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    let els2 = els.clone();
    dom::listen(&dom::document(), "click", move |e: MouseEvent| {
        on_document_click(&els2, &e);
    });
    bind_search(els);
}

