//! Product grid, wishlist/cart buttons and header badges.

use crate::dom::{self, Elements};
use crate::{state, toast};
use gloo_timers::callback::Timeout;
use lm_storefront_core::catalog::{self, PRODUCTS};
use lm_storefront_core::shop::{self, WishlistControl};
use web_sys::{Element, MouseEvent};

pub fn render_grid(grid: &Element) {
    let asset_base = state::with(|s| s.config.asset_base.clone());
    grid.set_inner_html(&catalog::product_grid(PRODUCTS, &asset_base));
}

pub fn update_badges(els: &Elements) {
    let (badges, wishlist, cart) =
        state::with(|s| (s.counters.badges(), s.counters.wishlist(), s.counters.cart()));
    tracing::debug!(wishlist, cart, "badges updated");
    if let Some(el) = &els.wishlist_badge {
        dom::toggle_class(el, "active", badges.wishlist);
    }
    if let Some(el) = &els.cart_badge {
        dom::toggle_class(el, "active", badges.cart);
    }
}

fn toggle_wishlist(els: &Elements, button: &Element) {
    let mut control = WishlistControl {
        active: dom::has_class(button, "active"),
    };
    let change = state::with_mut(|s| s.counters.toggle_wishlist(&mut control));

    dom::toggle_class(button, "active", control.active);
    let (background, color) = if control.active {
        ("#ff0000", "white")
    } else {
        ("white", "#ff0000")
    };
    dom::set_style(button, "background", background);
    dom::set_style(button, "color", color);

    update_badges(els);
    toast::show(&change.toast());
}

fn add_to_cart(els: &Elements, button: &Element, product_id: u32) {
    let added = state::with_mut(|s| s.counters.add_to_cart(product_id));

    dom::set_style(button, "transform", "scale(0.85) rotate(10deg)");
    let pulsed = button.clone();
    Timeout::new(state::config().cart_pulse_ms, move || {
        dom::set_style(&pulsed, "transform", "");
    })
    .forget();

    update_badges(els);
    if let Some(t) = added {
        toast::show(&t);
    }
}

fn show_details(product_id: u32) {
    if let Some(t) = shop::details_toast(product_id) {
        toast::show(&t);
    }
}

/// One delegated click listener for every card button in the grid.
pub fn bind(els: &Elements, grid: &Element) {
    let els2 = els.clone();
    dom::listen(grid, "click", move |e: MouseEvent| {
        let Some(target) = e.target() else { return };
        let Some((button, action)) = dom::closest_with_attr(&target, "data-action") else {
            return;
        };
        let Some(product_id) = button
            .get_attribute("data-product-id")
            .and_then(|v| v.parse::<u32>().ok())
        else {
            tracing::debug!(%action, "card button without product id");
            return;
        };
        match action.as_str() {
            "wishlist" => toggle_wishlist(&els2, &button),
            "cart" => add_to_cart(&els2, &button, product_id),
            "details" => show_details(product_id),
            other => tracing::debug!(action = other, "unknown card action"),
        }
    });
}

pub fn init(els: &Elements) {
    if let Some(grid) = &els.products_grid {
        render_grid(grid);
        bind(els, grid);
    }
    update_badges(els);
}
