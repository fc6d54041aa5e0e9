//! Wishlist and cart counters.

use crate::catalog::{self, Product};
use crate::toast::{Toast, ToastKind};

/// Per-button wishlist flag. The frontend rebuilds it from the button's
/// `active` class and writes the result back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WishlistControl {
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

impl WishlistChange {
    pub fn toast(self) -> Toast {
        match self {
            WishlistChange::Added => Toast::new("Added to Wishlist \u{2665}", ToastKind::Wishlist),
            WishlistChange::Removed => Toast::success("Removed from Wishlist"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Badges {
    pub wishlist: bool,
    pub cart: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ShopCounters {
    wishlist: u32,
    cart: u32,
}

impl ShopCounters {
    pub fn wishlist(&self) -> u32 {
        self.wishlist
    }

    pub fn cart(&self) -> u32 {
        self.cart
    }

    pub fn toggle_wishlist(&mut self, control: &mut WishlistControl) -> WishlistChange {
        control.active = !control.active;
        if control.active {
            self.wishlist += 1;
            WishlistChange::Added
        } else {
            self.wishlist = self.wishlist.saturating_sub(1);
            WishlistChange::Removed
        }
    }

    /// Counts every call; there is no per-product quantity.
    pub fn add_to_cart(&mut self, product_id: u32) -> Option<Toast> {
        self.cart += 1;
        catalog::find_product(product_id).map(cart_toast)
    }

    pub fn badges(&self) -> Badges {
        Badges {
            wishlist: self.wishlist > 0,
            cart: self.cart > 0,
        }
    }
}

fn cart_toast(product: &Product) -> Toast {
    Toast::success(format!("\"{}\" added to cart \u{2713}", product.name))
}

pub fn details_toast(product_id: u32) -> Option<Toast> {
    catalog::find_product(product_id).map(|p| Toast::success(format!("Viewing: {}", p.name)))
}
