//! Browser-independent storefront components.
//!
//! Each module owns one piece of page state and exposes only the operations
//! the page needs. The wasm frontend renders their outputs onto the DOM.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod countdown;
pub mod drawer;
pub mod layout;
pub mod markup;
pub mod profile;
pub mod reveal;
pub mod routes;
pub mod shop;
pub mod ticker;
pub mod toast;

pub use config::StorefrontConfig;
