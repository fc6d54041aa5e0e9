//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Each field is a component object from `lm-storefront-core`; callbacks go
//! through its operations and never poke at raw counters or indices.

use lm_session::{KeyValueStore, NoopStore, SessionCache};
use lm_storefront_core::StorefrontConfig;
use lm_storefront_core::carousel::Carousel;
use lm_storefront_core::drawer::AuthDrawer;
use lm_storefront_core::reveal::RevealLedger;
use lm_storefront_core::shop::ShopCounters;
use lm_storefront_core::ticker::BrandTicker;
use std::cell::RefCell;
use std::rc::Rc;

/// Central application state.
#[derive(Default)]
pub struct AppState {
    pub config: StorefrontConfig,
    pub carousel: Option<Carousel>,
    pub ticker: Option<BrandTicker>,
    pub counters: ShopCounters,
    pub drawer: AuthDrawer,
    pub sections: RevealLedger,
    pub cards: RevealLedger,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn config() -> StorefrontConfig {
    with(|s| s.config.clone())
}

pub fn set_config(config: StorefrontConfig) {
    with_mut(|s| s.config = config);
}

// ── localStorage ──

/// `window.localStorage` as a [`KeyValueStore`].
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| anyhow::anyhow!("localStorage.getItem failed: {e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("localStorage.setItem failed: {e:?}"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| anyhow::anyhow!("localStorage.removeItem failed: {e:?}"))
    }
}

thread_local! {
    static SESSION: SessionCache = SessionCache::new(open_store());
}

fn open_store() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Some(store) => Rc::new(store),
        None => {
            tracing::warn!("localStorage unavailable, sessions will not persist");
            Rc::new(NoopStore)
        }
    }
}

pub fn session() -> SessionCache {
    SESSION.with(|s| s.clone())
}
