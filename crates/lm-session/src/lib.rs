use anyhow::Result;
use lm_api_types::SessionRecord;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

/// Local storage key holding the JSON-encoded signed-in user.
pub const SESSION_KEY: &str = "lomiees_current_user";

/// String key-value store with browser `localStorage` semantics.
///
/// The browser is single-threaded, so implementations take `&self` and use
/// interior mutability where they need it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Store used when the page has no usable local storage (private mode, sandboxed frames).
#[derive(Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Cache of the signed-in user's [`SessionRecord`].
///
/// Reads never fail: a missing key, an unreadable store, malformed JSON and a
/// record with a blank username all mean "guest".
#[derive(Clone)]
pub struct SessionCache {
    store: Rc<dyn KeyValueStore>,
}

impl SessionCache {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<SessionRecord> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("session store read failed: {err}");
                return None;
            }
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) if !record.username.trim().is_empty() => Some(record),
            Ok(_) => {
                warn!("stored session has a blank username, treating as guest");
                None
            }
            Err(err) => {
                warn!("stored session is not valid JSON, treating as guest: {err}");
                None
            }
        }
    }

    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let value = serde_json::to_string(record)?;
        self.store.set(SESSION_KEY, &value)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)
    }

    pub fn is_signed_in(&self) -> bool {
        self.load().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(store: Rc<InMemoryStore>) -> SessionCache {
        SessionCache::new(store)
    }

    #[test]
    fn save_then_load_roundtrip() -> Result<()> {
        let store = Rc::new(InMemoryStore::default());
        let cache = cache_with(store.clone());
        let record = SessionRecord::new("ana", "ana@x.com").expect("valid record");

        cache.save(&record)?;
        assert_eq!(cache.load(), Some(record));
        assert_eq!(
            store.raw(SESSION_KEY).as_deref(),
            Some(r#"{"username":"ana","email":"ana@x.com"}"#)
        );
        Ok(())
    }

    #[test]
    fn clear_then_load_is_guest() -> Result<()> {
        let cache = cache_with(Rc::new(InMemoryStore::default()));
        let record = SessionRecord::new("ana", "ana@x.com").expect("valid record");

        cache.save(&record)?;
        cache.clear()?;
        assert_eq!(cache.load(), None);
        assert!(!cache.is_signed_in());
        Ok(())
    }

    #[test]
    fn malformed_json_is_guest() -> Result<()> {
        let store = Rc::new(InMemoryStore::default());
        store.set(SESSION_KEY, "{not json")?;
        assert_eq!(cache_with(store).load(), None);
        Ok(())
    }

    #[test]
    fn blank_username_is_guest() -> Result<()> {
        let store = Rc::new(InMemoryStore::default());
        store.set(SESSION_KEY, r#"{"username":"","email":"a@b.c"}"#)?;
        assert_eq!(cache_with(store).load(), None);
        Ok(())
    }

    #[test]
    fn missing_email_defaults_to_empty() -> Result<()> {
        let store = Rc::new(InMemoryStore::default());
        store.set(SESSION_KEY, r#"{"username":"ana"}"#)?;
        let loaded = cache_with(store).load().expect("session present");
        assert_eq!(loaded.email, "");
        Ok(())
    }

    #[test]
    fn noop_store_never_remembers() -> Result<()> {
        let cache = SessionCache::new(Rc::new(NoopStore));
        let record = SessionRecord::new("ana", "ana@x.com").expect("valid record");
        cache.save(&record)?;
        assert_eq!(cache.load(), None);
        Ok(())
    }
}
