//! Session cache over a key-value store

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::session::WidgetSession;

/// Prefix of every cache key the widget writes
pub const CACHE_KEY_PREFIX: &str = "chat-ai-widget@";

/// Minimal key-value storage the cache persists to (browser storage, a file,
/// or memory)
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    fn keys(&self) -> Vec<String>;
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Cache key for one application/bot pair
pub fn cache_key(app_id: &str, bot_id: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{app_id}/{bot_id}")
}

/// Widget sessions persisted as JSON, one per application/bot pair
#[derive(Debug)]
pub struct SessionCache<S> {
    store: S,
}

impl<S: SessionStore> SessionCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Cached session, or `None` when absent or unreadable
    pub fn load(&self, app_id: &str, bot_id: &str) -> Option<WidgetSession> {
        let key = cache_key(app_id, bot_id);
        let raw = self.store.get(&key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(%key, error = %err, "ignoring unreadable widget session cache");
                None
            }
        }
    }

    pub fn save(&mut self, app_id: &str, bot_id: &str, session: &WidgetSession) -> Result<()> {
        let key = cache_key(app_id, bot_id);
        let raw = serde_json::to_string(session)?;
        self.store.set(&key, raw);
        tracing::debug!(%key, strategy = ?session.strategy, "saved widget session cache");
        Ok(())
    }

    pub fn clear(&mut self, app_id: &str, bot_id: &str) {
        self.store.remove(&cache_key(app_id, bot_id));
    }

    /// Remove every widget session, leaving unrelated keys alone
    pub fn clear_all(&mut self) {
        for key in self.store.keys() {
            if key.starts_with(CACHE_KEY_PREFIX) {
                self.store.remove(&key);
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
