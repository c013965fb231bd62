//! Key/value preference storage used for desktop settings and the power flag.
//!
//! Values are stored as JSON text under a string key. The typed helpers at the bottom of this
//! module are what the runtime actually calls.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads the raw JSON text stored under `key`, if any.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the raw JSON text stored under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never remembers anything. Used off-browser and as a baseline in tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store shared by clones.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw text stored under `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("pref `{key}`: {e}"))?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| format!("pref `{key}`: {e}"))?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct IconPrefs {
        icon_size: String,
        layout_version: u32,
    }

    #[test]
    fn memory_store_keeps_the_latest_raw_text() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("desktop", "{\"k\":1}")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("desktop")).expect("load"),
            Some("{\"k\":1}".to_string())
        );
        block_on(store_obj.save_pref("desktop", "{\"k\":2}")).expect("overwrite");
        assert_eq!(store.raw("desktop"), Some("{\"k\":2}".to_string()));
    }

    #[test]
    fn clones_share_the_same_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        block_on(store.save_pref("power", "true")).expect("save");
        assert_eq!(other.raw("power"), Some("true".to_string()));
    }

    #[test]
    fn typed_helpers_use_json_text() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(
            &store,
            "desktop",
            &IconPrefs {
                icon_size: "large".to_string(),
                layout_version: 2,
            },
        ))
        .expect("save typed pref");
        assert_eq!(
            store.raw("desktop"),
            Some("{\"iconSize\":\"large\",\"layoutVersion\":2}".to_string())
        );

        let loaded: Option<IconPrefs> =
            block_on(load_pref_with(&store, "desktop")).expect("load typed pref");
        assert_eq!(
            loaded,
            Some(IconPrefs {
                icon_size: "large".to_string(),
                layout_version: 2,
            })
        );
    }

    #[test]
    fn typed_load_reports_malformed_json_with_key() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("desktop", "{not json")).expect("save");
        let err = block_on(load_pref_with::<_, IconPrefs>(&store, "desktop"))
            .expect_err("malformed payload");
        assert!(err.starts_with("pref `desktop`:"), "{err}");
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "{}")).expect("save");
    }
}
