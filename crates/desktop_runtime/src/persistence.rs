//! Desktop runtime persistence adapters for boot hydration and lightweight local preferences.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::model::DesktopPrefs;

pub const DESKTOP_PREFS_KEY: &str = "windows-12-desktop-state";
pub const POWER_STATE_KEY: &str = "windows-12-is-shutdown";

/// Loads the persisted desktop preferences.
///
/// Missing or malformed payloads yield `None` so the caller keeps the defaults.
pub async fn load_desktop_prefs(store: &dyn PrefsStore) -> Option<DesktopPrefs> {
    match load_pref_with::<_, DesktopPrefs>(store, DESKTOP_PREFS_KEY).await {
        Ok(prefs) => prefs,
        Err(err) => {
            logging::warn!("desktop prefs load failed: {err}");
            None
        }
    }
}

/// Persists the desktop preferences.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn persist_desktop_prefs(
    store: &dyn PrefsStore,
    prefs: &DesktopPrefs,
) -> Result<(), String> {
    save_pref_with(store, DESKTOP_PREFS_KEY, prefs).await
}

/// Loads the persisted shut-down flag.
pub async fn load_power_state(store: &dyn PrefsStore) -> Option<bool> {
    match load_pref_with::<_, bool>(store, POWER_STATE_KEY).await {
        Ok(is_shut_down) => is_shut_down,
        Err(err) => {
            logging::warn!("power state load failed: {err}");
            None
        }
    }
}

/// Persists the shut-down flag as a JSON boolean.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn persist_power_state(store: &dyn PrefsStore, is_shut_down: bool) -> Result<(), String> {
    save_pref_with(store, POWER_STATE_KEY, &is_shut_down).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{IconSize, SortOrder};

    #[test]
    fn desktop_prefs_round_trip_through_the_store() {
        let store = MemoryPrefsStore::default();
        let prefs = DesktopPrefs {
            wallpaper: "/assets/images/aurora-ridge.jpg".to_string(),
            icon_size: IconSize::Small,
            sort_order: SortOrder::NameAsc,
            layout_version: 7,
        };

        block_on(persist_desktop_prefs(&store, &prefs)).expect("persist");
        assert_eq!(
            store.raw(DESKTOP_PREFS_KEY).as_deref(),
            Some(
                r#"{"wallpaper":"/assets/images/aurora-ridge.jpg","iconSize":"small","sortOrder":"name-asc","layoutVersion":7}"#
            )
        );
        assert_eq!(block_on(load_desktop_prefs(&store)), Some(prefs));
    }

    #[test]
    fn malformed_desktop_prefs_fall_back_to_none() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(DESKTOP_PREFS_KEY, "{\"iconSize\":")).expect("seed");
        assert_eq!(block_on(load_desktop_prefs(&store)), None);
    }

    #[test]
    fn power_flag_is_a_json_boolean() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_power_state(&store)), None);

        block_on(persist_power_state(&store, true)).expect("persist");
        assert_eq!(store.raw(POWER_STATE_KEY).as_deref(), Some("true"));
        assert_eq!(block_on(load_power_state(&store)), Some(true));

        block_on(store.save_pref(POWER_STATE_KEY, "\"yes\"")).expect("seed");
        assert_eq!(block_on(load_power_state(&store)), None);
    }
}
