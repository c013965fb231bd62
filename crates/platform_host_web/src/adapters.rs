use std::rc::Rc;

use platform_host::HostServices;

use crate::{WebAssetPreloadService, WebExternalUrlService, WebPrefsStore};

/// Builds the `localStorage` preference adapter.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Builds the `window.open` external-URL adapter.
pub fn external_url_service() -> WebExternalUrlService {
    WebExternalUrlService
}

/// Builds the image-decode preload adapter.
pub fn asset_preload_service() -> WebAssetPreloadService {
    WebAssetPreloadService
}

/// Builds the complete browser host bundle consumed by `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        external_urls: Rc::new(external_url_service()),
        assets: Rc::new(asset_preload_service()),
    }
}
