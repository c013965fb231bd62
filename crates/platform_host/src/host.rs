//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    AssetPreloadService, ExternalUrlService, NoopAssetPreloadService, NoopExternalUrlService,
    NoopPrefsStore, PrefsStore,
};

/// Runtime-selected host service bundle.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates free of browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Boot-time asset preloading and timers.
    pub assets: Rc<dyn AssetPreloadService>,
}

impl HostServices {
    /// Bundle of no-op services.
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            external_urls: Rc::new(NoopExternalUrlService),
            assets: Rc::new(NoopAssetPreloadService),
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
