//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches storage, timers, image loading or the
//! browser window goes through [`DesktopHostContext`], which wraps the injected
//! [`HostServices`] bundle.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{AssetPreloadService, ExternalUrlService, HostServices, PrefsStore};

use crate::{components::DesktopRuntimeContext, reducer::DesktopAction, reducer::RuntimeEffect};

pub(crate) use host_ui::{desktop_viewport_size, ViewportSize};

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the host bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the boot-time asset preload and timer service.
    pub fn asset_preload_service(&self) -> Rc<dyn AssetPreloadService> {
        self.services.assets.clone()
    }

    /// Loads persisted preferences and the power flag, then boots unless the system was left
    /// shut down.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistDesktopPrefs => {
                persistence_effects::persist_desktop_prefs(self.clone(), runtime)
            }
            RuntimeEffect::PersistPowerState => {
                persistence_effects::persist_power_state(self.clone(), runtime)
            }
            RuntimeEffect::RunBootSequence => boot::spawn_boot_sequence(self.clone(), runtime),
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(self.clone(), &url),
        }
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("services", &self.services)
            .finish()
    }
}
