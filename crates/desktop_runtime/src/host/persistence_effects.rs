use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{components::DesktopRuntimeContext, host::DesktopHostContext, persistence};

pub(super) fn persist_desktop_prefs(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let prefs = runtime.state.get_untracked().prefs;
    spawn_local(async move {
        let store = host.prefs_store();
        if let Err(err) = persistence::persist_desktop_prefs(store.as_ref(), &prefs).await {
            logging::warn!("persist desktop prefs failed: {err}");
        }
    });
}

pub(super) fn persist_power_state(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let is_shut_down = runtime.state.get_untracked().power.is_shut_down;
    spawn_local(async move {
        let store = host.prefs_store();
        if let Err(err) = persistence::persist_power_state(store.as_ref(), is_shut_down).await {
            logging::warn!("persist power state failed: {err}");
        }
    });
}
