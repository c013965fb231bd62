use futures::join;
use leptos::{create_effect, logging, spawn_local, Callable, Callback, SignalGetUntracked};
use platform_host::AssetPreloadService;

use crate::{
    components::DesktopRuntimeContext, host::DesktopHostContext, persistence,
    reducer::DesktopAction,
};

pub(crate) const BOOT_MIN_DURATION_MS: u32 = 3_000;

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            hydrate_and_boot(&host, |action| dispatch.call(action)).await;
        });
    });
}

pub(super) fn spawn_boot_sequence(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let wallpaper = runtime.state.get_untracked().prefs.wallpaper;
    spawn_local(async move {
        run_boot_sequence(host.asset_preload_service().as_ref(), &wallpaper).await;
        runtime.dispatch_action(DesktopAction::BootComplete);
    });
}

async fn hydrate_and_boot(host: &DesktopHostContext, mut dispatch: impl FnMut(DesktopAction)) {
    let store = host.prefs_store();
    let prefs = persistence::load_desktop_prefs(store.as_ref()).await;
    let wallpaper = prefs.as_ref().map(|prefs| prefs.wallpaper.clone());
    if let Some(prefs) = prefs {
        dispatch(DesktopAction::HydrateDesktopPrefs { prefs });
    }

    let is_shut_down = persistence::load_power_state(store.as_ref())
        .await
        .unwrap_or(false);
    if is_shut_down {
        dispatch(DesktopAction::HydratePowerState { is_shut_down });
        return;
    }

    let wallpaper = wallpaper.unwrap_or_else(|| crate::model::DEFAULT_WALLPAPER.to_string());
    run_boot_sequence(host.asset_preload_service().as_ref(), &wallpaper).await;
    dispatch(DesktopAction::BootComplete);
}

/// Waits for both the minimum boot duration and the wallpaper preload. A failed preload is
/// logged and does not hold up the boot.
async fn run_boot_sequence(assets: &dyn AssetPreloadService, wallpaper: &str) {
    let (_, preload) = join!(
        assets.sleep_ms(BOOT_MIN_DURATION_MS),
        assets.preload_image(wallpaper)
    );
    if let Err(err) = preload {
        logging::warn!("wallpaper preload failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use futures::executor::block_on;
    use platform_host::{
        AssetPreloadFuture, HostServices, MemoryPrefsStore, NoopExternalUrlService, PrefsStore,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{DesktopPrefs, IconSize},
        persistence::{DESKTOP_PREFS_KEY, POWER_STATE_KEY},
    };

    #[derive(Clone, Default)]
    struct RecordingAssets {
        calls: Rc<RefCell<Vec<String>>>,
        fail_preload: bool,
    }

    impl AssetPreloadService for RecordingAssets {
        fn preload_image<'a>(
            &'a self,
            url: &'a str,
        ) -> AssetPreloadFuture<'a, Result<(), String>> {
            Box::pin(async move {
                self.calls.borrow_mut().push(format!("preload {url}"));
                if self.fail_preload {
                    Err("decode failed".to_string())
                } else {
                    Ok(())
                }
            })
        }

        fn sleep_ms<'a>(&'a self, ms: u32) -> AssetPreloadFuture<'a, ()> {
            Box::pin(async move {
                self.calls.borrow_mut().push(format!("sleep {ms}"));
            })
        }
    }

    fn host(prefs: MemoryPrefsStore, assets: RecordingAssets) -> DesktopHostContext {
        DesktopHostContext::new(HostServices {
            prefs: Rc::new(prefs),
            external_urls: Rc::new(NoopExternalUrlService),
            assets: Rc::new(assets),
        })
    }

    fn collect(host: &DesktopHostContext) -> Vec<DesktopAction> {
        let mut actions = Vec::new();
        block_on(hydrate_and_boot(host, |action| actions.push(action)));
        actions
    }

    #[test]
    fn boot_waits_for_minimum_and_wallpaper_preload() {
        let assets = RecordingAssets::default();
        block_on(run_boot_sequence(&assets, "/assets/images/quiet-lake.jpg"));
        let mut calls = assets.calls.borrow().clone();
        calls.sort();
        assert_eq!(
            calls,
            vec![
                "preload /assets/images/quiet-lake.jpg".to_string(),
                "sleep 3000".to_string()
            ]
        );
    }

    #[test]
    fn fresh_storage_boots_with_default_wallpaper() {
        let assets = RecordingAssets::default();
        let host = host(MemoryPrefsStore::default(), assets.clone());

        assert_eq!(collect(&host), vec![DesktopAction::BootComplete]);
        assert!(assets
            .calls
            .borrow()
            .contains(&format!("preload {}", crate::model::DEFAULT_WALLPAPER)));
    }

    #[test]
    fn saved_prefs_hydrate_before_boot_completes() {
        let store = MemoryPrefsStore::default();
        let prefs = DesktopPrefs {
            wallpaper: "/assets/images/neon-alley.png".to_string(),
            icon_size: IconSize::Large,
            ..DesktopPrefs::default()
        };
        block_on(store.save_pref(
            DESKTOP_PREFS_KEY,
            &serde_json::to_string(&prefs).expect("serialize"),
        ))
        .expect("seed");
        let assets = RecordingAssets {
            fail_preload: true,
            ..RecordingAssets::default()
        };
        let host = host(store, assets.clone());

        assert_eq!(
            collect(&host),
            vec![
                DesktopAction::HydrateDesktopPrefs { prefs },
                DesktopAction::BootComplete
            ]
        );
        assert!(assets
            .calls
            .borrow()
            .contains(&"preload /assets/images/neon-alley.png".to_string()));
    }

    #[test]
    fn shut_down_flag_skips_the_boot_sequence() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(POWER_STATE_KEY, "true")).expect("seed");
        let assets = RecordingAssets::default();
        let host = host(store, assets.clone());

        assert_eq!(
            collect(&host),
            vec![DesktopAction::HydratePowerState { is_shut_down: true }]
        );
        assert!(assets.calls.borrow().is_empty());
    }
}
