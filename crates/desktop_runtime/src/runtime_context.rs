//! The [`DesktopProvider`] owns the reducer state, queues reducer effects and drains them
//! through the host. Shell views live in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::{bundled_media_catalog, HostServices, MediaCatalog};

use crate::{
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Handle for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Storage, timer and link services.
    pub host: StoredValue<DesktopHostContext>,
    /// Windows, preferences, power and tray state.
    pub state: RwSignal<DesktopState>,
    /// Window drag state.
    pub interaction: RwSignal<InteractionState>,
    /// Effects waiting for the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Bundled media handed to the file, music, video and photo apps.
    pub media: StoredValue<MediaCatalog>,
    /// Reducer entry point.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Sends `action` through the reducer.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// State that changed while reducing one action.
#[derive(Debug, Default, PartialEq)]
struct Commit {
    desktop: Option<DesktopState>,
    interaction: Option<InteractionState>,
    effects: Vec<RuntimeEffect>,
}

/// Reduces `action` against copies of the current state, keeping only what changed so
/// unchanged signals do not notify subscribers.
fn reduce_into_commit(
    desktop: &DesktopState,
    interaction: &InteractionState,
    action: DesktopAction,
) -> Result<Commit, ReducerError> {
    let mut next_desktop = desktop.clone();
    let mut next_interaction = interaction.clone();
    let effects = reduce_desktop(&mut next_desktop, &mut next_interaction, action)?;
    Ok(Commit {
        desktop: (next_desktop != *desktop).then_some(next_desktop),
        interaction: (next_interaction != *interaction).then_some(next_interaction),
        effects,
    })
}

fn load_media_catalog() -> MediaCatalog {
    bundled_media_catalog().unwrap_or_else(|err| {
        logging::warn!("bundled media catalog unreadable: {err}");
        MediaCatalog::default()
    })
}

/// Runs queued effects in order. The queue is emptied first so effects that dispatch land in
/// the next batch.
fn drain_effects(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to the shell and starts boot hydration.
pub fn DesktopProvider(
    /// Browser services assembled by the entry crate.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let media = store_value(load_media_catalog());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let commit = state.with_untracked(|desktop| {
            interaction.with_untracked(|ui| reduce_into_commit(desktop, ui, action))
        });
        match commit {
            Ok(commit) => {
                if let Some(desktop) = commit.desktop {
                    state.set(desktop);
                }
                if let Some(ui) = commit.interaction {
                    interaction.set(ui);
                }
                if !commit.effects.is_empty() {
                    effects.update(|queue| queue.extend(commit.effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        media,
        dispatch,
    };
    provide_context(runtime.clone());

    host.get_value().install_boot_hydration(dispatch);
    drain_effects(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
