//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppCommand, AppLaunchData, ApplicationId};
use thiserror::Error;

use crate::{
    apps,
    model::{
        BootPhase, DesktopPrefs, DesktopState, DragSession, IconSize, InteractionState,
        PointerPosition, SortOrder, WindowPosition, WindowRecord,
    },
};

pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or raise its existing window and optionally replace its payload.
    LaunchApp {
        /// App to launch.
        app_id: ApplicationId,
        /// Payload handed to the app; `None` keeps whatever the window already has.
        data: Option<AppLaunchData>,
    },
    /// Close an app window.
    CloseApp {
        /// App whose window closes.
        app_id: ApplicationId,
    },
    /// Minimize an app window.
    MinimizeApp {
        /// App whose window minimizes.
        app_id: ApplicationId,
    },
    /// Toggle maximized state and raise the window.
    MaximizeApp {
        /// App whose window toggles.
        app_id: ApplicationId,
    },
    /// Focus (and raise) an app window.
    FocusWindow {
        /// App to focus.
        app_id: ApplicationId,
    },
    /// Taskbar icon click: minimize the active window, focus an inactive one, or launch.
    ToggleTaskbarApp {
        /// App behind the taskbar icon.
        app_id: ApplicationId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Store a window drag offset.
    SetWindowPosition {
        /// App whose window moved.
        app_id: ApplicationId,
        /// New drag offset.
        position: WindowPosition,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// App whose window is dragged.
        app_id: ApplicationId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Apply a request sent by an app.
    HandleAppCommand {
        /// Command sent through the app services.
        command: AppCommand,
    },
    /// Replace the wallpaper URL.
    SetWallpaper {
        /// Image URL.
        url: String,
    },
    /// Change the desktop icon size.
    SetIconSize {
        /// New size.
        size: IconSize,
    },
    /// Change the desktop icon sort order.
    SetSortOrder {
        /// New order.
        order: SortOrder,
    },
    /// Reset every icon drag offset.
    ResetIconPositions,
    /// Restore persisted desktop preferences without persisting them again.
    HydrateDesktopPrefs {
        /// Loaded preferences.
        prefs: DesktopPrefs,
    },
    /// Close every window and power off.
    ShutDown,
    /// Power on and boot.
    TurnOn,
    /// Show or hide the shutdown confirmation dialog.
    SetShutdownConfirmOpen {
        /// Whether the dialog is open.
        open: bool,
    },
    /// Restore the persisted power flag.
    HydratePowerState {
        /// Whether the system was shut down.
        is_shut_down: bool,
    },
    /// The boot sequence finished.
    BootComplete,
    /// Set the system volume (clamped to 100).
    SetVolume {
        /// Volume in percent.
        volume: u8,
    },
    /// Toggle system mute.
    ToggleMute,
    /// Toggle the wifi radio.
    ToggleWifi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the desktop preferences.
    PersistDesktopPrefs,
    /// Persist the shut-down flag.
    PersistPowerState,
    /// Wait for the boot minimum and wallpaper preload, then dispatch [`DesktopAction::BootComplete`].
    RunBootSequence,
    /// Open a URL outside the desktop shell.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The action referenced an app without an open window.
    #[error("no open window for app `{0}`")]
    WindowNotFound(ApplicationId),
    /// The action referenced an app missing from the registry.
    #[error("unknown app `{0}`")]
    UnknownApp(ApplicationId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references an app that has no open
/// window and [`ReducerError::UnknownApp`] when a launch names an unregistered app. The state is
/// left untouched in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LaunchApp { app_id, data } => launch_app(state, app_id, data)?,
        DesktopAction::CloseApp { app_id } => {
            let index = window_index(state, &app_id)?;
            state.windows.remove(index);
            if state.active_app.as_ref() == Some(&app_id) {
                state.active_app = None;
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.app_id == app_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::MinimizeApp { app_id } => {
            find_window_mut(state, &app_id)?.minimized = true;
            if state.active_app.as_ref() == Some(&app_id) {
                state.active_app = None;
            }
        }
        DesktopAction::MaximizeApp { app_id } => {
            let window = find_window_mut(state, &app_id)?;
            window.maximized = !window.maximized;
            window.minimized = false;
            raise_window(state, &app_id)?;
            state.active_app = Some(app_id);
        }
        DesktopAction::FocusWindow { app_id } => {
            focus_window_internal(state, &app_id)?;
            state.start_menu_open = false;
        }
        DesktopAction::ToggleTaskbarApp { app_id } => {
            let visible_and_active = state
                .window(&app_id)
                .map(|window| !window.minimized && state.is_active(&app_id));
            match visible_and_active {
                Some(true) => {
                    return reduce_desktop(state, interaction, DesktopAction::MinimizeApp { app_id });
                }
                Some(false) => {
                    return reduce_desktop(state, interaction, DesktopAction::FocusWindow { app_id });
                }
                None => launch_app(state, app_id, None)?,
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SetWindowPosition { app_id, position } => {
            find_window_mut(state, &app_id)?.position = Some(position);
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = state
                .window(&app_id)
                .ok_or_else(|| ReducerError::WindowNotFound(app_id.clone()))?;
            let draggable = !window.maximized;
            let position_start = window.position.unwrap_or_default();
            focus_window_internal(state, &app_id)?;
            if draggable {
                interaction.dragging = Some(DragSession {
                    app_id,
                    pointer_start: pointer,
                    position_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, &session.app_id)?;
                if !window.maximized {
                    window.position = Some(session.position_start.offset(dx, dy));
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::HandleAppCommand { command } => match command {
            AppCommand::LaunchApp { app_id, data } => launch_app(state, app_id, data)?,
            AppCommand::SetWallpaper { url } => {
                state.prefs.wallpaper = url;
                effects.push(RuntimeEffect::PersistDesktopPrefs);
            }
            AppCommand::OpenExternalUrl { url } => {
                effects.push(RuntimeEffect::OpenExternalUrl(url));
            }
        },
        DesktopAction::SetWallpaper { url } => {
            state.prefs.wallpaper = url;
            effects.push(RuntimeEffect::PersistDesktopPrefs);
        }
        DesktopAction::SetIconSize { size } => {
            state.prefs.icon_size = size;
            effects.push(RuntimeEffect::PersistDesktopPrefs);
        }
        DesktopAction::SetSortOrder { order } => {
            state.prefs.sort_order = order;
            effects.push(RuntimeEffect::PersistDesktopPrefs);
        }
        DesktopAction::ResetIconPositions => {
            state.prefs.layout_version = state.prefs.layout_version.wrapping_add(1);
            effects.push(RuntimeEffect::PersistDesktopPrefs);
        }
        DesktopAction::HydrateDesktopPrefs { prefs } => {
            state.prefs = prefs;
        }
        DesktopAction::ShutDown => {
            state.windows.clear();
            state.active_app = None;
            state.start_menu_open = false;
            state.power.shutdown_confirm_open = false;
            state.power.is_shut_down = true;
            interaction.dragging = None;
            effects.push(RuntimeEffect::PersistPowerState);
        }
        DesktopAction::TurnOn => {
            state.power.is_shut_down = false;
            state.boot = BootPhase::Booting;
            effects.push(RuntimeEffect::PersistPowerState);
            effects.push(RuntimeEffect::RunBootSequence);
        }
        DesktopAction::SetShutdownConfirmOpen { open } => {
            state.power.shutdown_confirm_open = open;
            if open {
                state.start_menu_open = false;
            }
        }
        DesktopAction::HydratePowerState { is_shut_down } => {
            state.power.is_shut_down = is_shut_down;
        }
        DesktopAction::BootComplete => {
            // A shutdown during boot wins; the next power-on boots again.
            if !state.power.is_shut_down && state.boot == BootPhase::Booting {
                state.boot = BootPhase::Ready;
                if !state.intro_shown {
                    state.intro_shown = true;
                    launch_app(state, apps::intro_application_id(), None)?;
                }
            }
        }
        DesktopAction::SetVolume { volume } => {
            state.audio.volume = volume.min(MAX_VOLUME);
        }
        DesktopAction::ToggleMute => {
            state.audio.muted = !state.audio.muted;
        }
        DesktopAction::ToggleWifi => {
            state.network.wifi_enabled = !state.network.wifi_enabled;
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

fn launch_app(
    state: &mut DesktopState,
    app_id: ApplicationId,
    data: Option<AppLaunchData>,
) -> Result<(), ReducerError> {
    let descriptor =
        apps::app_descriptor(&app_id).ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
    match state.windows.iter_mut().find(|w| w.app_id == app_id) {
        Some(window) => {
            if data.is_some() {
                window.data = data;
            }
            window.minimized = false;
        }
        None => state.windows.push(WindowRecord {
            app_id: app_id.clone(),
            title: descriptor.title.to_string(),
            size: descriptor.size,
            position: None,
            z_index: u32::MAX,
            minimized: false,
            maximized: false,
            data,
        }),
    }
    raise_window(state, &app_id)?;
    state.active_app = Some(app_id);
    state.start_menu_open = false;
    Ok(())
}

fn window_index(state: &DesktopState, app_id: &ApplicationId) -> Result<usize, ReducerError> {
    state
        .windows
        .iter()
        .position(|w| &w.app_id == app_id)
        .ok_or_else(|| ReducerError::WindowNotFound(app_id.clone()))
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    app_id: &ApplicationId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.app_id == app_id)
        .ok_or_else(|| ReducerError::WindowNotFound(app_id.clone()))
}

fn focus_window_internal(
    state: &mut DesktopState,
    app_id: &ApplicationId,
) -> Result<(), ReducerError> {
    find_window_mut(state, app_id)?.minimized = false;
    raise_window(state, app_id)?;
    state.active_app = Some(app_id.clone());
    Ok(())
}

/// Puts the window on top of the stack. `windows` keeps its open order so mounted window
/// views (and their iframes) are never moved in the DOM.
fn raise_window(state: &mut DesktopState, app_id: &ApplicationId) -> Result<(), ReducerError> {
    find_window_mut(state, app_id)?.z_index = u32::MAX;
    normalize_window_stack(state);
    Ok(())
}

/// Re-ranks z-indices to `1..=len` in their current stacking order; ties keep open order.
fn normalize_window_stack(state: &mut DesktopState) {
    let mut ranked = (0..state.windows.len()).collect::<Vec<_>>();
    ranked.sort_by_key(|&index| state.windows[index].z_index);
    for (rank, index) in ranked.into_iter().enumerate() {
        state.windows[index].z_index = rank as u32 + 1;
    }
    let active_is_visible = state
        .active_app
        .as_ref()
        .and_then(|app_id| state.windows.iter().find(|w| &w.app_id == app_id))
        .is_some_and(|w| !w.minimized);
    if !active_is_visible {
        state.active_app = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{PowerState, WindowSize};

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn run(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("action applies")
    }

    fn launch(state: &mut DesktopState, interaction: &mut InteractionState, app: &str) {
        run(
            state,
            interaction,
            DesktopAction::LaunchApp {
                app_id: id(app),
                data: None,
            },
        );
    }

    fn stack(state: &DesktopState) -> Vec<(&str, u32)> {
        state
            .windows
            .iter()
            .map(|w| (w.app_id.as_str(), w.z_index))
            .collect()
    }

    #[test]
    fn launch_appends_window_on_top_with_registry_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.start_menu_open = true;

        launch(&mut state, &mut interaction, "about");
        launch(&mut state, &mut interaction, "files");

        assert_eq!(stack(&state), vec![("about", 1), ("files", 2)]);
        let files = state.window(&id("files")).expect("files window");
        assert_eq!(files.title, "File Manager");
        assert_eq!(files.size, WindowSize { w: 900, h: 600 });
        assert_eq!(files.position, None);
        assert_eq!(state.active_app, Some(id("files")));
        assert!(!state.start_menu_open);
    }

    #[test]
    fn relaunch_raises_existing_window_and_keeps_payload_without_new_data() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let clip = AppLaunchData::media("/assets/videos/ocean-waves.webm", "ocean-waves");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchApp {
                app_id: id("video-player"),
                data: Some(clip.clone()),
            },
        );
        launch(&mut state, &mut interaction, "browser");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: id("video-player"),
            },
        );
        launch(&mut state, &mut interaction, "video-player");

        assert_eq!(state.windows.len(), 2);
        assert_eq!(stack(&state), vec![("video-player", 2), ("browser", 1)]);
        let player = state.window(&id("video-player")).expect("player");
        assert!(!player.minimized);
        assert_eq!(player.data, Some(clip));

        let other = AppLaunchData::media("/assets/videos/city-timelapse.mp4", "city-timelapse");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchApp {
                app_id: id("video-player"),
                data: Some(other.clone()),
            },
        );
        assert_eq!(
            state.window(&id("video-player")).expect("player").data,
            Some(other)
        );
    }

    #[test]
    fn launching_unknown_app_is_rejected_without_changes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchApp {
                app_id: id("calculator"),
                data: None,
            },
        )
        .expect_err("unknown app");

        assert_eq!(err, ReducerError::UnknownApp(id("calculator")));
        assert_eq!(state, before);
    }

    #[test]
    fn window_actions_on_closed_apps_fail() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "skills");
        let before = state.clone();

        for action in [
            DesktopAction::CloseApp { app_id: id("games") },
            DesktopAction::MinimizeApp { app_id: id("games") },
            DesktopAction::MaximizeApp { app_id: id("games") },
            DesktopAction::FocusWindow { app_id: id("games") },
        ] {
            let err = reduce_desktop(&mut state, &mut interaction, action).expect_err("missing");
            assert_eq!(err, ReducerError::WindowNotFound(id("games")));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn close_and_minimize_clear_the_active_app() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "about");
        launch(&mut state, &mut interaction, "skills");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: id("skills"),
            },
        );
        assert_eq!(state.active_app, None);
        assert!(state.window(&id("skills")).expect("skills").minimized);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: id("about"),
            },
        );
        run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: id("about"),
            },
        );
        assert_eq!(state.active_app, None);
        assert_eq!(stack(&state), vec![("skills", 1)]);
    }

    #[test]
    fn closing_an_inactive_window_keeps_focus_and_renumbers_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "intro");
        launch(&mut state, &mut interaction, "about");
        launch(&mut state, &mut interaction, "games");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: id("intro"),
            },
        );
        assert_eq!(stack(&state), vec![("about", 1), ("games", 2)]);
        assert_eq!(state.active_app, Some(id("games")));
    }

    #[test]
    fn maximize_toggles_and_raises() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "projects");
        launch(&mut state, &mut interaction, "browser");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeApp {
                app_id: id("projects"),
            },
        );
        assert!(state.window(&id("projects")).expect("projects").maximized);
        assert_eq!(stack(&state), vec![("projects", 2), ("browser", 1)]);
        assert_eq!(state.active_app, Some(id("projects")));

        run(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeApp {
                app_id: id("projects"),
            },
        );
        assert!(!state.window(&id("projects")).expect("projects").maximized);
    }

    #[test]
    fn taskbar_toggle_minimizes_active_focuses_inactive_and_launches_closed() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarApp {
                app_id: id("files"),
            },
        );
        assert_eq!(state.active_app, Some(id("files")));

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarApp {
                app_id: id("files"),
            },
        );
        assert!(state.window(&id("files")).expect("files").minimized);
        assert_eq!(state.active_app, None);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarApp {
                app_id: id("files"),
            },
        );
        assert!(!state.window(&id("files")).expect("files").minimized);
        assert_eq!(state.active_app, Some(id("files")));

        launch(&mut state, &mut interaction, "about");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarApp {
                app_id: id("files"),
            },
        );
        assert_eq!(state.active_app, Some(id("files")));
        assert_eq!(stack(&state), vec![("files", 2), ("about", 1)]);
    }

    #[test]
    fn focusing_restacks_without_reordering_open_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "browser");
        launch(&mut state, &mut interaction, "files");
        launch(&mut state, &mut interaction, "music");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: id("browser"),
            },
        );
        assert_eq!(
            stack(&state),
            vec![("browser", 3), ("files", 1), ("music", 2)]
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("files"),
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(
            stack(&state),
            vec![("browser", 2), ("files", 3), ("music", 1)]
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: id("music"),
            },
        );
        assert_eq!(stack(&state), vec![("browser", 1), ("files", 2)]);
    }

    #[test]
    fn window_stack_never_grows_past_the_window_count() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "about");
        launch(&mut state, &mut interaction, "skills");
        for _ in 0..50 {
            for app in ["about", "skills"] {
                run(
                    &mut state,
                    &mut interaction,
                    DesktopAction::FocusWindow { app_id: id(app) },
                );
            }
        }
        let mut ranks = state.windows.iter().map(|w| w.z_index).collect::<Vec<_>>();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn focus_closes_start_menu_and_unminimizes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "games");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeApp {
                app_id: id("games"),
            },
        );
        run(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: id("games"),
            },
        );
        assert!(!state.start_menu_open);
        assert!(!state.window(&id("games")).expect("games").minimized);
        assert_eq!(state.active_app, Some(id("games")));
    }

    #[test]
    fn dragging_offsets_from_default_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "about");
        launch(&mut state, &mut interaction, "skills");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("about"),
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(state.active_app, Some(id("about")));
        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: -20 },
            },
        );
        assert_eq!(
            state.window(&id("about")).expect("about").position,
            Some(WindowPosition { x: 75, y: 20 })
        );

        run(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        assert_eq!(
            state.window(&id("about")).expect("about").position,
            Some(WindowPosition { x: 75, y: 20 })
        );
    }

    #[test]
    fn maximized_windows_do_not_start_a_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "browser");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeApp {
                app_id: id("browser"),
            },
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("browser"),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn set_window_position_stores_offset() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "games");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::SetWindowPosition {
                app_id: id("games"),
                position: WindowPosition { x: -12, y: 300 },
            },
        );
        assert_eq!(
            state.window(&id("games")).expect("games").position,
            Some(WindowPosition { x: -12, y: 300 })
        );
    }

    #[test]
    fn prefs_actions_persist_but_hydration_does_not() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::SetIconSize {
                size: IconSize::Large,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistDesktopPrefs]);
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::SetSortOrder {
                order: SortOrder::NameAsc,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistDesktopPrefs]);
        run(&mut state, &mut interaction, DesktopAction::ResetIconPositions);
        run(&mut state, &mut interaction, DesktopAction::ResetIconPositions);
        assert_eq!(state.prefs.layout_version, 2);

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateDesktopPrefs {
                prefs: DesktopPrefs::default(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.prefs, DesktopPrefs::default());
    }

    #[test]
    fn app_commands_route_to_wallpaper_links_and_launches() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::SetWallpaper {
                    url: "/assets/images/neon-alley.png".to_string(),
                },
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistDesktopPrefs]);
        assert_eq!(state.prefs.wallpaper, "/assets/images/neon-alley.png");

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::OpenExternalUrl {
                    url: "https://www.youtube.com/@mroppy".to_string(),
                },
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://www.youtube.com/@mroppy".to_string()
            )]
        );

        let photo = AppLaunchData::media("/assets/images/quiet-lake.jpg", "quiet-lake");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: AppCommand::LaunchApp {
                    app_id: id("photos"),
                    data: Some(photo.clone()),
                },
            },
        );
        assert_eq!(state.window(&id("photos")).expect("photos").data, Some(photo));
    }

    #[test]
    fn shutdown_closes_everything_and_turn_on_boots() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        launch(&mut state, &mut interaction, "about");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::SetShutdownConfirmOpen { open: true },
        );

        let effects = run(&mut state, &mut interaction, DesktopAction::ShutDown);
        assert_eq!(effects, vec![RuntimeEffect::PersistPowerState]);
        assert!(state.windows.is_empty());
        assert_eq!(state.active_app, None);
        assert_eq!(
            state.power,
            PowerState {
                is_shut_down: true,
                shutdown_confirm_open: false,
            }
        );

        let effects = run(&mut state, &mut interaction, DesktopAction::TurnOn);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistPowerState,
                RuntimeEffect::RunBootSequence
            ]
        );
        assert!(!state.power.is_shut_down);
        assert_eq!(state.boot, BootPhase::Booting);
    }

    #[test]
    fn first_boot_launches_intro_exactly_once() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        run(&mut state, &mut interaction, DesktopAction::BootComplete);
        assert_eq!(state.boot, BootPhase::Ready);
        assert_eq!(stack(&state), vec![("intro", 1)]);

        run(&mut state, &mut interaction, DesktopAction::ShutDown);
        run(&mut state, &mut interaction, DesktopAction::TurnOn);
        run(&mut state, &mut interaction, DesktopAction::BootComplete);
        assert_eq!(state.boot, BootPhase::Ready);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn boot_completion_is_ignored_while_shut_down() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        run(
            &mut state,
            &mut interaction,
            DesktopAction::HydratePowerState { is_shut_down: true },
        );

        run(&mut state, &mut interaction, DesktopAction::BootComplete);
        assert_eq!(state.boot, BootPhase::Booting);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn volume_is_clamped_and_toggles_flip() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        run(
            &mut state,
            &mut interaction,
            DesktopAction::SetVolume { volume: 250 },
        );
        assert_eq!(state.audio.volume, 100);
        run(
            &mut state,
            &mut interaction,
            DesktopAction::SetVolume { volume: 35 },
        );
        assert_eq!(state.audio.volume, 35);

        run(&mut state, &mut interaction, DesktopAction::ToggleMute);
        assert!(state.audio.muted);
        run(&mut state, &mut interaction, DesktopAction::ToggleWifi);
        assert!(!state.network.wifi_enabled);
        run(&mut state, &mut interaction, DesktopAction::ToggleWifi);
        assert!(state.network.wifi_enabled);
    }

    #[test]
    fn start_menu_toggles_and_closes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        run(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        run(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(!state.start_menu_open);
        run(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        run(&mut state, &mut interaction, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }
}
