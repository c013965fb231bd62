//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod desktop_icons;
mod menus;
mod popups;
mod power;
mod taskbar;
mod window;

use desktop_app_contract::ApplicationId;
use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use self::{
    a11y::{focus_element_by_id, focus_first_menu_item},
    desktop_icons::DesktopIcons,
    menus::{DesktopContextMenu, StartMenu},
    power::{BootScreen, ShutDownScreen, ShutdownConfirmDialog},
    taskbar::Taskbar,
    window::DesktopWindow,
};
use crate::{
    host::{desktop_viewport_size, ViewportSize},
    model::{BootPhase, DesktopState, PointerPosition},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const TASKBAR_HEIGHT_PX: i32 = 48;
const POPUP_EDGE_MARGIN_PX: i32 = 6;
const DESKTOP_CONTEXT_MENU_SIZE: (i32, i32) = (220, 200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellScreen {
    PoweredOff,
    Booting,
    Desktop,
}

fn shell_screen(state: &DesktopState) -> ShellScreen {
    if state.power.is_shut_down {
        ShellScreen::PoweredOff
    } else if state.boot == BootPhase::Booting {
        ShellScreen::Booting
    } else {
        ShellScreen::Desktop
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DesktopContextMenuState {
    x: i32,
    y: i32,
}

#[component]
/// Renders the full desktop shell UI for the current power and boot phase.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let screen = create_memo(move |_| shell_screen(&state.get()));

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let on_pointer_up = Callback::new(move |_| end_active_pointer_interaction(runtime));

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            tabindex=-1
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_up
        >
            {move || match screen.get() {
                ShellScreen::PoweredOff => view! { <ShutDownScreen /> }.into_view(),
                ShellScreen::Booting => view! { <BootScreen /> }.into_view(),
                ShellScreen::Desktop => view! { <DesktopSurface /> }.into_view(),
            }}
            <ShutdownConfirmDialog />
        </DesktopRoot>
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let desktop_context_menu = create_rw_signal(None::<DesktopContextMenuState>);
    let desktop_context_menu_was_open = create_rw_signal(false);

    create_effect(move |_| {
        let is_open = desktop_context_menu.get().is_some();
        let was_open = desktop_context_menu_was_open.get_untracked();
        if is_open && !was_open {
            desktop_context_menu_was_open.set(true);
            let _ = focus_first_menu_item("desktop-context-menu");
        } else if !is_open && was_open {
            desktop_context_menu_was_open.set(false);
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }

        if desktop_context_menu.get_untracked().is_some() {
            ev.prevent_default();
            ev.stop_propagation();
            desktop_context_menu.set(None);
            let _ = focus_element_by_id("desktop-shell-root");
        }
    });
    on_cleanup(move || escape_listener.remove());

    // The menu stops its own mousedown, so any mousedown reaching the window is outside it.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if desktop_context_menu.get_untracked().is_some() {
            desktop_context_menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let wallpaper = Signal::derive(move || state.with(|desktop| desktop.prefs.wallpaper.clone()));

    view! {
        <DesktopBackdrop wallpaper />
        <div
            class="desktop-dismiss-layer"
            data-ui-slot="dismiss-layer"
            on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            on:contextmenu=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::CloseStartMenu);
                open_desktop_context_menu(desktop_context_menu, ev.client_x(), ev.client_y());
            }
        ></div>

        <DesktopIcons desktop_context_menu />

        <DesktopWindowLayer>
            <For
                each=move || state.get().windows
                key=|win| win.app_id.to_string()
                let:win
            >
                <DesktopWindow app_id=win.app_id />
            </For>
        </DesktopWindowLayer>

        <StartMenu />
        <DesktopContextMenu desktop_context_menu />
        <Taskbar />
    }
}

fn open_desktop_context_menu(
    menu: RwSignal<Option<DesktopContextMenuState>>,
    x: i32,
    y: i32,
) {
    let (popup_w, popup_h) = DESKTOP_CONTEXT_MENU_SIZE;
    let (x, y) = clamp_popup_position(desktop_viewport_size(), x, y, popup_w, popup_h);
    menu.set(Some(DesktopContextMenuState { x, y }));
}

/// Keeps a popup of `popup_w` x `popup_h` inside the viewport area above the taskbar.
fn clamp_popup_position(
    viewport: ViewportSize,
    x: i32,
    y: i32,
    popup_w: i32,
    popup_h: i32,
) -> (i32, i32) {
    let max_x = (viewport.w - popup_w - POPUP_EDGE_MARGIN_PX).max(POPUP_EDGE_MARGIN_PX);
    let max_y = (viewport.h - TASKBAR_HEIGHT_PX - popup_h - POPUP_EDGE_MARGIN_PX)
        .max(POPUP_EDGE_MARGIN_PX);
    (
        x.clamp(POPUP_EDGE_MARGIN_PX, max_x),
        y.clamp(POPUP_EDGE_MARGIN_PX, max_y),
    )
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.get_untracked().dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
}

fn launch_app(runtime: DesktopRuntimeContext, app_id: ApplicationId) {
    runtime.dispatch_action(DesktopAction::LaunchApp {
        app_id,
        data: None,
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::PowerState;

    #[test]
    fn shell_screen_prefers_power_over_boot_phase() {
        let mut state = DesktopState::default();
        assert_eq!(shell_screen(&state), ShellScreen::Booting);

        state.boot = BootPhase::Ready;
        assert_eq!(shell_screen(&state), ShellScreen::Desktop);

        state.power = PowerState {
            is_shut_down: true,
            shutdown_confirm_open: false,
        };
        assert_eq!(shell_screen(&state), ShellScreen::PoweredOff);
    }

    #[test]
    fn popup_position_is_clamped_inside_the_desktop_area() {
        let viewport = ViewportSize { w: 1280, h: 720 };
        assert_eq!(
            clamp_popup_position(viewport, 400, 300, 220, 200),
            (400, 300)
        );
        assert_eq!(
            clamp_popup_position(viewport, 1270, 710, 220, 200),
            (1280 - 220 - 6, 720 - 48 - 200 - 6)
        );
        assert_eq!(clamp_popup_position(viewport, -20, 0, 220, 200), (6, 6));
    }

    #[test]
    fn tiny_viewport_pins_popup_to_the_margin() {
        let viewport = ViewportSize { w: 100, h: 100 };
        assert_eq!(clamp_popup_position(viewport, 50, 50, 220, 200), (6, 6));
    }
}
