use super::*;
use crate::{apps, model::WindowRecord};
use desktop_app_contract::{AppMountContext, AppServices};
use system_ui::{
    IconName, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
pub(super) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline placement for a window. Unmaximized windows sit at 10%/10% of the desktop shifted by
/// their drag offset; maximized windows fill the area above the taskbar.
fn window_style(win: &WindowRecord) -> String {
    if win.maximized {
        return format!(
            "left:0;top:0;width:100vw;height:calc(100vh - {TASKBAR_HEIGHT_PX}px);z-index:{};",
            win.layer_z_index()
        );
    }
    let position = win.position.unwrap_or_default();
    format!(
        "left:10%;top:10%;width:{}px;height:{}px;transform:translate({}px,{}px);z-index:{};",
        win.size.w,
        win.size.h,
        position.x,
        position.y,
        win.layer_z_index()
    )
}

#[component]
pub(super) fn DesktopWindow(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = apps::app_descriptor(&app_id);
    let app_id = store_value(app_id);

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.window(&app_id.get_value()).cloned())
    });
    let focused = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.is_active(&app_id.get_value()))
    });
    let minimized = Signal::derive(move || window.get().map(|w| w.minimized).unwrap_or(false));
    let maximized = Signal::derive(move || window.get().map(|w| w.maximized).unwrap_or(false));
    let style = Signal::derive(move || window.get().map(|w| window_style(&w)).unwrap_or_default());
    let title = descriptor.map(|app| app.title).unwrap_or_default();

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        let should_focus = window
            .get_untracked()
            .map(|w| !focused.get_untracked() || w.minimized)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                app_id: app_id.get_value(),
            });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id: app_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let toggle_maximize_on_dblclick = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MaximizeApp {
            app_id: app_id.get_value(),
        });
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::MinimizeApp {
            app_id: app_id.get_value(),
        })
    });
    let toggle_maximize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::MaximizeApp {
            app_id: app_id.get_value(),
        })
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseApp {
            app_id: app_id.get_value(),
        })
    });

    view! {
        <WindowFrame
            style
            aria_label=title.to_string()
            focused
            minimized
            maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=toggle_maximize_on_dblclick>
                <WindowTitle
                    icon=descriptor.map(|app| app.icon).unwrap_or(IconName::Launcher)
                    icon_color=descriptor.map(|app| app.icon_color).unwrap_or("#ffffff")
                >
                    {title}
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=minimize
                    />
                    <WindowControlButton
                        icon=Signal::derive(move || {
                            if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            }
                        })
                        aria_label=Signal::derive(move || {
                            if maximized.get() { "Restore window" } else { "Maximize window" }
                                .to_string()
                        })
                        on_click=toggle_maximize
                    />
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        danger=true
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <WindowContents app_id=app_id.get_value() />
            </WindowBody>
        </WindowFrame>
    }
}

#[component]
fn WindowContents(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let Some(descriptor) = apps::app_descriptor(&app_id) else {
        return view! { <p>"Closed"</p> }.into_view();
    };

    let command_sender = Callback::new(move |command| {
        runtime.dispatch_action(DesktopAction::HandleAppCommand { command });
    });
    let launch_data = {
        let app_id = app_id.clone();
        Signal::derive(move || {
            state.with(|desktop| desktop.window(&app_id).and_then(|win| win.data.clone()))
        })
    };
    let wallpaper = Signal::derive(move || state.with(|desktop| desktop.prefs.wallpaper.clone()));
    let services = AppServices::new(command_sender, wallpaper, runtime.media.get_value());

    descriptor.module.mount(AppMountContext {
        app_id,
        launch_data,
        services,
    })
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppLaunchData;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowPosition, WindowSize};

    fn record() -> WindowRecord {
        WindowRecord {
            app_id: ApplicationId::trusted("photos"),
            title: "Photos".to_string(),
            size: WindowSize { w: 800, h: 600 },
            position: None,
            z_index: 3,
            minimized: false,
            maximized: false,
            data: Some(AppLaunchData::media("/assets/images/a.png", "a")),
        }
    }

    #[test]
    fn unpositioned_window_uses_default_offset() {
        assert_eq!(
            window_style(&record()),
            "left:10%;top:10%;width:800px;height:600px;transform:translate(50px,50px);z-index:3;"
        );
    }

    #[test]
    fn dragged_window_uses_stored_offset() {
        let mut win = record();
        win.position = Some(WindowPosition { x: -30, y: 120 });
        assert_eq!(
            window_style(&win),
            "left:10%;top:10%;width:800px;height:600px;transform:translate(-30px,120px);z-index:3;"
        );
    }

    #[test]
    fn maximized_window_fills_the_area_above_the_taskbar() {
        let mut win = record();
        win.maximized = true;
        win.position = Some(WindowPosition { x: 300, y: 300 });
        assert_eq!(
            window_style(&win),
            "left:0;top:0;width:100vw;height:calc(100vh - 48px);z-index:3;"
        );
    }

    #[test]
    fn runaway_stack_rank_stays_under_the_start_menu() {
        let mut win = record();
        win.z_index = 20_000;
        assert!(window_style(&win).ends_with("z-index:9998;"));
    }
}
