use super::*;
use crate::{apps, apps::AppDescriptor, model::IconMetrics};
use platform_host::unix_time_ms_now;
use system_ui::{DesktopIconGrid, Icon, IconSize};

const DOUBLE_CLICK_WINDOW_MS: u64 = 300;
const ICON_DRAG_THRESHOLD_PX: i32 = 3;

/// Per-icon pointer bookkeeping. Offsets are UI-local and never reach the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct IconPointerState {
    offset: (i32, i32),
    press: Option<IconPress>,
    dragged: bool,
    last_click_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IconPress {
    pointer: PointerPosition,
    offset_start: (i32, i32),
}

impl IconPointerState {
    fn press(&mut self, pointer: PointerPosition) {
        self.press = Some(IconPress {
            pointer,
            offset_start: self.offset,
        });
        self.dragged = false;
    }

    fn drag_to(&mut self, pointer: PointerPosition) {
        let Some(press) = self.press else {
            return;
        };
        let dx = pointer.x - press.pointer.x;
        let dy = pointer.y - press.pointer.y;
        if !self.dragged
            && dx.abs() <= ICON_DRAG_THRESHOLD_PX
            && dy.abs() <= ICON_DRAG_THRESHOLD_PX
        {
            return;
        }
        self.dragged = true;
        self.offset = (press.offset_start.0 + dx, press.offset_start.1 + dy);
    }

    /// Ends the press and reports whether it completed a double click.
    fn release(&mut self, now_ms: u64) -> bool {
        self.press = None;
        if self.dragged {
            self.dragged = false;
            return false;
        }
        let is_double = self
            .last_click_ms
            .map(|last| now_ms.saturating_sub(last) < DOUBLE_CLICK_WINDOW_MS)
            .unwrap_or(false);
        self.last_click_ms = Some(now_ms);
        is_double
    }
}

fn icon_grid_style(metrics: IconMetrics) -> String {
    format!(
        "--desktop-icon-glyph:{}px;--desktop-icon-width:{}px;--desktop-icon-font:{}px;height:calc(100vh - {TASKBAR_HEIGHT_PX}px);",
        metrics.glyph_px, metrics.tile_width_px, metrics.font_px
    )
}

#[component]
pub(super) fn DesktopIcons(
    desktop_context_menu: RwSignal<Option<DesktopContextMenuState>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let grid_style = Signal::derive(move || {
        let size = state.with(|desktop| desktop.prefs.icon_size);
        icon_grid_style(size.metrics(desktop_viewport_size().w))
    });

    view! {
        <div
            class="desktop-icons-area"
            on:contextmenu=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::CloseStartMenu);
                open_desktop_context_menu(desktop_context_menu, ev.client_x(), ev.client_y());
            }
        >
            <DesktopIconGrid style=grid_style>
                <For
                    each=move || {
                        let (order, layout_version) = state
                            .with(|desktop| (desktop.prefs.sort_order, desktop.prefs.layout_version));
                        apps::desktop_icon_apps(order)
                            .into_iter()
                            .map(move |app| (app, layout_version))
                            .collect::<Vec<_>>()
                    }
                    key=|(app, layout_version)| format!("{}-{}", app.app_id, layout_version)
                    let:entry
                >
                    <DesktopIcon app=entry.0 />
                </For>
            </DesktopIconGrid>
        </div>
    }
}

#[component]
fn DesktopIcon(app: &'static AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let pointer_state = create_rw_signal(IconPointerState::default());
    let glyph_size = Signal::derive(move || {
        let size = runtime.state.with(|desktop| desktop.prefs.icon_size);
        IconSize::Px(size.metrics(desktop_viewport_size().w).glyph_px)
    });

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        ev.stop_propagation();
        super::window::try_set_pointer_capture(&ev);
        pointer_state.update(|icon| icon.press(pointer_from_pointer_event(&ev)));
    };
    let on_pointermove = move |ev: web_sys::PointerEvent| {
        if pointer_state.with_untracked(|icon| icon.press.is_none()) {
            return;
        }
        pointer_state.update(|icon| icon.drag_to(pointer_from_pointer_event(&ev)));
    };
    let on_pointerup = move |_: web_sys::PointerEvent| {
        let mut icon = pointer_state.get_untracked();
        let launch = icon.release(unix_time_ms_now());
        pointer_state.set(icon);
        if launch {
            launch_app(runtime, app.application_id());
        }
    };

    view! {
        <div
            class="desktop-icon"
            role="listitem"
            aria-label=app.title
            title=app.title
            style=move || {
                let (x, y) = pointer_state.with(|icon| icon.offset);
                format!("transform:translate({x}px,{y}px);")
            }
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=move |_| pointer_state.update(|icon| icon.press = None)
        >
            <span class="desktop-icon-glyph">
                <Icon icon=app.icon size=glyph_size color=app.icon_color />
            </span>
            <span class="desktop-icon-label">{app.title}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn two_quick_clicks_form_a_double_click() {
        let mut icon = IconPointerState::default();
        icon.press(at(10, 10));
        assert!(!icon.release(1_000));
        icon.press(at(10, 10));
        assert!(icon.release(1_250));
    }

    #[test]
    fn slow_second_click_starts_a_new_sequence() {
        let mut icon = IconPointerState::default();
        icon.press(at(10, 10));
        assert!(!icon.release(1_000));
        icon.press(at(10, 10));
        assert!(!icon.release(1_300));
        icon.press(at(10, 10));
        assert!(icon.release(1_450));
    }

    #[test]
    fn drag_moves_the_icon_and_never_launches() {
        let mut icon = IconPointerState::default();
        icon.press(at(10, 10));
        assert!(!icon.release(1_000));

        icon.press(at(10, 10));
        icon.drag_to(at(60, 35));
        assert_eq!(icon.offset, (50, 25));
        assert!(!icon.release(1_100));

        icon.press(at(60, 35));
        icon.drag_to(at(40, 35));
        assert_eq!(icon.offset, (30, 25));
    }

    #[test]
    fn jitter_under_threshold_is_not_a_drag() {
        let mut icon = IconPointerState::default();
        icon.press(at(10, 10));
        icon.drag_to(at(12, 8));
        assert_eq!(icon.offset, (0, 0));
        assert!(!icon.dragged);
    }

    #[test]
    fn grid_style_carries_icon_metrics() {
        let style = icon_grid_style(IconMetrics {
            glyph_px: 64,
            tile_width_px: 110,
            font_px: 13,
        });
        assert_eq!(
            style,
            "--desktop-icon-glyph:64px;--desktop-icon-width:110px;--desktop-icon-font:13px;height:calc(100vh - 48px);"
        );
    }
}
