use std::time::Duration;

use super::*;
use super::popups::{
    centered_popup_left, format_clock_date, format_clock_time, toggle_popup, volume_icon,
    CalendarPopup, TrayPopup, VolumePopup, WifiPopup, TRAY_POPUP_WIDTH_PX,
};
use crate::{apps, model::TASKBAR_Z_INDEX};
use platform_host::local_datetime_now;
use system_ui::{
    Button, ButtonVariant, Icon, IconName, IconSize, Taskbar as TaskbarSurface, TaskbarButton,
    TaskbarSection, TrayButton,
};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(local_datetime_now());
    let active_popup = create_rw_signal(None::<TrayPopup>);
    let popup_left = create_rw_signal(0);

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(local_datetime_now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Popups and their triggers stop click propagation, so anything reaching the window is
    // outside both.
    let outside_click_listener = window_event_listener(ev::click, move |_| {
        if active_popup.get_untracked().is_some() {
            active_popup.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let toggle_tray_popup = move |ev: web_sys::MouseEvent, popup: TrayPopup| {
        ev.stop_propagation();
        popup_left.set(centered_popup_left(
            ev.client_x(),
            TRAY_POPUP_WIDTH_PX,
            desktop_viewport_size().w,
        ));
        active_popup.update(|current| *current = toggle_popup(*current, popup));
    };
    let start_menu_open = Signal::derive(move || state.with(|desktop| desktop.start_menu_open));
    let wifi_enabled = Signal::derive(move || state.with(|desktop| desktop.network.wifi_enabled));

    view! {
        <TaskbarSurface aria_label="Taskbar" style=format!("z-index:{TASKBAR_Z_INDEX};")>
            <TaskbarSection ui_slot="start">
                <Button
                    id="taskbar-start-button"
                    variant=ButtonVariant::Quiet
                    aria_label="Start"
                    aria_haspopup="menu"
                    aria_expanded=start_menu_open
                    pressed=start_menu_open
                    on_click=Callback::new(move |_| {
                        active_popup.set(None);
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Launcher size=IconSize::Lg color="#0078d4" />
                </Button>
            </TaskbarSection>

            <TaskbarSection ui_slot="apps" aria_label="Applications">
                <For
                    each=move || state.with(apps::taskbar_apps)
                    key=|app| app.app_id
                    let:app
                >
                    {{
                        let app_id = store_value(app.application_id());
                        let open = Signal::derive(move || {
                            state.with(|desktop| desktop.is_open(&app_id.get_value()))
                        });
                        let active = Signal::derive(move || {
                            state.with(|desktop| desktop.is_active(&app_id.get_value()))
                        });
                        view! {
                            <TaskbarButton
                                aria_label=app.title
                                open
                                active
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarApp {
                                        app_id: app_id.get_value(),
                                    });
                                })
                            >
                                <Icon icon=app.icon size=IconSize::Lg color=app.icon_color />
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray" aria_label="System tray">
                <div class="taskbar-trigger">
                    <TrayButton
                        aria_label="Wi-Fi"
                        pressed=Signal::derive(move || active_popup.get() == Some(TrayPopup::Wifi))
                        on_click=Callback::new(move |ev| toggle_tray_popup(ev, TrayPopup::Wifi))
                    >
                        {move || {
                            let icon = if wifi_enabled.get() { IconName::Wifi } else { IconName::WifiOff };
                            view! { <Icon icon size=IconSize::Sm /> }
                        }}
                    </TrayButton>
                </div>
                <div class="taskbar-trigger">
                    <TrayButton
                        aria_label="Volume"
                        pressed=Signal::derive(move || active_popup.get() == Some(TrayPopup::Volume))
                        on_click=Callback::new(move |ev| toggle_tray_popup(ev, TrayPopup::Volume))
                    >
                        {move || {
                            let audio = state.with(|desktop| desktop.audio);
                            view! { <Icon icon=volume_icon(audio.volume, audio.muted) size=IconSize::Sm /> }
                        }}
                    </TrayButton>
                </div>
                <div class="taskbar-trigger">
                    <TrayButton
                        layout_class="taskbar-clock"
                        aria_label=Signal::derive(move || {
                            let now = clock_now.get();
                            format!("{}, {}", format_clock_date(now), format_clock_time(now))
                        })
                        pressed=Signal::derive(move || {
                            active_popup.get() == Some(TrayPopup::Calendar)
                        })
                        on_click=Callback::new(move |ev| toggle_tray_popup(ev, TrayPopup::Calendar))
                    >
                        <span class="taskbar-clock-time">
                            {move || format_clock_time(clock_now.get())}
                        </span>
                        <span class="taskbar-clock-date">
                            {move || format_clock_date(clock_now.get())}
                        </span>
                    </TrayButton>
                </div>
            </TaskbarSection>
        </TaskbarSurface>

        {move || match active_popup.get() {
            Some(TrayPopup::Calendar) => view! { <CalendarPopup /> }.into_view(),
            Some(TrayPopup::Wifi) => view! { <WifiPopup left=popup_left.get_untracked() /> }.into_view(),
            Some(TrayPopup::Volume) => {
                view! { <VolumePopup left=popup_left.get_untracked() /> }.into_view()
            }
            None => ().into_view(),
        }}
    }
}
