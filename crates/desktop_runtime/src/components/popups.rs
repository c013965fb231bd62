//! Taskbar tray popups: calendar, Wi-Fi and volume.

use super::*;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use platform_host::local_datetime_now;
use system_ui::{Icon, IconButton, IconName, IconSize, MenuSurface, RangeField, Text, TextTone};

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CONNECTED_NETWORK: &str = "Forsaken OS";
const NEARBY_NETWORKS: [&str; 3] = ["SkyNet 5G", "FBI Surveillance Van", "Pretty Fly for a WiFi"];
pub(super) const TRAY_POPUP_WIDTH_PX: i32 = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TrayPopup {
    Calendar,
    Wifi,
    Volume,
}

/// Clicking the trigger of the open popup closes it; any other trigger swaps popups.
pub(super) fn toggle_popup(current: Option<TrayPopup>, clicked: TrayPopup) -> Option<TrayPopup> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Left edge for a popup centred on a tray trigger, kept inside the viewport.
pub(super) fn centered_popup_left(center_x: i32, popup_w: i32, viewport_w: i32) -> i32 {
    let max_left = (viewport_w - popup_w - POPUP_EDGE_MARGIN_PX).max(POPUP_EDGE_MARGIN_PX);
    (center_x - popup_w / 2).clamp(POPUP_EDGE_MARGIN_PX, max_left)
}

pub(super) fn volume_icon(volume: u8, muted: bool) -> IconName {
    if muted || volume == 0 {
        IconName::VolumeX
    } else if volume < 50 {
        IconName::Volume1
    } else {
        IconName::Volume2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CalendarDay {
    date: NaiveDate,
    in_month: bool,
    is_today: bool,
}

/// Whole weeks covering `year`/`month`, from the Sunday on or before the 1st through the
/// Saturday on or after the last day.
fn calendar_grid(year: i32, month: u32, today: NaiveDate) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let (next_year, next_month) = shift_month(year, month, 1);
    let Some(last) = NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
    else {
        return Vec::new();
    };

    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarDay {
            date,
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
        })
        .collect()
}

fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `Monday, October 19th`
fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}{}",
        date.format("%A, %B %-d"),
        ordinal_suffix(date.day())
    )
}

fn format_month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// `h:mm AM/PM`
pub(super) fn format_clock_time(now: NaiveDateTime) -> String {
    now.format("%-I:%M %p").to_string()
}

/// `dd/MM/yyyy`
pub(super) fn format_clock_date(now: NaiveDateTime) -> String {
    now.format("%d/%m/%Y").to_string()
}

#[component]
pub(super) fn CalendarPopup() -> impl IntoView {
    let today = local_datetime_now().date();
    let shown_month = create_rw_signal((today.year(), today.month()));

    view! {
        <div class="taskbar-popup" data-popup="calendar" on:click=|ev| ev.stop_propagation()>
            <MenuSurface
                layout_class="tray-popup calendar-popup"
                role="dialog"
                aria_label="Calendar"
                style="right:12px;bottom:60px;"
            >
                <header class="calendar-header">
                    <h3>{move || {
                        let (year, month) = shown_month.get();
                        format_month_title(year, month)
                    }}</h3>
                    <div class="calendar-nav">
                        <IconButton
                            icon=IconName::ChevronLeft
                            aria_label="Previous month"
                            on_click=Callback::new(move |_| {
                                shown_month.update(|(year, month)| {
                                    (*year, *month) = shift_month(*year, *month, -1);
                                })
                            })
                        />
                        <IconButton
                            icon=IconName::ChevronRight
                            aria_label="Next month"
                            on_click=Callback::new(move |_| {
                                shown_month.update(|(year, month)| {
                                    (*year, *month) = shift_month(*year, *month, 1);
                                })
                            })
                        />
                    </div>
                </header>
                <div class="calendar-weekdays" aria-hidden="true">
                    {WEEKDAY_HEADERS
                        .iter()
                        .map(|day| view! { <span>{*day}</span> })
                        .collect_view()}
                </div>
                <div class="calendar-grid" role="grid">
                    {move || {
                        let (year, month) = shown_month.get();
                        calendar_grid(year, month, today)
                            .into_iter()
                            .map(|day| {
                                view! {
                                    <span
                                        class="calendar-day"
                                        role="gridcell"
                                        data-in-month=day.in_month.to_string()
                                        data-today=day.is_today.to_string()
                                        aria-current=day.is_today.then_some("date")
                                    >
                                        {day.date.day()}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <footer class="calendar-footer">
                    <Text tone=TextTone::Secondary>{format_long_date(today)}</Text>
                </footer>
            </MenuSurface>
        </div>
    }
}

#[component]
pub(super) fn WifiPopup(left: i32) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let enabled = Signal::derive(move || runtime.state.with(|desktop| desktop.network.wifi_enabled));

    view! {
        <div class="taskbar-popup" data-popup="wifi" on:click=|ev| ev.stop_propagation()>
            <MenuSurface
                layout_class="tray-popup wifi-popup"
                role="dialog"
                aria_label="Wi-Fi"
                style=format!("left:{left}px;bottom:60px;")
            >
                <header class="tray-popup-header">
                    <h3>"Wi-Fi"</h3>
                    <button
                        class="wifi-toggle"
                        role="switch"
                        aria-label="Toggle Wi-Fi"
                        aria-checked=move || enabled.get().to_string()
                        data-ui-state=move || if enabled.get() { "on" } else { "off" }
                        on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleWifi)
                    >
                        <span class="wifi-toggle-knob"></span>
                    </button>
                </header>
                <div class="wifi-current">
                    {move || {
                        let icon = if enabled.get() { IconName::Wifi } else { IconName::WifiOff };
                        view! { <Icon icon size=IconSize::Md /> }
                    }}
                    <div>
                        <Text>
                            {move || if enabled.get() { CONNECTED_NETWORK } else { "Wi-Fi is turned off" }}
                        </Text>
                        <Text tone=TextTone::Secondary>
                            {move || if enabled.get() { "Connected" } else { "Turn on Wi-Fi to connect" }}
                        </Text>
                    </div>
                </div>
                <Show when=move || enabled.get() fallback=|| ()>
                    <div class="wifi-networks">
                        <Text tone=TextTone::Secondary>"Available Networks"</Text>
                        {NEARBY_NETWORKS
                            .iter()
                            .map(|network| {
                                view! {
                                    <div class="wifi-network">
                                        <Icon icon=IconName::Wifi size=IconSize::Sm />
                                        <span>{*network}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </MenuSurface>
        </div>
    }
}

#[component]
pub(super) fn VolumePopup(left: i32) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let audio = Signal::derive(move || runtime.state.with(|desktop| desktop.audio));
    let shown_volume = Signal::derive(move || {
        let audio = audio.get();
        if audio.muted {
            0
        } else {
            audio.volume
        }
    });

    view! {
        <div class="taskbar-popup" data-popup="volume" on:click=|ev| ev.stop_propagation()>
            <MenuSurface
                layout_class="tray-popup volume-popup"
                role="dialog"
                aria_label="Volume"
                style=format!("left:{left}px;bottom:60px;")
            >
                <IconButton
                    icon=Signal::derive(move || {
                        let audio = audio.get();
                        volume_icon(audio.volume, audio.muted)
                    })
                    aria_label=Signal::derive(move || {
                        if audio.get().muted { "Unmute" } else { "Mute" }.to_string()
                    })
                    pressed=Signal::derive(move || audio.get().muted)
                    on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::ToggleMute))
                />
                <RangeField
                    aria_label="Volume"
                    value=Signal::derive(move || f64::from(shown_volume.get()))
                    on_input=Callback::new(move |value: f64| {
                        if runtime.state.with_untracked(|desktop| desktop.audio.muted) {
                            runtime.dispatch_action(DesktopAction::ToggleMute);
                        }
                        runtime.dispatch_action(DesktopAction::SetVolume {
                            volume: value.round().clamp(0.0, 100.0) as u8,
                        });
                    })
                />
                <span class="volume-value">{move || shown_volume.get()}</span>
            </MenuSurface>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn grid_spans_whole_weeks_around_the_month() {
        // October 2026 starts on a Thursday and ends on a Saturday.
        let grid = calendar_grid(2026, 10, date(2026, 10, 19));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.first().map(|d| d.date), Some(date(2026, 9, 27)));
        assert_eq!(grid.last().map(|d| d.date), Some(date(2026, 10, 31)));
        assert_eq!(grid.iter().filter(|d| d.in_month).count(), 31);
        assert_eq!(
            grid.iter().filter(|d| d.is_today).map(|d| d.date).collect::<Vec<_>>(),
            vec![date(2026, 10, 19)]
        );
    }

    #[test]
    fn grid_without_padding_when_month_fills_exact_weeks() {
        // February 2015 runs Sunday 1st to Saturday 28th.
        let grid = calendar_grid(2015, 2, date(2020, 1, 1));
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|d| d.in_month && !d.is_today));
    }

    #[test]
    fn month_shift_wraps_years() {
        assert_eq!(shift_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_month(2026, 6, 0), (2026, 6));
    }

    #[test]
    fn long_date_uses_ordinal_suffixes() {
        assert_eq!(format_long_date(date(2026, 10, 19)), "Monday, October 19th");
        assert_eq!(format_long_date(date(2026, 10, 1)), "Thursday, October 1st");
        assert_eq!(format_long_date(date(2026, 10, 22)), "Thursday, October 22nd");
        assert_eq!(format_long_date(date(2026, 10, 23)), "Friday, October 23rd");
        assert_eq!(format_long_date(date(2026, 10, 11)), "Sunday, October 11th");
        assert_eq!(format_long_date(date(2026, 10, 13)), "Tuesday, October 13th");
    }

    #[test]
    fn month_title_names_month_and_year() {
        assert_eq!(format_month_title(2026, 10), "October 2026");
        assert_eq!(format_month_title(2026, 13), "");
    }

    #[test]
    fn clock_uses_twelve_hour_time_and_day_first_date() {
        let afternoon = date(2026, 3, 7).and_hms_opt(13, 5, 0).expect("time");
        assert_eq!(format_clock_time(afternoon), "1:05 PM");
        assert_eq!(format_clock_date(afternoon), "07/03/2026");

        let midnight = date(2026, 3, 7).and_hms_opt(0, 30, 0).expect("time");
        assert_eq!(format_clock_time(midnight), "12:30 AM");
    }

    #[test]
    fn volume_icon_tracks_level_and_mute() {
        assert_eq!(volume_icon(100, true), IconName::VolumeX);
        assert_eq!(volume_icon(0, false), IconName::VolumeX);
        assert_eq!(volume_icon(49, false), IconName::Volume1);
        assert_eq!(volume_icon(50, false), IconName::Volume2);
    }

    #[test]
    fn popup_toggle_closes_on_same_trigger() {
        assert_eq!(toggle_popup(None, TrayPopup::Wifi), Some(TrayPopup::Wifi));
        assert_eq!(toggle_popup(Some(TrayPopup::Wifi), TrayPopup::Wifi), None);
        assert_eq!(
            toggle_popup(Some(TrayPopup::Wifi), TrayPopup::Volume),
            Some(TrayPopup::Volume)
        );
    }

    #[test]
    fn centered_popup_stays_on_screen() {
        assert_eq!(centered_popup_left(600, 320, 1280), 440);
        assert_eq!(centered_popup_left(1250, 320, 1280), 1280 - 320 - 6);
        assert_eq!(centered_popup_left(40, 320, 1280), 6);
    }
}
