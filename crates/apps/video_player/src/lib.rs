//! Video Player app: plays the video named by the window's launch payload.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use system_ui::prelude::*;
use wasm_bindgen_futures::JsFuture;

const CONTROLS_HIDE_DELAY: Duration = Duration::from_millis(3000);

fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn progress_percent(current: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        (current / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn seek_seconds(percent: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        percent.clamp(0.0, 100.0) / 100.0 * duration
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct VolumeState {
    /// 0.0 to 1.0.
    level: f64,
    muted: bool,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            level: 1.0,
            muted: false,
        }
    }
}

impl VolumeState {
    /// Dragging to zero mutes; any other level unmutes.
    fn set_level(&mut self, level: f64) {
        self.level = level.clamp(0.0, 1.0);
        self.muted = self.level == 0.0;
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }
}

/// Starts playback; a rejected play request is logged, not surfaced.
fn start_playback(media: &web_sys::HtmlMediaElement) {
    match media.play() {
        Ok(request) => spawn_local(async move {
            if let Err(err) = JsFuture::from(request).await {
                logging::warn!("Playback failed: {err:?}");
            }
        }),
        Err(err) => logging::warn!("Playback failed: {err:?}"),
    }
}

#[component]
/// Video Player window contents.
pub fn VideoPlayerApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let launch_data = context.launch_data;
    let video_ref = create_node_ref::<html::Video>();
    let container_ref = create_node_ref::<html::Div>();
    let playing = create_rw_signal(false);
    let current_time = create_rw_signal(0.0_f64);
    let duration = create_rw_signal(0.0_f64);
    let volume = create_rw_signal(VolumeState::default());
    let fullscreen = create_rw_signal(false);
    let controls_visible = create_rw_signal(true);
    let hide_timer = store_value(None::<TimeoutHandle>);

    let source = Signal::derive(move || {
        launch_data.with(|data| data.as_ref().and_then(|data| data.url.clone()))
    });
    let title = Signal::derive(move || {
        launch_data.with(|data| data.as_ref().and_then(|data| data.name.clone()))
    });

    // A new payload swaps the source and starts playback.
    create_effect(move |_| {
        let Some(url) = source.get() else {
            return;
        };
        if let Some(video) = video_ref.get() {
            video.set_src(&url);
            start_playback(&video);
        }
    });
    create_effect(move |_| {
        let state = volume.get();
        if let Some(video) = video_ref.get() {
            video.set_volume(state.level);
            video.set_muted(state.muted);
        }
    });
    on_cleanup(move || {
        if let Some(handle) = hide_timer.get_value() {
            handle.clear();
        }
    });

    let cancel_hide = move || {
        if let Some(handle) = hide_timer.get_value() {
            handle.clear();
        }
        hide_timer.set_value(None);
    };
    let schedule_hide = move || {
        cancel_hide();
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                if playing.get_untracked() {
                    controls_visible.set(false);
                }
            },
            CONTROLS_HIDE_DELAY,
        ) {
            hide_timer.set_value(Some(handle));
        }
    };
    let reveal_controls = move || {
        controls_visible.set(true);
        schedule_hide();
    };
    let toggle_play = move || {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        if video.paused() {
            start_playback(&video);
            schedule_hide();
        } else {
            let _ = video.pause();
            cancel_hide();
            controls_visible.set(true);
        }
    };
    let sync_time = move || {
        if let Some(video) = video_ref.get_untracked() {
            current_time.set(video.current_time());
            duration.set(video.duration());
        }
    };

    view! {
        {move || {
            if source.with(Option::is_none) {
                return view! {
                    <div class="app-shell app-video-empty">
                        <EmptyState icon=IconName::Film message="No video selected" />
                        <Text tone=TextTone::Secondary>"Open a video from File Manager"</Text>
                    </div>
                }
                .into_view();
            }
            ().into_view()
        }}
        <div
            class="app-shell app-video"
            class:app-video-hidden=move || source.with(Option::is_none)
            node_ref=container_ref
            on:mousemove=move |_| reveal_controls()
            on:mouseleave=move |_| {
                if playing.get_untracked() {
                    controls_visible.set(false);
                }
            }
        >
            <video
                class="video-surface"
                node_ref=video_ref
                on:click=move |_| toggle_play()
                on:play=move |_| playing.set(true)
                on:pause=move |_| playing.set(false)
                on:timeupdate=move |_| sync_time()
                on:loadedmetadata=move |_| sync_time()
            ></video>
            <div class="video-controls" class:video-controls-hidden=move || !controls_visible.get()>
                <div class="video-title">{move || title.get().unwrap_or_default()}</div>
                <RangeField
                    layout_class="video-seek"
                    aria_label="Seek"
                    step=0.1
                    value=Signal::derive(move || progress_percent(current_time.get(), duration.get()))
                    on_input=Callback::new(move |percent| {
                        if let Some(video) = video_ref.get_untracked() {
                            video.set_current_time(seek_seconds(percent, video.duration()));
                            sync_time();
                        }
                    })
                />
                <div class="video-control-row">
                    <IconButton
                        icon=Signal::derive(move || if playing.get() { IconName::Pause } else { IconName::Play })
                        aria_label=Signal::derive(move || {
                            if playing.get() { "Pause" } else { "Play" }.to_string()
                        })
                        on_click=Callback::new(move |_| toggle_play())
                    />
                    <IconButton
                        icon=Signal::derive(move || {
                            if volume.get().muted { IconName::VolumeX } else { IconName::Volume2 }
                        })
                        aria_label="Mute"
                        pressed=Signal::derive(move || volume.get().muted)
                        on_click=Callback::new(move |_| volume.update(VolumeState::toggle_mute))
                    />
                    <RangeField
                        layout_class="video-volume"
                        aria_label="Volume"
                        max=1.0
                        step=0.1
                        value=Signal::derive(move || {
                            let state = volume.get();
                            if state.muted { 0.0 } else { state.level }
                        })
                        on_input=Callback::new(move |level| volume.update(|v| v.set_level(level)))
                    />
                    <span class="video-time">
                        {move || {
                            format!("{} / {}", format_time(current_time.get()), format_time(duration.get()))
                        }}
                    </span>
                    <IconButton
                        layout_class="video-fullscreen"
                        icon=Signal::derive(move || {
                            if fullscreen.get() { IconName::Minimize } else { IconName::Maximize }
                        })
                        aria_label="Toggle fullscreen"
                        on_click=Callback::new(move |_| {
                            if let Some(container) = container_ref.get_untracked() {
                                fullscreen.set(toggle_fullscreen(&container));
                            }
                        })
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seek_maps_percent_onto_duration() {
        assert_eq!(seek_seconds(50.0, 120.0), 60.0);
        assert_eq!(seek_seconds(150.0, 120.0), 120.0);
        assert_eq!(seek_seconds(50.0, f64::NAN), 0.0);
    }

    #[test]
    fn progress_is_zero_until_duration_is_known() {
        assert_eq!(progress_percent(30.0, 0.0), 0.0);
        assert_eq!(progress_percent(30.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
    }

    #[test]
    fn volume_zero_mutes_and_raising_unmutes() {
        let mut volume = VolumeState::default();
        volume.set_level(0.0);
        assert!(volume.muted);
        volume.set_level(0.4);
        assert_eq!(volume, VolumeState { level: 0.4, muted: false });
        volume.toggle_mute();
        assert!(volume.muted);
        assert_eq!(volume.level, 0.4);
    }

    #[test]
    fn time_reads_minutes_and_seconds() {
        assert_eq!(format_time(125.7), "2:05");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
