//! Music app: plays the bundled songs and the curated online list through one `<audio>` element.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod playlist;

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::playlist::{filter_songs, format_time, songs_from_links, MusicTab, PlayerState, Song};

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
/// Music window contents.
pub fn MusicApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let media = &context.services.media;
    let favourites = store_value(songs_from_links(&media.local_songs()));
    let online = store_value(songs_from_links(&media.online_songs));

    let tab = create_rw_signal(MusicTab::default());
    let query = create_rw_signal(String::new());
    let player = create_rw_signal(PlayerState::default());
    let progress = create_rw_signal(0.0_f64);
    let duration = create_rw_signal(0.0_f64);
    let volume = create_rw_signal(100.0_f64);
    let muted = create_rw_signal(false);
    let audio_ref = create_node_ref::<html::Audio>();
    let loaded_url = store_value(String::new());

    let active_list = move || match tab.get() {
        MusicTab::Favourites => favourites.get_value(),
        MusicTab::AllSongs => online.get_value(),
    };
    let visible = create_memo(move |_| query.with(|query| filter_songs(&active_list(), query)));

    create_effect(move |_| {
        let state = player.get();
        let Some(audio) = audio_ref.get() else {
            return;
        };
        let Some(song) = state.current else {
            return;
        };
        if loaded_url.with_value(|loaded| *loaded != song.url) {
            audio.set_src(&song.url);
            loaded_url.set_value(song.url);
        }
        if state.playing {
            start_playback(&audio);
        } else {
            let _ = audio.pause();
        }
    });
    create_effect(move |_| {
        let level = if muted.get() { 0.0 } else { volume.get() / 100.0 };
        if let Some(audio) = audio_ref.get() {
            audio.set_volume(level);
        }
    });

    let sync_time = move || {
        if let Some(audio) = audio_ref.get_untracked() {
            progress.set(audio.current_time());
            duration.set(audio.duration());
        }
    };
    let seek = move |percent: f64| {
        if let Some(audio) = audio_ref.get_untracked() {
            let total = audio.duration();
            if total.is_finite() {
                audio.set_current_time(percent / 100.0 * total);
                progress.set(audio.current_time());
            }
        }
    };
    let play_next = move || {
        let list = active_list();
        player.update(|p| p.next(&list));
    };
    let play_previous = move || {
        let list = active_list();
        player.update(|p| p.previous(&list));
    };

    let tab_button = move |target: MusicTab, icon: IconName| {
        view! {
            <Tab
                icon
                selected=Signal::derive(move || tab.get() == target)
                on_click=Callback::new(move |_| tab.set(target))
            >
                {target.label()}
            </Tab>
        }
    };

    view! {
        <div class="app-shell app-music">
            <aside class="music-sidebar">
                <div class="music-brand">
                    <Icon icon=IconName::Music size=IconSize::Md color="#ffffff" />
                    <span>"Groove Music"</span>
                </div>
                <TextField
                    layout_class="music-search"
                    leading_icon=IconName::Search
                    placeholder="Search"
                    aria_label="Search songs"
                    value=Signal::derive(move || query.get())
                    on_input=Callback::new(move |value| query.set(value))
                />
                <TabList layout_class="music-tabs" aria_label="Library">
                    {tab_button(MusicTab::Favourites, IconName::Heart)}
                    {tab_button(MusicTab::AllSongs, IconName::Globe)}
                </TabList>
            </aside>

            <main class="music-main">
                <header class="music-hero" data-tab=move || tab.get().label()>
                    <Heading level=1>{move || tab.get().heading()}</Heading>
                    <Text tone=TextTone::Secondary>
                        {move || format!("{} songs", visible.with(Vec::len))}
                    </Text>
                </header>
                <div class="music-list" role="list">
                    {move || {
                        let songs = visible.get();
                        if songs.is_empty() {
                            return view! { <EmptyState icon=IconName::Music message="No songs found." /> }
                                .into_view();
                        }
                        songs
                            .into_iter()
                            .enumerate()
                            .map(|(index, song)| view! { <SongRow index song player /> })
                            .collect_view()
                    }}
                </div>
            </main>

            <footer class="music-player-bar">
                <div class="music-now-playing">
                    {move || match player.with(|p| p.current.clone()) {
                        Some(song) => view! {
                            <div>
                                <div class="music-now-title">{song.title}</div>
                                <div class="music-now-artist">{song.artist}</div>
                            </div>
                        }
                        .into_view(),
                        None => view! { <Text tone=TextTone::Secondary>"Nothing playing"</Text> }
                            .into_view(),
                    }}
                </div>
                <div class="music-transport">
                    <div class="music-buttons">
                        <IconButton
                            icon=IconName::SkipBack
                            aria_label="Previous"
                            on_click=Callback::new(move |_| play_previous())
                        />
                        <IconButton
                            icon=Signal::derive(move || {
                                if player.with(|p| p.playing) { IconName::Pause } else { IconName::Play }
                            })
                            aria_label=Signal::derive(move || {
                                if player.with(|p| p.playing) { "Pause" } else { "Play" }.to_string()
                            })
                            on_click=Callback::new(move |_| player.update(PlayerState::toggle))
                        />
                        <IconButton
                            icon=IconName::SkipForward
                            aria_label="Next"
                            on_click=Callback::new(move |_| play_next())
                        />
                    </div>
                    <div class="music-progress">
                        <span>{move || format_time(progress.get())}</span>
                        <RangeField
                            aria_label="Seek"
                            step=0.1
                            value=Signal::derive(move || {
                                let total = duration.get();
                                if total.is_finite() && total > 0.0 {
                                    progress.get() / total * 100.0
                                } else {
                                    0.0
                                }
                            })
                            on_input=Callback::new(seek)
                        />
                        <span>{move || format_time(duration.get())}</span>
                    </div>
                </div>
                <div class="music-volume">
                    <IconButton
                        icon=Signal::derive(move || {
                            if muted.get() { IconName::VolumeX } else { IconName::Volume2 }
                        })
                        aria_label=Signal::derive(move || {
                            if muted.get() { "Unmute" } else { "Mute" }.to_string()
                        })
                        on_click=Callback::new(move |_| muted.update(|m| *m = !*m))
                    />
                    <RangeField
                        aria_label="Volume"
                        step=5.0
                        value=Signal::derive(move || volume.get())
                        on_input=Callback::new(move |value| volume.set(value))
                    />
                </div>
            </footer>

            <audio
                node_ref=audio_ref
                on:timeupdate=move |_| sync_time()
                on:loadedmetadata=move |_| sync_time()
                on:ended=move |_| play_next()
            ></audio>
        </div>
    }
}

#[component]
fn SongRow(index: usize, song: Song, player: RwSignal<PlayerState>) -> impl IntoView {
    let url = song.url.clone();
    let is_current = Signal::derive(move || {
        player.with(|p| p.current.as_ref().is_some_and(|current| current.url == url))
    });
    let title = song.title.clone();
    let artist = song.artist.clone();
    let song = store_value(song);

    view! {
        <button
            class="music-row"
            class:music-row-current=move || is_current.get()
            role="listitem"
            on:click=move |_| player.update(|p| p.select(song.get_value()))
        >
            <span class="music-row-index">
                {move || {
                    if is_current.get() && player.with(|p| p.playing) {
                        view! { <Icon icon=IconName::Volume2 size=IconSize::Xs /> }.into_view()
                    } else {
                        (index + 1).into_view()
                    }
                }}
            </span>
            <span class="music-row-title">{title}</span>
            <span class="music-row-artist">{artist}</span>
        </button>
    }
}
