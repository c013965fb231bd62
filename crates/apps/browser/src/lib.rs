//! Browser app: an iframe with an address bar, back/forward history and an optional CORS proxy.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppMountContext;
use leptos::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use system_ui::prelude::*;

const HOME_URL: &str = "https://www.google.com/webhp?igu=1";
const HOME_ADDRESS: &str = "https://www.google.com";
const PROXY_PREFIX: &str = "https://api.allorigins.win/raw?url=";
const PROXY_HOST: &str = "api.allorigins.win";

/// Characters `encodeURIComponent` leaves alone.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Turns address-bar input into a frame URL.
///
/// Bare words become a Google search and skip the proxy. YouTube watch links are rewritten to
/// their embeddable form.
pub fn process_url(input: &str, proxy: bool) -> String {
    let mut target = input.to_string();
    if !target.starts_with("http") {
        if target.contains('.') && !target.contains(' ') {
            target = format!("https://{target}");
        } else {
            return format!(
                "https://www.google.com/search?q={}&igu=1",
                utf8_percent_encode(&target, QUERY_COMPONENT)
            );
        }
    }

    if target.contains("youtube.com/watch?v=") {
        target = target.replacen("watch?v=", "embed/", 1);
    } else if let Some((_, id)) = target.split_once("youtu.be/") {
        target = format!("https://www.youtube.com/embed/{id}");
    }

    if proxy && !target.contains(PROXY_HOST) {
        target = format!("{PROXY_PREFIX}{target}");
    }
    target
}

/// `url` without the proxy prefix.
pub fn strip_proxy(url: &str) -> &str {
    url.strip_prefix(PROXY_PREFIX).unwrap_or(url)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BrowserSession {
    history: Vec<String>,
    index: usize,
    /// Bumped whenever the frame must reload even if its URL is unchanged.
    frame_key: u32,
    proxy: bool,
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self {
            history: vec![HOME_URL.to_string()],
            index: 0,
            frame_key: 0,
            proxy: false,
        }
    }
}

impl BrowserSession {
    fn current(&self) -> &str {
        self.history
            .get(self.index)
            .map(String::as_str)
            .unwrap_or(HOME_URL)
    }

    fn clean_current(&self) -> &str {
        strip_proxy(self.current())
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    fn navigate(&mut self, input: &str) {
        let target = process_url(input, self.proxy);
        self.history.truncate(self.index + 1);
        self.history.push(target);
        self.index = self.history.len() - 1;
        self.frame_key += 1;
    }

    fn back(&mut self) {
        if self.can_go_back() {
            self.index -= 1;
        }
    }

    fn forward(&mut self) {
        if self.can_go_forward() {
            self.index += 1;
        }
    }

    fn reload(&mut self) {
        self.frame_key += 1;
    }

    fn toggle_proxy(&mut self) {
        self.proxy = !self.proxy;
        let reprocessed = process_url(self.clean_current(), self.proxy);
        if let Some(entry) = self.history.get_mut(self.index) {
            *entry = reprocessed;
        }
        self.frame_key += 1;
    }
}

#[component]
/// Browser window contents.
pub fn BrowserApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let links = context.services.links;
    let session = create_rw_signal(BrowserSession::default());
    let address = create_rw_signal(HOME_ADDRESS.to_string());

    // Moving through history rewrites the address bar with the clean URL.
    create_effect(move |previous: Option<(usize, String)>| {
        let current = session.with(|s| (s.index, s.clean_current().to_string()));
        if previous.is_some_and(|previous| previous != current) {
            address.set(current.1.clone());
        }
        current
    });

    let proxy = Signal::derive(move || session.with(|s| s.proxy));
    let frame = move || {
        let (key, src) = session.with(|s| (s.frame_key, s.current().to_string()));
        view! {
            <iframe
                class="browser-frame"
                data-frame-key=key
                src=src
                title="Browser"
                sandbox="allow-scripts allow-same-origin allow-forms allow-popups allow-presentation allow-downloads"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
            ></iframe>
        }
    };

    view! {
        <div class="app-shell app-browser">
            <ToolBar layout_class="browser-toolbar" aria_label="Navigation">
                <IconButton
                    icon=IconName::ArrowLeft
                    aria_label="Back"
                    disabled=Signal::derive(move || session.with(|s| !s.can_go_back()))
                    on_click=Callback::new(move |_| session.update(BrowserSession::back))
                />
                <IconButton
                    icon=IconName::ArrowRight
                    aria_label="Forward"
                    disabled=Signal::derive(move || session.with(|s| !s.can_go_forward()))
                    on_click=Callback::new(move |_| session.update(BrowserSession::forward))
                />
                <IconButton
                    icon=IconName::RotateCw
                    aria_label="Reload"
                    on_click=Callback::new(move |_| session.update(BrowserSession::reload))
                />
                <form
                    class="browser-address"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        let input = address.get_untracked();
                        session.update(|s| s.navigate(&input));
                    }
                >
                    <TextField
                        leading_icon=IconName::Search
                        placeholder="Search Google or type a URL"
                        aria_label="Address"
                        value=Signal::derive(move || address.get())
                        on_input=Callback::new(move |value| address.set(value))
                    />
                </form>
                <IconButton
                    icon=Signal::derive(move || {
                        if proxy.get() { IconName::Shield } else { IconName::ShieldOff }
                    })
                    aria_label=Signal::derive(move || {
                        if proxy.get() {
                            "Disable AllOrigins Proxy"
                        } else {
                            "Enable AllOrigins Proxy"
                        }
                        .to_string()
                    })
                    pressed=proxy
                    on_click=Callback::new(move |_| session.update(BrowserSession::toggle_proxy))
                />
                <IconButton
                    icon=IconName::ExternalLink
                    aria_label="Open in new tab"
                    on_click=Callback::new(move |_| {
                        links.open(session.with_untracked(|s| s.clean_current().to_string()))
                    })
                />
            </ToolBar>

            <div class="browser-viewport">
                {frame}
            </div>

            <StatusBar layout_class="browser-status">
                <span>
                    {move || {
                        if proxy.get() { "Proxy: AllOrigins (May fix some sites)" } else { "Proxy: OFF" }
                    }}
                </span>
                <span>"Address bar cannot sync with external sites"</span>
            </StatusBar>
        </div>
    }
}
