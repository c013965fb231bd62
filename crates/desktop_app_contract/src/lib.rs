//! Shared contract types between the desktop window manager runtime and the apps it hosts.
//!
//! Apps never touch the window manager directly. They receive an [`AppMountContext`] carrying
//! their launch payload and a small set of service handles, and every request they make back to
//! the shell travels as an [`AppCommand`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, View};
use platform_host::MediaCatalog;
use serde::{Deserialize, Serialize};

/// Stable identifier for an app in the desktop catalog.
///
/// Each app has at most one window, so the app id also identifies its window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase kebab-case token.
    ///
    /// # Errors
    ///
    /// Returns an error describing the accepted shape when `raw` is rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected lowercase kebab-case like `video-player`"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for trusted catalog constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }
    let bytes = raw.as_bytes();
    bytes[0].is_ascii_lowercase()
        && !raw.ends_with('-')
        && !raw.contains("--")
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Optional payload handed to an app when it is launched, e.g. the media it should open.
pub struct AppLaunchData {
    /// URL of the media or page to open.
    pub url: Option<String>,
    /// Human-readable name shown by the app.
    pub name: Option<String>,
}

impl AppLaunchData {
    /// Payload pointing at one named media file.
    pub fn media(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request sent from an app to the desktop shell.
pub enum AppCommand {
    /// Launch (or focus) another app, optionally replacing its launch payload.
    LaunchApp {
        /// App to launch.
        app_id: ApplicationId,
        /// Payload for the launched app.
        data: Option<AppLaunchData>,
    },
    /// Replace the desktop wallpaper.
    SetWallpaper {
        /// Image URL of the new wallpaper.
        url: String,
    },
    /// Open a link outside the desktop.
    OpenExternalUrl {
        /// Absolute URL.
        url: String,
    },
}

#[derive(Clone, Copy)]
/// Launches other apps.
pub struct LauncherService {
    sender: Callback<AppCommand>,
}

impl LauncherService {
    /// Launches `app_id` with an optional payload.
    pub fn launch(&self, app_id: ApplicationId, data: Option<AppLaunchData>) {
        self.sender.call(AppCommand::LaunchApp { app_id, data });
    }
}

#[derive(Clone, Copy)]
/// Reads and replaces the desktop wallpaper.
pub struct WallpaperService {
    sender: Callback<AppCommand>,
    /// Current wallpaper URL.
    pub current: Signal<String>,
}

impl WallpaperService {
    /// Replaces the wallpaper.
    pub fn set(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::SetWallpaper { url: url.into() });
    }
}

#[derive(Clone, Copy)]
/// Opens links in a new browser tab.
pub struct LinkService {
    sender: Callback<AppCommand>,
}

impl LinkService {
    /// Opens `url` outside the desktop.
    pub fn open(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenExternalUrl { url: url.into() });
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// App launching.
    pub launcher: LauncherService,
    /// Wallpaper query and selection.
    pub wallpaper: WallpaperService,
    /// External links.
    pub links: LinkService,
    /// Media known to the desktop.
    pub media: MediaCatalog,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(
        sender: Callback<AppCommand>,
        wallpaper: Signal<String>,
        media: MediaCatalog,
    ) -> Self {
        Self {
            launcher: LauncherService { sender },
            wallpaper: WallpaperService {
                sender,
                current: wallpaper,
            },
            links: LinkService { sender },
            media,
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window.
pub struct AppMountContext {
    /// App id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Latest launch payload. Relaunching an open app with new data updates this signal.
    pub launch_data: Signal<Option<AppLaunchData>>,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn application_id_accepts_kebab_case_only() {
        assert!(ApplicationId::new("intro").is_ok());
        assert!(ApplicationId::new("video-player").is_ok());
        assert!(ApplicationId::new("m3u").is_ok());
        assert!(ApplicationId::new("").is_err());
        assert!(ApplicationId::new("Photos").is_err());
        assert!(ApplicationId::new("video-").is_err());
        assert!(ApplicationId::new("video--player").is_err());
        assert!(ApplicationId::new("system.files").is_err());
        assert!(ApplicationId::new("3d-viewer").is_err());
    }

    #[test]
    fn launch_data_serializes_with_optional_fields() {
        let data = AppLaunchData::media("/assets/videos/ocean-waves.webm", "ocean-waves");
        let raw = serde_json::to_string(&data).expect("serialize");
        assert_eq!(
            raw,
            r#"{"url":"/assets/videos/ocean-waves.webm","name":"ocean-waves"}"#
        );
        let empty: AppLaunchData = serde_json::from_str(r#"{"url":null,"name":null}"#)
            .expect("deserialize");
        assert_eq!(empty, AppLaunchData::default());
    }

    #[test]
    fn services_forward_commands_to_the_shell() {
        let _ = leptos::create_runtime();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sink = sent.clone();
        let services = AppServices::new(
            Callback::new(move |command| sink.borrow_mut().push(command)),
            Signal::derive(|| "wallpaper.jpg".to_string()),
            MediaCatalog::default(),
        );

        services.launcher.launch(
            ApplicationId::trusted("photos"),
            Some(AppLaunchData::media("a.png", "a")),
        );
        services.wallpaper.set("b.jpg");
        services.links.open("https://www.google.com");

        assert_eq!(
            sent.borrow().clone(),
            vec![
                AppCommand::LaunchApp {
                    app_id: ApplicationId::trusted("photos"),
                    data: Some(AppLaunchData::media("a.png", "a")),
                },
                AppCommand::SetWallpaper {
                    url: "b.jpg".to_string()
                },
                AppCommand::OpenExternalUrl {
                    url: "https://www.google.com".to_string()
                },
            ]
        );
    }
}
