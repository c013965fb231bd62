//! Typed host-domain contracts and shared models used across the desktop runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference store,
//! external URL and asset preload service traits, time helpers, and the bundled media catalog,
//! while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod media;
pub mod preload;
pub mod storage;
pub mod time;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::HostServices;
pub use media::{
    asset_display_name, bundled_media_catalog, MediaCatalog, MediaLink, BUNDLED_MEDIA_CATALOG,
};
pub use preload::{AssetPreloadFuture, AssetPreloadService, NoopAssetPreloadService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{local_datetime_now, unix_time_ms_now};
