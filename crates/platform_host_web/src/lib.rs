//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on the host target as an inert fallback so the runtime and its tests
//! build without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;
pub mod preload;
pub mod storage;

pub use adapters::{asset_preload_service, build_host_services, external_url_service, prefs_store};
pub use external_url::WebExternalUrlService;
pub use preload::WebAssetPreloadService;
pub use storage::local_prefs::WebPrefsStore;
