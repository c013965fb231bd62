//! Asset preloading used while the boot screen is visible.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`AssetPreloadService`].
pub type AssetPreloadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that fetches and decodes an image ahead of first paint.
pub trait AssetPreloadService {
    /// Resolves once `url` is decoded, or with an error when it cannot be loaded.
    fn preload_image<'a>(&'a self, url: &'a str) -> AssetPreloadFuture<'a, Result<(), String>>;

    /// Resolves after roughly `ms` milliseconds.
    fn sleep_ms<'a>(&'a self, ms: u32) -> AssetPreloadFuture<'a, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Preloader that completes immediately. Used off-browser and in tests.
pub struct NoopAssetPreloadService;

impl AssetPreloadService for NoopAssetPreloadService {
    fn preload_image<'a>(&'a self, _url: &'a str) -> AssetPreloadFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn sleep_ms<'a>(&'a self, _ms: u32) -> AssetPreloadFuture<'a, ()> {
        Box::pin(async {})
    }
}
