//! Image preloading and timers for the boot sequence.

use platform_host::{AssetPreloadFuture, AssetPreloadService};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, Default)]
/// Preloads images with `HTMLImageElement.decode()` and sleeps with `setTimeout`.
pub struct WebAssetPreloadService;

#[cfg(target_arch = "wasm32")]
async fn decode_image(url: &str) -> Result<(), String> {
    let image = web_sys::HtmlImageElement::new()
        .map_err(|e| format!("image element unavailable: {e:?}"))?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map(|_| ())
        .map_err(|e| format!("image decode failed for `{url}`: {e:?}"))
}

#[cfg(target_arch = "wasm32")]
async fn timeout(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

impl AssetPreloadService for WebAssetPreloadService {
    fn preload_image<'a>(&'a self, url: &'a str) -> AssetPreloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if url.trim().is_empty() {
                return Ok(());
            }

            #[cfg(target_arch = "wasm32")]
            {
                decode_image(url).await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(())
            }
        })
    }

    fn sleep_ms<'a>(&'a self, ms: u32) -> AssetPreloadFuture<'a, ()> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            timeout(ms).await;

            #[cfg(not(target_arch = "wasm32"))]
            let _ = ms;
        })
    }
}
