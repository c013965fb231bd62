use leptos::{logging, spawn_local};

use crate::host::DesktopHostContext;

/// Inner size of the browser window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewportSize {
    pub w: i32,
    pub h: i32,
}

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(crate) fn desktop_viewport_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return ViewportSize {
                w: width.max(320),
                h: height.max(240),
            };
        }
    }

    ViewportSize { w: 1024, h: 768 }
}
