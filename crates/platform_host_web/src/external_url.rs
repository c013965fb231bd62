//! External URL adapter that opens links in a new browser tab.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open(url, "_blank")`.
pub struct WebExternalUrlService;

impl WebExternalUrlService {
    /// Opens `url` in a new tab.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no window or the popup was blocked.
    pub fn open_in_new_tab(self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let opened = window
                .open_with_url_and_target(url, "_blank")
                .map_err(|e| format!("window.open failed: {e:?}"))?;
            if opened.is_none() {
                return Err(format!("popup blocked for `{url}`"));
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(format!(
                "cannot open `{url}`: external urls need a browser window"
            ))
        }
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move { service.open_in_new_tab(url) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn opening_outside_a_browser_reports_the_url() {
        let err = block_on(WebExternalUrlService.open_url("https://www.google.com"))
            .expect_err("no window");
        assert!(err.contains("https://www.google.com"), "{err}");
    }
}
