//! Fullscreen toggling for app surfaces such as the photo viewer and the video player.

/// Leaves fullscreen when the document is already fullscreen, otherwise requests it for
/// `element`. Returns whether the document should now be fullscreen.
#[cfg(target_arch = "wasm32")]
pub fn toggle_fullscreen(element: &web_sys::Element) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        false
    } else {
        element.request_fullscreen().is_ok()
    }
}

/// Host builds have no document; fullscreen is never entered.
#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_fullscreen(_element: &web_sys::Element) -> bool {
    false
}
