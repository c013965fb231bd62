//! Photos app: a zoomable viewer for the image named by the window's launch payload.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

const ZOOM_STEP: f64 = 0.5;
const MIN_ZOOM: f64 = 0.5;
const MAX_ZOOM: f64 = 4.0;

fn zoom_in(scale: f64) -> f64 {
    (scale + ZOOM_STEP).min(MAX_ZOOM)
}

fn zoom_out(scale: f64) -> f64 {
    (scale - ZOOM_STEP).max(MIN_ZOOM)
}

fn zoom_label(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round())
}

#[component]
/// Photos window contents.
pub fn PhotosApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let launch_data = context.launch_data;
    let scale = create_rw_signal(1.0_f64);
    let fullscreen = create_rw_signal(false);
    let viewer_ref = create_node_ref::<html::Div>();

    // Each newly opened photo starts unzoomed.
    create_effect(move |_| {
        launch_data.with(|_| ());
        scale.set(1.0);
    });

    move || {
        let Some((url, name)) = launch_data.with(|data| {
            data.as_ref()
                .and_then(|data| data.url.clone().map(|url| (url, data.name.clone().unwrap_or_default())))
        }) else {
            return view! {
                <div class="app-shell app-photos-empty">
                    <EmptyState icon=IconName::Image message="No photo selected" />
                    <Text tone=TextTone::Secondary>"Open an image from File Manager"</Text>
                </div>
            }
            .into_view();
        };

        view! {
            <div class="app-shell app-photos" node_ref=viewer_ref>
                <ToolBar layout_class="photos-toolbar" aria_label="Zoom">
                    <IconButton
                        icon=IconName::ZoomOut
                        aria_label="Zoom out"
                        disabled=Signal::derive(move || scale.get() <= MIN_ZOOM)
                        on_click=Callback::new(move |_| scale.update(|s| *s = zoom_out(*s)))
                    />
                    <span class="photos-zoom">{move || zoom_label(scale.get())}</span>
                    <IconButton
                        icon=IconName::ZoomIn
                        aria_label="Zoom in"
                        disabled=Signal::derive(move || scale.get() >= MAX_ZOOM)
                        on_click=Callback::new(move |_| scale.update(|s| *s = zoom_in(*s)))
                    />
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| scale.set(1.0))
                    >
                        "Reset"
                    </Button>
                    <IconButton
                        icon=Signal::derive(move || {
                            if fullscreen.get() { IconName::Minimize } else { IconName::Maximize }
                        })
                        aria_label="Toggle fullscreen"
                        on_click=Callback::new(move |_| {
                            if let Some(viewer) = viewer_ref.get_untracked() {
                                fullscreen.set(toggle_fullscreen(&viewer));
                            }
                        })
                    />
                </ToolBar>
                <div class="photos-stage">
                    <img
                        class="photos-image"
                        src=url
                        alt=name.clone()
                        title=name
                        style=move || format!("transform:scale({});", scale.get())
                    />
                </div>
            </div>
        }
        .into_view()
    }
}
