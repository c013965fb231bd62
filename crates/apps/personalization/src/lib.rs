//! Personalization app: previews the current wallpaper and offers online and bundled pictures.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, WallpaperService};
use leptos::*;
use platform_host::MediaLink;
use system_ui::prelude::*;

/// A selectable wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallpaper {
    /// Tile caption.
    pub name: &'static str,
    /// Image URL.
    pub url: &'static str,
}

/// Wallpapers fetched from Unsplash. The first entry is the desktop default.
pub const ONLINE_WALLPAPERS: [Wallpaper; 10] = [
    Wallpaper {
        name: "Default",
        url: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop",
    },
    Wallpaper {
        name: "Abstract Blue",
        url: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=1600&q=80",
    },
    Wallpaper {
        name: "Mountain",
        url: "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?w=1600&q=80",
    },
    Wallpaper {
        name: "City Lights",
        url: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?w=1600&q=80",
    },
    Wallpaper {
        name: "Forest",
        url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1600&q=80",
    },
    Wallpaper {
        name: "Sunset",
        url: "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?w=1600&q=80",
    },
    Wallpaper {
        name: "Deep Space",
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1600&q=80",
    },
    Wallpaper {
        name: "Minimal",
        url: "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?w=1600&q=80",
    },
    Wallpaper {
        name: "Desert",
        url: "https://images.unsplash.com/photo-1473580044384-7ba9967e16a0?w=1600&q=80",
    },
    Wallpaper {
        name: "Ocean",
        url: "https://images.unsplash.com/photo-1505118380757-91f5f5632de0?w=1600&q=80",
    },
];

fn preview_style(current: &str) -> String {
    if current.is_empty() {
        "background:#202020;".to_string()
    } else {
        format!("background:url('{current}') center/cover;")
    }
}

#[component]
/// Personalization window contents.
pub fn PersonalizationApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let wallpaper = context.services.wallpaper;
    let local = context.services.media.local_images();

    let online_tiles = ONLINE_WALLPAPERS
        .iter()
        .map(|wp| view! { <WallpaperTile name=wp.name.to_string() url=wp.url.to_string() wallpaper /> })
        .collect_view();

    let local_section = if local.is_empty() {
        view! { <EmptyState icon=IconName::Image message="No local images found" /> }.into_view()
    } else {
        view! {
            <div class="wallpaper-grid">
                {local
                    .into_iter()
                    .map(|MediaLink { name, link }| view! { <WallpaperTile name url=link wallpaper /> })
                    .collect_view()}
            </div>
        }
        .into_view()
    };

    view! {
        <div class="app-shell app-personalization">
            <header class="personalization-header">
                <Heading level=2>"Background"</Heading>
                <Text tone=TextTone::Secondary>"Personalize your desktop background"</Text>
            </header>

            <div
                class="wallpaper-preview"
                style=move || wallpaper.current.with(|current| preview_style(current))
            >
                <span class="wallpaper-preview-label">"Current Background"</span>
            </div>

            <section class="wallpaper-section">
                <Heading level=3>"Online Wallpapers"</Heading>
                <div class="wallpaper-grid">{online_tiles}</div>
            </section>

            <section class="wallpaper-section">
                <Heading level=3>"Local Wallpapers"</Heading>
                {local_section}
            </section>
        </div>
    }
}

#[component]
fn WallpaperTile(name: String, url: String, wallpaper: WallpaperService) -> impl IntoView {
    let loading = create_rw_signal(true);
    let selected = {
        let url = url.clone();
        move || wallpaper.current.with(|current| *current == url)
    };
    let target = url.clone();

    view! {
        <button
            type="button"
            class="wallpaper-tile"
            class:wallpaper-tile-selected=selected.clone()
            aria-pressed={
                let selected = selected.clone();
                move || selected().to_string()
            }
            title=name.clone()
            on:click=move |_| wallpaper.set(target.clone())
        >
            <Show when=move || loading.get()>
                <span class="wallpaper-tile-loader">
                    <Icon icon=IconName::Loader size=IconSize::Sm />
                </span>
            </Show>
            <img
                src=url
                alt=name.clone()
                class:wallpaper-tile-loading=move || loading.get()
                on:load=move |_| loading.set(false)
            />
            <span class="wallpaper-tile-name">{name}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn online_wallpapers_have_unique_urls() {
        let mut urls = ONLINE_WALLPAPERS.iter().map(|wp| wp.url).collect::<Vec<_>>();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), ONLINE_WALLPAPERS.len());
        assert_eq!(ONLINE_WALLPAPERS[0].name, "Default");
    }

    #[test]
    fn empty_wallpaper_previews_as_solid_fill() {
        assert_eq!(preview_style(""), "background:#202020;");
        assert_eq!(
            preview_style("/assets/images/a.jpg"),
            "background:url('/assets/images/a.jpg') center/cover;"
        );
    }
}
