//! Media catalog shared by the file manager, music player and wallpaper picker.
//!
//! The static site cannot list its own asset directories at runtime, so the local asset paths
//! and the curated remote links ship as one JSON document compiled into the binary.

use serde::{Deserialize, Serialize};

/// Bundled catalog document.
pub const BUNDLED_MEDIA_CATALOG: &str = include_str!("../assets/media_catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named remote media link.
pub struct MediaLink {
    /// Display name.
    pub name: String,
    /// Absolute URL of the media file.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Every piece of media the desktop knows about.
pub struct MediaCatalog {
    /// Site-relative paths of bundled pictures.
    pub images: Vec<String>,
    /// Site-relative paths of bundled videos.
    pub videos: Vec<String>,
    /// Site-relative paths of bundled songs.
    pub songs: Vec<String>,
    /// Remote pictures shown under `Pictures > Collected`.
    pub collected_images: Vec<MediaLink>,
    /// Remote videos shown under `Videos > Collected`.
    pub collected_videos: Vec<MediaLink>,
    /// Remote songs listed in the music player's "All Songs" tab.
    pub online_songs: Vec<MediaLink>,
}

impl MediaCatalog {
    /// Parses a catalog document. Missing sections are empty.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a valid catalog document.
    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("media catalog: {e}"))
    }

    /// Bundled pictures as named links.
    pub fn local_images(&self) -> Vec<MediaLink> {
        named_assets(&self.images)
    }

    /// Bundled videos as named links.
    pub fn local_videos(&self) -> Vec<MediaLink> {
        named_assets(&self.videos)
    }

    /// Bundled songs as named links.
    pub fn local_songs(&self) -> Vec<MediaLink> {
        named_assets(&self.songs)
    }
}

/// Parses [`BUNDLED_MEDIA_CATALOG`].
///
/// # Errors
///
/// Returns an error when the bundled document is malformed.
pub fn bundled_media_catalog() -> Result<MediaCatalog, String> {
    MediaCatalog::parse(BUNDLED_MEDIA_CATALOG)
}

/// File name of `path` without its directory or final extension.
///
/// Names without an extension are returned whole.
pub fn asset_display_name(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

fn named_assets(paths: &[String]) -> Vec<MediaLink> {
    paths
        .iter()
        .map(|path| MediaLink {
            name: asset_display_name(path),
            link: path.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_catalog_parses_and_is_populated() {
        let catalog = bundled_media_catalog().expect("bundled catalog");
        assert!(!catalog.images.is_empty());
        assert!(!catalog.collected_videos.is_empty());
        assert!(!catalog.online_songs.is_empty());
    }

    #[test]
    fn display_name_strips_directory_and_last_extension() {
        assert_eq!(asset_display_name("/assets/images/quiet-lake.jpg"), "quiet-lake");
        assert_eq!(asset_display_name("/assets/images/sakura.street.webp"), "sakura.street");
        assert_eq!(asset_display_name("README"), "README");
        assert_eq!(asset_display_name("/assets/.hidden"), ".hidden");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = MediaCatalog::parse(r#"{"songs":["/a/Artist - Title.mp3"]}"#)
            .expect("partial catalog");
        assert!(catalog.images.is_empty());
        assert_eq!(
            catalog.local_songs(),
            vec![MediaLink {
                name: "Artist - Title".to_string(),
                link: "/a/Artist - Title.mp3".to_string(),
            }]
        );
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = MediaCatalog::parse("[1, 2").expect_err("malformed");
        assert!(err.starts_with("media catalog:"), "{err}");
    }
}
