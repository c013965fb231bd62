//! Virtual folder tree over the media catalog and the path-stack navigator that walks it.

use desktop_app_contract::{AppLaunchData, ApplicationId};
use platform_host::{MediaCatalog, MediaLink};

pub(crate) const ROOT_ID: &str = "root";
pub(crate) const PICTURES_ID: &str = "pictures";
pub(crate) const VIDEOS_ID: &str = "videos";

const PHOTOS_APP_ID: &str = "photos";
const VIDEO_PLAYER_APP_ID: &str = "video-player";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileKind {
    Folder,
    Image,
    Video,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileNode {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    /// Media URL for images and videos.
    pub url: Option<String>,
    pub children: Vec<FileNode>,
}

impl FileNode {
    fn folder(id: &str, name: &str, children: Vec<FileNode>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::Folder,
            url: None,
            children,
        }
    }

    fn media(id: String, kind: FileKind, link: MediaLink) -> Self {
        Self {
            id,
            name: link.name,
            kind,
            url: Some(link.link),
            children: Vec::new(),
        }
    }

    fn find(&self, id: &str) -> Option<&FileNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

fn media_nodes(prefix: &str, kind: FileKind, links: Vec<MediaLink>) -> Vec<FileNode> {
    links
        .into_iter()
        .enumerate()
        .map(|(index, link)| FileNode::media(format!("{prefix}-{index}"), kind, link))
        .collect()
}

/// `This PC > { Pictures > { Collected, images.. }, Videos > { Collected, videos.. } }`.
pub(crate) fn build_file_tree(catalog: &MediaCatalog) -> FileNode {
    let mut pictures = vec![FileNode::folder(
        "collected-images",
        "Collected",
        media_nodes(
            "collected-image",
            FileKind::Image,
            catalog.collected_images.clone(),
        ),
    )];
    pictures.extend(media_nodes("image", FileKind::Image, catalog.local_images()));

    let mut videos = vec![FileNode::folder(
        "collected-videos",
        "Collected",
        media_nodes(
            "collected-video",
            FileKind::Video,
            catalog.collected_videos.clone(),
        ),
    )];
    videos.extend(media_nodes("video", FileKind::Video, catalog.local_videos()));

    FileNode::folder(
        ROOT_ID,
        "This PC",
        vec![
            FileNode::folder(PICTURES_ID, "Pictures", pictures),
            FileNode::folder(VIDEOS_ID, "Videos", videos),
        ],
    )
}

/// What double-clicking an entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OpenAction {
    Navigate(String),
    Launch {
        app_id: ApplicationId,
        data: AppLaunchData,
    },
    Nothing,
}

pub(crate) fn open_action(node: &FileNode) -> OpenAction {
    let launch = |app_id: &str| match &node.url {
        Some(url) => OpenAction::Launch {
            app_id: ApplicationId::trusted(app_id),
            data: AppLaunchData::media(url.clone(), node.name.clone()),
        },
        None => OpenAction::Nothing,
    };
    match node.kind {
        FileKind::Folder => OpenAction::Navigate(node.id.clone()),
        FileKind::Image => launch(PHOTOS_APP_ID),
        FileKind::Video => launch(VIDEO_PLAYER_APP_ID),
        FileKind::Document => OpenAction::Nothing,
    }
}

/// Stack of folder ids from the root to the current folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileNavigator {
    root: FileNode,
    path: Vec<String>,
}

impl FileNavigator {
    pub fn new(root: FileNode) -> Self {
        let path = vec![root.id.clone()];
        Self { root, path }
    }

    pub fn current(&self) -> &FileNode {
        self.path
            .last()
            .and_then(|id| self.root.find(id))
            .unwrap_or(&self.root)
    }

    pub fn can_go_up(&self) -> bool {
        self.path.len() > 1
    }

    /// Enters a child folder of the current folder. Returns `false` for anything else.
    pub fn enter(&mut self, folder_id: &str) -> bool {
        let is_child_folder = self
            .current()
            .children
            .iter()
            .any(|child| child.id == folder_id && child.kind == FileKind::Folder);
        if is_child_folder {
            self.path.push(folder_id.to_string());
        }
        is_child_folder
    }

    pub fn up(&mut self) -> bool {
        if !self.can_go_up() {
            return false;
        }
        self.path.pop();
        true
    }

    /// Jumps to a top-level location from the sidebar.
    pub fn jump(&mut self, folder_id: &str) -> bool {
        if folder_id == self.root.id {
            self.path.truncate(1);
            return true;
        }
        let is_top_level = self
            .root
            .children
            .iter()
            .any(|child| child.id == folder_id && child.kind == FileKind::Folder);
        if is_top_level {
            self.path = vec![self.root.id.clone(), folder_id.to_string()];
        }
        is_top_level
    }

    pub fn breadcrumb(&self) -> String {
        self.path
            .iter()
            .filter_map(|id| self.root.find(id))
            .map(|node| node.name.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    pub fn visible_entries(&self, query: &str) -> Vec<FileNode> {
        let needle = query.to_lowercase();
        self.current()
            .children
            .iter()
            .filter(|node| needle.is_empty() || node.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> MediaCatalog {
        MediaCatalog {
            images: vec!["/assets/images/quiet-lake.jpg".to_string()],
            videos: vec!["/assets/videos/ocean-waves.webm".to_string()],
            collected_images: vec![MediaLink {
                name: "Dunes".to_string(),
                link: "https://img.example/dunes.jpg".to_string(),
            }],
            collected_videos: vec![MediaLink {
                name: "Big Buck Bunny".to_string(),
                link: "https://vid.example/bbb.mp4".to_string(),
            }],
            ..MediaCatalog::default()
        }
    }

    fn names(entries: &[FileNode]) -> Vec<&str> {
        entries.iter().map(|node| node.name.as_str()).collect()
    }

    #[test]
    fn tree_groups_collected_media_before_local_files() {
        let nav = FileNavigator::new(build_file_tree(&catalog()));
        assert_eq!(names(&nav.visible_entries("")), vec!["Pictures", "Videos"]);

        let mut nav = nav;
        assert!(nav.enter(PICTURES_ID));
        assert_eq!(names(&nav.visible_entries("")), vec!["Collected", "quiet-lake"]);
        assert!(nav.enter("collected-images"));
        assert_eq!(names(&nav.visible_entries("")), vec!["Dunes"]);
        assert_eq!(nav.breadcrumb(), "This PC > Pictures > Collected");
    }

    #[test]
    fn up_never_pops_the_root() {
        let mut nav = FileNavigator::new(build_file_tree(&catalog()));
        assert!(!nav.can_go_up());
        assert!(!nav.up());
        assert_eq!(nav.breadcrumb(), "This PC");

        assert!(nav.enter(VIDEOS_ID));
        assert!(nav.up());
        assert_eq!(nav.current().id, ROOT_ID);
    }

    #[test]
    fn enter_rejects_files_and_foreign_folders() {
        let mut nav = FileNavigator::new(build_file_tree(&catalog()));
        assert!(!nav.enter("collected-images"));
        assert!(nav.enter(PICTURES_ID));
        assert!(!nav.enter("image-0"));
        assert_eq!(nav.breadcrumb(), "This PC > Pictures");
    }

    #[test]
    fn sidebar_jump_replaces_the_path() {
        let mut nav = FileNavigator::new(build_file_tree(&catalog()));
        nav.enter(PICTURES_ID);
        nav.enter("collected-images");
        assert!(nav.jump(VIDEOS_ID));
        assert_eq!(nav.breadcrumb(), "This PC > Videos");
        assert!(nav.jump(ROOT_ID));
        assert_eq!(nav.breadcrumb(), "This PC");
        assert!(!nav.jump("collected-videos"));
    }

    #[test]
    fn search_is_case_insensitive_within_the_current_folder() {
        let mut nav = FileNavigator::new(build_file_tree(&catalog()));
        nav.enter(PICTURES_ID);
        assert_eq!(names(&nav.visible_entries("LAKE")), vec!["quiet-lake"]);
        assert!(nav.visible_entries("dunes").is_empty());
    }

    #[test]
    fn media_entries_launch_their_viewer() {
        let tree = build_file_tree(&catalog());
        let video = tree.find("video-0").expect("local video").clone();
        assert_eq!(
            open_action(&video),
            OpenAction::Launch {
                app_id: ApplicationId::trusted("video-player"),
                data: AppLaunchData::media("/assets/videos/ocean-waves.webm", "ocean-waves"),
            }
        );
        let image = tree.find("collected-image-0").expect("collected image").clone();
        assert_eq!(
            open_action(&image),
            OpenAction::Launch {
                app_id: ApplicationId::trusted("photos"),
                data: AppLaunchData::media("https://img.example/dunes.jpg", "Dunes"),
            }
        );
        assert_eq!(
            open_action(&tree.children[0]),
            OpenAction::Navigate(PICTURES_ID.to_string())
        );
    }

    #[test]
    fn documents_do_nothing() {
        let doc = FileNode {
            id: "doc".to_string(),
            name: "notes".to_string(),
            kind: FileKind::Document,
            url: None,
            children: Vec::new(),
        };
        assert_eq!(open_action(&doc), OpenAction::Nothing);
    }
}
