//! Built-in app catalog: window defaults, launcher visibility, icons and mount functions.

use desktop_app_browser::BrowserApp;
use desktop_app_contract::{AppModule, AppMountContext, ApplicationId};
use desktop_app_files::FileManagerApp;
use desktop_app_music::MusicApp;
use desktop_app_personalization::PersonalizationApp;
use desktop_app_photos::PhotosApp;
use desktop_app_portfolio::{AboutApp, GamesApp, IntroApp, ProjectsApp, SkillsApp};
use desktop_app_video_player::VideoPlayerApp;
use leptos::*;
use system_ui::IconName;

use crate::model::{DesktopState, SortOrder, WindowSize};

pub const INTRO_APP_ID: &str = "intro";
pub const PERSONALIZATION_APP_ID: &str = "personalization";

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: &'static str,
    pub title: &'static str,
    pub size: WindowSize,
    pub icon: IconName,
    pub icon_color: &'static str,
    pub show_on_desktop: bool,
    pub show_in_start_menu: bool,
    pub module: AppModule,
}

impl AppDescriptor {
    pub fn application_id(&self) -> ApplicationId {
        ApplicationId::trusted(self.app_id)
    }
}

const fn size(w: i32, h: i32) -> WindowSize {
    WindowSize { w, h }
}

fn mount_intro(context: AppMountContext) -> View {
    view! { <IntroApp context /> }.into_view()
}

fn mount_about(context: AppMountContext) -> View {
    view! { <AboutApp context /> }.into_view()
}

fn mount_skills(_: AppMountContext) -> View {
    view! { <SkillsApp /> }.into_view()
}

fn mount_projects(context: AppMountContext) -> View {
    view! { <ProjectsApp context /> }.into_view()
}

fn mount_games(_: AppMountContext) -> View {
    view! { <GamesApp /> }.into_view()
}

fn mount_files(context: AppMountContext) -> View {
    view! { <FileManagerApp context /> }.into_view()
}

fn mount_browser(context: AppMountContext) -> View {
    view! { <BrowserApp context /> }.into_view()
}

fn mount_music(context: AppMountContext) -> View {
    view! { <MusicApp context /> }.into_view()
}

fn mount_video_player(context: AppMountContext) -> View {
    view! { <VideoPlayerApp context /> }.into_view()
}

fn mount_photos(context: AppMountContext) -> View {
    view! { <PhotosApp context /> }.into_view()
}

fn mount_personalization(context: AppMountContext) -> View {
    view! { <PersonalizationApp context /> }.into_view()
}

const APP_REGISTRY: [AppDescriptor; 11] = [
    AppDescriptor {
        app_id: INTRO_APP_ID,
        title: "Introduction",
        size: size(700, 500),
        icon: IconName::Rocket,
        icon_color: "#f97316",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_intro),
    },
    AppDescriptor {
        app_id: "about",
        title: "About Me",
        size: size(900, 700),
        icon: IconName::User,
        icon_color: "#60a5fa",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_about),
    },
    AppDescriptor {
        app_id: "skills",
        title: "Skills",
        size: size(800, 600),
        icon: IconName::Code,
        icon_color: "#34d399",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_skills),
    },
    AppDescriptor {
        app_id: "projects",
        title: "Projects",
        size: size(1000, 700),
        icon: IconName::Briefcase,
        icon_color: "#fbbf24",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_projects),
    },
    AppDescriptor {
        app_id: "games",
        title: "Games",
        size: size(900, 600),
        icon: IconName::Gamepad,
        icon_color: "#a78bfa",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_games),
    },
    AppDescriptor {
        app_id: "files",
        title: "File Manager",
        size: size(900, 600),
        icon: IconName::FolderOpen,
        icon_color: "#facc15",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_files),
    },
    AppDescriptor {
        app_id: "browser",
        title: "Browser",
        size: size(1000, 700),
        icon: IconName::Globe,
        icon_color: "#38bdf8",
        show_on_desktop: true,
        show_in_start_menu: true,
        module: AppModule::new(mount_browser),
    },
    AppDescriptor {
        app_id: "music",
        title: "Music",
        size: size(900, 600),
        icon: IconName::Music,
        icon_color: "#f472b6",
        show_on_desktop: false,
        show_in_start_menu: true,
        module: AppModule::new(mount_music),
    },
    AppDescriptor {
        app_id: "video-player",
        title: "Video Player",
        size: size(800, 500),
        icon: IconName::PlayCircle,
        icon_color: "#ef4444",
        show_on_desktop: false,
        show_in_start_menu: true,
        module: AppModule::new(mount_video_player),
    },
    AppDescriptor {
        app_id: "photos",
        title: "Photos",
        size: size(800, 600),
        icon: IconName::Image,
        icon_color: "#2dd4bf",
        show_on_desktop: false,
        show_in_start_menu: true,
        module: AppModule::new(mount_photos),
    },
    AppDescriptor {
        app_id: PERSONALIZATION_APP_ID,
        title: "Personalization",
        size: size(800, 600),
        icon: IconName::Palette,
        icon_color: "#c084fc",
        show_on_desktop: false,
        show_in_start_menu: false,
        module: AppModule::new(mount_personalization),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: &ApplicationId) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.app_id == app_id.as_str())
}

pub fn intro_application_id() -> ApplicationId {
    ApplicationId::trusted(INTRO_APP_ID)
}

pub fn personalization_application_id() -> ApplicationId {
    ApplicationId::trusted(PERSONALIZATION_APP_ID)
}

/// Desktop icons in the requested order; `None` keeps registry order.
pub fn desktop_icon_apps(order: SortOrder) -> Vec<&'static AppDescriptor> {
    let mut apps: Vec<_> = app_registry()
        .iter()
        .filter(|entry| entry.show_on_desktop)
        .collect();
    match order {
        SortOrder::NameAsc => apps.sort_by_key(|entry| entry.title.to_lowercase()),
        SortOrder::NameDesc => {
            apps.sort_by_key(|entry| std::cmp::Reverse(entry.title.to_lowercase()))
        }
        SortOrder::None => {}
    }
    apps
}

/// Start menu entries whose title contains `query`, ignoring case. An empty query lists all.
pub fn start_menu_apps(query: &str) -> Vec<&'static AppDescriptor> {
    let needle = query.to_lowercase();
    app_registry()
        .iter()
        .filter(|entry| entry.show_in_start_menu)
        .filter(|entry| needle.is_empty() || entry.title.to_lowercase().contains(&needle))
        .collect()
}

/// Taskbar icons: desktop apps in registry order, then any other open windows in stack order.
pub fn taskbar_apps(state: &DesktopState) -> Vec<&'static AppDescriptor> {
    let mut apps = desktop_icon_apps(SortOrder::None);
    for window in &state.windows {
        if apps.iter().any(|entry| entry.app_id == window.app_id.as_str()) {
            continue;
        }
        if let Some(entry) = app_descriptor(&window.app_id) {
            apps.push(entry);
        }
    }
    apps
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppLaunchData;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::InteractionState,
        reducer::{reduce_desktop, DesktopAction},
    };

    fn ids(apps: &[&AppDescriptor]) -> Vec<&'static str> {
        apps.iter().map(|entry| entry.app_id).collect()
    }

    #[test]
    fn registry_ids_are_valid_and_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for entry in app_registry() {
            assert!(ApplicationId::new(entry.app_id).is_ok(), "{}", entry.app_id);
            assert!(seen.insert(entry.app_id), "duplicate {}", entry.app_id);
        }
        assert!(app_descriptor(&intro_application_id()).is_some());
        assert!(app_descriptor(&personalization_application_id()).is_some());
    }

    #[test]
    fn desktop_icons_sort_by_title() {
        assert_eq!(
            ids(&desktop_icon_apps(SortOrder::None)),
            vec!["intro", "about", "skills", "projects", "games", "files", "browser"]
        );
        assert_eq!(
            ids(&desktop_icon_apps(SortOrder::NameAsc)),
            vec!["about", "browser", "files", "games", "intro", "projects", "skills"]
        );
        assert_eq!(
            ids(&desktop_icon_apps(SortOrder::NameDesc)),
            vec!["skills", "projects", "intro", "games", "files", "browser", "about"]
        );
    }

    #[test]
    fn start_menu_search_is_case_insensitive_substring() {
        assert_eq!(start_menu_apps("").len(), 10);
        assert_eq!(ids(&start_menu_apps("PLAY")), vec!["video-player"]);
        assert_eq!(ids(&start_menu_apps(" o ")), Vec::<&str>::new());
        assert_eq!(
            ids(&start_menu_apps("o")),
            vec!["intro", "about", "projects", "browser", "video-player", "photos"]
        );
        assert!(start_menu_apps("personal").is_empty());
    }

    #[test]
    fn taskbar_appends_open_non_desktop_apps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for (app, data) in [
            ("photos", Some(AppLaunchData::media("/assets/images/sakura.street.webp", "sakura.street"))),
            ("about", None),
            ("music", None),
        ] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::LaunchApp {
                    app_id: ApplicationId::trusted(app),
                    data,
                },
            )
            .expect("launch");
        }

        assert_eq!(
            ids(&taskbar_apps(&state)),
            vec![
                "intro", "about", "skills", "projects", "games", "files", "browser", "photos",
                "music"
            ]
        );
    }
}
