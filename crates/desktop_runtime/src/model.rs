use desktop_app_contract::{AppLaunchData, ApplicationId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WALLPAPER: &str = "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop";
pub const DEFAULT_VOLUME: u8 = 100;
pub const TASKBAR_Z_INDEX: u32 = 10_000;
/// Shared by the start menu and the desktop context menu.
pub const START_MENU_Z_INDEX: u32 = 9_999;
/// Windows never render above this, whatever their stack rank.
pub const WINDOW_Z_INDEX_CEILING: u32 = START_MENU_Z_INDEX - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

/// Drag offset of a window from its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 50, y: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub app_id: ApplicationId,
    pub title: String,
    pub size: WindowSize,
    pub position: Option<WindowPosition>,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub data: Option<AppLaunchData>,
}

impl WindowRecord {
    /// Stack rank clamped under the menu and taskbar layers.
    pub fn layer_z_index(&self) -> u32 {
        self.z_index.min(WINDOW_Z_INDEX_CEILING)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Pixel metrics for one desktop icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMetrics {
    pub glyph_px: u16,
    pub tile_width_px: u16,
    pub font_px: u16,
}

pub const COMPACT_VIEWPORT_WIDTH_PX: i32 = 768;

impl IconSize {
    /// Metrics for this size. Narrow viewports always get the medium metrics.
    pub fn metrics(self, viewport_width: i32) -> IconMetrics {
        let size = if viewport_width < COMPACT_VIEWPORT_WIDTH_PX {
            Self::Medium
        } else {
            self
        };
        match size {
            Self::Small => IconMetrics {
                glyph_px: 32,
                tile_width_px: 70,
                font_px: 11,
            },
            Self::Medium => IconMetrics {
                glyph_px: 48,
                tile_width_px: 90,
                font_px: 13,
            },
            Self::Large => IconMetrics {
                glyph_px: 64,
                tile_width_px: 110,
                font_px: 13,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small icons",
            Self::Medium => "Medium icons",
            Self::Large => "Large icons",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    #[default]
    None,
}

/// Desktop appearance settings persisted under the desktop-state key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopPrefs {
    pub wallpaper: String,
    pub icon_size: IconSize,
    pub sort_order: SortOrder,
    /// Bumped by "Auto arrange icons"; icon drag offsets reset whenever it changes.
    pub layout_version: u32,
}

impl Default for DesktopPrefs {
    fn default() -> Self {
        Self {
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            icon_size: IconSize::default(),
            sort_order: SortOrder::default(),
            layout_version: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerState {
    pub is_shut_down: bool,
    pub shutdown_confirm_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioState {
    pub volume: u8,
    pub muted: bool,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkState {
    pub wifi_enabled: bool,
}

impl Default for NetworkState {
    fn default() -> Self {
        Self { wifi_enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootPhase {
    #[default]
    Booting,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    /// Open windows ordered bottom to top.
    pub windows: Vec<WindowRecord>,
    pub active_app: Option<ApplicationId>,
    pub start_menu_open: bool,
    pub prefs: DesktopPrefs,
    pub power: PowerState,
    pub audio: AudioState,
    pub network: NetworkState,
    pub boot: BootPhase,
    /// Whether this page load has already shown the introduction window.
    pub intro_shown: bool,
}

impl DesktopState {
    pub fn window(&self, app_id: &ApplicationId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.app_id == app_id)
    }

    pub fn is_open(&self, app_id: &ApplicationId) -> bool {
        self.window(app_id).is_some()
    }

    pub fn is_active(&self, app_id: &ApplicationId) -> bool {
        self.active_app.as_ref() == Some(app_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: ApplicationId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn windows_render_below_menus_and_taskbar() {
        let mut window = WindowRecord {
            app_id: ApplicationId::trusted("browser"),
            title: "Browser".to_string(),
            size: WindowSize { w: 1000, h: 700 },
            position: None,
            z_index: 4,
            minimized: false,
            maximized: false,
            data: None,
        };
        assert_eq!(window.layer_z_index(), 4);

        window.z_index = u32::MAX;
        assert_eq!(window.layer_z_index(), WINDOW_Z_INDEX_CEILING);
        assert!(window.layer_z_index() < START_MENU_Z_INDEX);
        assert!(START_MENU_Z_INDEX < TASKBAR_Z_INDEX);
    }

    #[test]
    fn icon_metrics_follow_size_on_wide_viewports() {
        assert_eq!(IconSize::Small.metrics(1280).glyph_px, 32);
        assert_eq!(IconSize::Small.metrics(1280).tile_width_px, 70);
        assert_eq!(IconSize::Small.metrics(1280).font_px, 11);
        assert_eq!(IconSize::Large.metrics(1280).glyph_px, 64);
        assert_eq!(IconSize::Large.metrics(1280).tile_width_px, 110);
    }

    #[test]
    fn narrow_viewports_always_use_medium_metrics() {
        let medium = IconSize::Medium.metrics(1280);
        assert_eq!(IconSize::Large.metrics(600), medium);
        assert_eq!(IconSize::Small.metrics(767), medium);
        assert_ne!(IconSize::Small.metrics(768), medium);
    }

    #[test]
    fn prefs_serialize_with_camel_case_keys() {
        let prefs = DesktopPrefs {
            wallpaper: "/assets/images/quiet-lake.jpg".to_string(),
            icon_size: IconSize::Large,
            sort_order: SortOrder::NameDesc,
            layout_version: 3,
        };
        let raw = serde_json::to_string(&prefs).expect("serialize");
        assert_eq!(
            raw,
            r#"{"wallpaper":"/assets/images/quiet-lake.jpg","iconSize":"large","sortOrder":"name-desc","layoutVersion":3}"#
        );
    }

    #[test]
    fn partial_prefs_fill_in_defaults() {
        let prefs: DesktopPrefs =
            serde_json::from_str(r#"{"iconSize":"small"}"#).expect("deserialize");
        assert_eq!(prefs.icon_size, IconSize::Small);
        assert_eq!(prefs.wallpaper, DEFAULT_WALLPAPER);
        assert_eq!(prefs.sort_order, SortOrder::None);
    }
}
