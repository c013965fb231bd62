//! Shared structural, shell, overlay, data-display and control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;
mod overlays;
mod shell;

pub use controls::{Button, IconButton, ProgressBar, RangeField, TextField};
pub use data_display::{Badge, Card, EmptyState, Heading, Text};
pub use navigation::{StatusBar, Tab, TabList, ToolBar};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, Modal};
pub use shell::{
    DesktopBackdrop, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Taskbar, TaskbarButton,
    TaskbarSection, TrayButton, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic text tones.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary/muted text.
    Secondary,
    /// Accent text.
    Accent,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn clamp_percent(value: f64, min: f64, max: f64) -> f64 {
    let span = (max - min).max(f64::EPSILON);
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("taskbar-start")),
            "ui-button taskbar-start"
        );
    }

    #[test]
    fn percent_is_clamped_into_track() {
        assert_eq!(clamp_percent(50.0, 0.0, 100.0), 50.0);
        assert_eq!(clamp_percent(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp_percent(-3.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp_percent(2.0, 0.0, 0.0), 100.0);
    }
}
