//! Shared UI primitive library for the desktop shell and its apps.
//!
//! The crate owns reusable Leptos primitives, the centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the desktop stylesheet. Apps compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod fullscreen;
mod icon;
mod primitives;

pub use fullscreen::toggle_fullscreen;
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, DesktopBackdrop, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, EmptyState, Heading, IconButton, MenuItem, MenuSeparator, MenuSurface,
    Modal, ProgressBar, RangeField, StatusBar, Tab, TabList, Taskbar, TaskbarButton,
    TaskbarSection, Text, TextField, TextTone, ToolBar, TrayButton, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, EmptyState, Heading, Icon, IconButton,
        IconName, IconSize, MenuItem, MenuSeparator, MenuSurface, Modal, ProgressBar, RangeField,
        StatusBar, Tab, TabList, Text, TextField, TextTone, ToolBar,
    };
    pub use crate::toggle_fullscreen;
}
