//! Desktop shell runtime: window state, reducer, host effects, and the shell UI.

pub mod apps;
pub mod components;
mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{
    load_desktop_prefs, load_power_state, persist_desktop_prefs, persist_power_state,
};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
