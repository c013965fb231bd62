//! Persistence contracts for lightweight browser-backed state.

pub mod prefs;
