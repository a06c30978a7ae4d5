//! Theme service for Casa
//!
//! One process-wide service owns the light/dark mode and the color palette
//! derived from it. Consumers get the service injected and read the current
//! palette; mode changes go through the explicit setter and are persisted to
//! a versioned prefs file, so the choice survives restarts.

mod palette;
mod service;

pub use palette::{Palette, ThemeMode};
pub use service::{ThemeService, ThemeStorageError};
