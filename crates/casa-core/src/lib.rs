//! Core types for Casa
//!
//! This crate provides the fundamental types shared across the Casa control
//! panel: entity and device records as the backend reports them, the
//! variant-shaped state payload, the capability set, the color model, and
//! display-name normalization.

mod color;
mod entity;
mod name;
mod state;

pub use color::{ColorPreset, ColorState};
pub use entity::{Capability, Device, Entity, EntityId, EntityIdError, EntityKind, HardwareType};
pub use name::display_name;
pub use state::{format_number, StateValue};

/// State value used when the backend has not reported one yet
pub const STATE_UNKNOWN: &str = "unknown";
