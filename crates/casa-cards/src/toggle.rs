//! On/off cards

use casa_core::{display_name, Entity, EntityId};
use serde::Serialize;
use serde_json::json;

use crate::request::ControlRequest;

fn toggle_patch(on: bool) -> serde_json::Value {
    json!({ "value": if on { "ON" } else { "OFF" } })
}

// =============================================================================
// Generic on/off card (fans, switches, controllable fallback)
// =============================================================================

/// Generic on/off control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleCard {
    pub entity_id: EntityId,
    pub title: String,
    pub is_on: bool,
    /// False while the owning device is offline
    pub enabled: bool,
}

impl ToggleCard {
    pub fn from_entity(entity: &Entity, device_online: bool) -> Self {
        Self {
            entity_id: entity.id.clone(),
            title: display_name(&entity.name),
            is_on: entity.state.is_active(),
            enabled: device_online,
        }
    }

    /// Request the given power state, or nothing while disabled
    pub fn set(&self, on: bool) -> Option<ControlRequest> {
        if !self.enabled {
            return None;
        }
        Some(ControlRequest::new(self.entity_id.clone(), toggle_patch(on)))
    }

    /// Request the opposite of the current state
    pub fn toggle(&self) -> Option<ControlRequest> {
        self.set(!self.is_on)
    }
}

// =============================================================================
// Binary sensor card (pir, reed_switch)
// =============================================================================

/// Binary sensor rendered with the toggle affordance
///
/// PIR and reed switches are sensors, but they share the switch layout.
/// Emitting still works; whether a write means anything is the backend's
/// call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryToggleCard {
    pub entity_id: EntityId,
    pub title: String,
    pub is_on: bool,
    pub enabled: bool,
}

impl BinaryToggleCard {
    pub fn from_entity(entity: &Entity, device_online: bool) -> Self {
        Self {
            entity_id: entity.id.clone(),
            title: display_name(&entity.name),
            is_on: entity.state.is_active(),
            enabled: device_online,
        }
    }

    /// Request the given state, or nothing while disabled
    pub fn set(&self, on: bool) -> Option<ControlRequest> {
        if !self.enabled {
            return None;
        }
        Some(ControlRequest::new(self.entity_id.clone(), toggle_patch(on)))
    }
}
