//! Control requests built by cards

use casa_core::EntityId;
use serde::Serialize;
use serde_json::Value;

/// A control patch addressed to one entity
///
/// The patch is partial: only the fields the user changed are present. The
/// shell forwards requests to the device store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlRequest {
    pub entity_id: EntityId,
    pub patch: Value,
}

impl ControlRequest {
    pub fn new(entity_id: EntityId, patch: Value) -> Self {
        Self { entity_id, patch }
    }
}
