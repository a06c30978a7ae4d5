//! Motor control card

use casa_core::{display_name, Entity, EntityId};
use serde::Serialize;
use serde_json::json;

use crate::request::ControlRequest;
use crate::slider::Slider;

/// Steps sent per direction press
pub const MOTOR_STEP_COUNT: i64 = 100;

const SPEED_MIN: i64 = 0;
const SPEED_MAX: i64 = 100;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorDirection {
    Left,
    Right,
}

impl MotorDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotorDirection::Left => "left",
            MotorDirection::Right => "right",
        }
    }
}

/// Direction and speed controls for stepper motors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotorCard {
    pub entity_id: EntityId,
    pub title: String,
    /// Current speed reading
    pub speed: Option<i64>,
    pub enabled: bool,
}

impl MotorCard {
    pub fn from_entity(entity: &Entity, device_online: bool) -> Self {
        Self {
            entity_id: entity.id.clone(),
            title: display_name(&entity.name),
            speed: entity.state.field_f64("speed").map(|s| s as i64),
            enabled: device_online,
        }
    }

    /// Request a fixed-size step in the given direction
    pub fn step(&self, direction: MotorDirection) -> Option<ControlRequest> {
        if !self.enabled {
            return None;
        }
        Some(ControlRequest::new(
            self.entity_id.clone(),
            json!({ "direction": direction.as_str(), "steps": MOTOR_STEP_COUNT }),
        ))
    }

    /// The speed slider for this motor
    pub fn speed_slider(&self) -> Slider {
        Slider::new(SPEED_MIN, SPEED_MAX).enabled(self.enabled)
    }

    /// Request a speed change from a raw slider position
    pub fn set_speed(&self, raw: f64) -> Option<ControlRequest> {
        let value = self.speed_slider().emit(raw)?;
        Some(ControlRequest::new(
            self.entity_id.clone(),
            json!({ "speed": value }),
        ))
    }
}
