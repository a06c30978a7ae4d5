//! Light control card

use casa_core::{display_name, Capability, ColorPreset, ColorState, Entity, EntityId};
use serde::Serialize;
use serde_json::json;

use crate::request::ControlRequest;
use crate::slider::Slider;

/// Which light controls to offer
///
/// Detection precedence: explicit capability flags win, then a `color_mode`
/// state field, then the shape of the state payload itself. Backends that
/// declare capabilities get exactly what they declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightSupport {
    pub brightness: bool,
    pub color: bool,
    pub white_channel: bool,
}

impl LightSupport {
    pub fn detect(entity: &Entity) -> Self {
        if !entity.capabilities.is_empty() {
            let rgbw = entity.has_capability(Capability::Rgbw);
            return Self {
                brightness: entity.has_capability(Capability::Brightness),
                color: entity.has_capability(Capability::Color) || rgbw,
                white_channel: rgbw,
            };
        }

        if let Some(mode) = entity.state.field_str("color_mode") {
            return match mode {
                "rgbw" => Self {
                    brightness: true,
                    color: true,
                    white_channel: true,
                },
                "rgb" => Self {
                    brightness: true,
                    color: true,
                    white_channel: false,
                },
                "brightness" => Self {
                    brightness: true,
                    color: false,
                    white_channel: false,
                },
                _ => Self {
                    brightness: false,
                    color: false,
                    white_channel: false,
                },
            };
        }

        let color = entity.state.field("color");
        Self {
            brightness: entity.state.field("brightness").is_some(),
            color: color.is_some(),
            white_channel: color.map(|c| c.get("w").is_some()).unwrap_or(false),
        }
    }
}

/// Full light control: power, brightness, color presets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCard {
    pub entity_id: EntityId,
    pub title: String,
    pub is_on: bool,
    /// Current brightness reading, 0-255
    pub brightness: Option<i64>,
    /// Current color, when the state carries one
    pub color: Option<ColorState>,
    pub support: LightSupport,
    pub enabled: bool,
}

impl LightCard {
    pub fn from_entity(entity: &Entity, device_online: bool) -> Self {
        // Power lives in the `power` field; older firmwares report `state`
        let power = entity
            .state
            .field_str("power")
            .or_else(|| entity.state.field_str("state"));
        let is_on = match power {
            Some(text) => text.eq_ignore_ascii_case("on"),
            None => entity.state.is_active(),
        };

        let color = entity
            .state
            .field("color")
            .and_then(|v| serde_json::from_value(v.clone()).ok());

        Self {
            entity_id: entity.id.clone(),
            title: display_name(&entity.name),
            is_on,
            brightness: entity.state.field_f64("brightness").map(|b| b as i64),
            color,
            support: LightSupport::detect(entity),
            enabled: device_online,
        }
    }

    /// Request the given power state, or nothing while disabled
    pub fn set_power(&self, on: bool) -> Option<ControlRequest> {
        if !self.enabled {
            return None;
        }
        Some(ControlRequest::new(
            self.entity_id.clone(),
            json!({ "power": if on { "ON" } else { "OFF" } }),
        ))
    }

    /// The brightness slider for this light
    pub fn brightness_slider(&self) -> Slider {
        Slider::new(0, 255).enabled(self.enabled && self.support.brightness)
    }

    /// Request a brightness change from a raw slider position
    pub fn set_brightness(&self, raw: f64) -> Option<ControlRequest> {
        let value = self.brightness_slider().emit(raw)?;
        Some(ControlRequest::new(
            self.entity_id.clone(),
            json!({ "brightness": value }),
        ))
    }

    /// Request a preset color, merged over the current color
    ///
    /// Only the r/g/b channels change; a white channel in the current color
    /// rides along untouched.
    pub fn select_preset(&self, preset: ColorPreset) -> Option<ControlRequest> {
        if !self.enabled || !self.support.color {
            return None;
        }
        let merged = preset.apply_to(self.color.as_ref());
        Some(ControlRequest::new(
            self.entity_id.clone(),
            json!({ "color": merged }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_core::EntityKind;
    use serde_json::Value;

    fn light(state: Value) -> Entity {
        Entity::new(EntityId::new("lamp").unwrap(), "corner_lamp", EntityKind::Light)
            .with_state(serde_json::from_value(state).unwrap())
            .controllable()
    }

    #[test]
    fn test_power_patch() {
        let card = LightCard::from_entity(&light(json!({"power": "OFF"})), true);
        assert!(!card.is_on);

        let request = card.set_power(true).unwrap();
        assert_eq!(request.patch, json!({"power": "ON"}));
    }

    #[test]
    fn test_power_falls_back_to_state_field() {
        let card = LightCard::from_entity(&light(json!({"state": "ON"})), true);
        assert!(card.is_on);
    }

    #[test]
    fn test_capability_flags_win() {
        let entity = light(json!({"power": "ON", "color": {"r": 1, "g": 2, "b": 3}}))
            .with_capability(Capability::Brightness);
        let support = LightSupport::detect(&entity);
        // Declared capabilities override what the payload suggests
        assert!(support.brightness);
        assert!(!support.color);
    }

    #[test]
    fn test_color_mode_detection() {
        let card = LightCard::from_entity(&light(json!({"power": "ON", "color_mode": "rgbw"})), true);
        assert!(card.support.color);
        assert!(card.support.white_channel);

        let card = LightCard::from_entity(
            &light(json!({"power": "ON", "color_mode": "brightness"})),
            true,
        );
        assert!(card.support.brightness);
        assert!(!card.support.color);
    }

    #[test]
    fn test_payload_shape_detection() {
        let card = LightCard::from_entity(
            &light(json!({"power": "ON", "brightness": 128, "color": {"r": 0, "g": 0, "b": 0, "w": 5}})),
            true,
        );
        assert!(card.support.brightness);
        assert!(card.support.color);
        assert!(card.support.white_channel);
    }

    #[test]
    fn test_brightness_slider_rounds_and_clamps() {
        let card = LightCard::from_entity(&light(json!({"power": "ON", "brightness": 10})), true);
        let request = card.set_brightness(300.0).unwrap();
        assert_eq!(request.patch, json!({"brightness": 255}));

        let request = card.set_brightness(127.6).unwrap();
        assert_eq!(request.patch, json!({"brightness": 128}));
    }

    #[test]
    fn test_preset_preserves_white_channel() {
        let card = LightCard::from_entity(
            &light(json!({"power": "ON", "color": {"r": 255, "g": 0, "b": 0, "w": 128}})),
            true,
        );
        let request = card.select_preset(ColorPreset::Blue).unwrap();
        assert_eq!(request.patch, json!({"color": {"r": 0, "g": 0, "b": 255, "w": 128}}));
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let card = LightCard::from_entity(
            &light(json!({"power": "ON", "brightness": 40, "color": {"r": 1, "g": 2, "b": 3}})),
            false,
        );
        assert!(card.set_power(false).is_none());
        assert!(card.set_brightness(10.0).is_none());
        assert!(card.select_preset(ColorPreset::Red).is_none());
    }

    #[test]
    fn test_color_gate() {
        let card = LightCard::from_entity(&light(json!({"power": "ON", "brightness": 40})), true);
        assert!(!card.support.color);
        assert!(card.select_preset(ColorPreset::Red).is_none());
    }
}
