//! Entity-to-card dispatch
//!
//! One entity, one card. The precedence below is fixed and first-match-wins;
//! changing the order changes what users see, so every rule is pinned by a
//! test.

use casa_core::{Entity, EntityKind, HardwareType};
use serde::Serialize;

/// The card variants the dashboard can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Combined temperature/humidity readout
    TempHumidity,
    /// Temperature/humidity/pressure readout
    Climate,
    /// One scalar reading with a label
    SingleValue,
    /// Binary sensor rendered with a toggle affordance
    BinaryToggle,
    /// Power, brightness, and color controls
    Light,
    /// Direction and speed controls
    Motor,
    /// Generic on/off control
    Toggle,
    /// Read-only fallback
    Sensor,
}

/// Pick the card for an entity
///
/// Total over every entity: unknown hardware and kinds fall through to the
/// later rules, and the final arm always answers. Hardware-specific rules
/// outrank kind-based ones, so a `dht22` reporting `entity_type: light`
/// still renders as a temperature card.
pub fn card_for(entity: &Entity) -> CardKind {
    // 1-4: hardware decides
    if let Some(hardware) = &entity.hardware {
        match hardware {
            HardwareType::Dht11 | HardwareType::Dht22 => return CardKind::TempHumidity,
            HardwareType::Bme280 | HardwareType::Bmp280 => return CardKind::Climate,
            HardwareType::Ds18b20
            | HardwareType::SoilMoistureCapacitive
            | HardwareType::Bh1750
            | HardwareType::UltrasonicHcsr04
            | HardwareType::Co2Mhz19 => return CardKind::SingleValue,
            HardwareType::Pir | HardwareType::ReedSwitch => return CardKind::BinaryToggle,
            _ => {}
        }
    }

    // 5: lights get the full control card
    if entity.kind == EntityKind::Light {
        return CardKind::Light;
    }

    // 6: steppers by hardware or by kind
    if matches!(
        entity.hardware,
        Some(HardwareType::StepperUln2003) | Some(HardwareType::StepperA4988)
    ) || entity.kind == EntityKind::Stepper
    {
        return CardKind::Motor;
    }

    // 7-8: generic on/off for fans, switches, and anything controllable
    if matches!(entity.kind, EntityKind::Fan | EntityKind::Switch) || entity.is_controllable {
        return CardKind::Toggle;
    }

    // 9: read-only fallback
    CardKind::Sensor
}
