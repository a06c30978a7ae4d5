//! Read-only sensor cards
//!
//! All three cards tolerate missing fields: a reading that is not in the
//! state payload renders as the placeholder instead of hiding the row.

use casa_core::{display_name, format_number, Entity, StateValue};
use serde::Serialize;

use crate::VALUE_PLACEHOLDER;

fn reading(value: Option<f64>) -> String {
    match value {
        Some(v) => format_number(v),
        None => VALUE_PLACEHOLDER.to_string(),
    }
}

// =============================================================================
// Temperature/humidity card (dht11, dht22)
// =============================================================================

/// Combined temperature and humidity readout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempHumidityCard {
    pub title: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl TempHumidityCard {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            title: display_name(&entity.name),
            temperature: entity.state.field_f64("temperature"),
            humidity: entity.state.field_f64("humidity"),
        }
    }

    pub fn temperature_display(&self) -> String {
        reading(self.temperature)
    }

    pub fn humidity_display(&self) -> String {
        reading(self.humidity)
    }
}

// =============================================================================
// Climate card (bme280, bmp280)
// =============================================================================

/// Temperature, humidity, and pressure readout
///
/// The pressure row is always shown; a bmp280 without a humidity field shows
/// the placeholder in that row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateCard {
    pub title: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

impl ClimateCard {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            title: display_name(&entity.name),
            temperature: entity.state.field_f64("temperature"),
            humidity: entity.state.field_f64("humidity"),
            pressure: entity.state.field_f64("pressure"),
        }
    }

    pub fn temperature_display(&self) -> String {
        reading(self.temperature)
    }

    pub fn humidity_display(&self) -> String {
        reading(self.humidity)
    }

    pub fn pressure_display(&self) -> String {
        reading(self.pressure)
    }
}

// =============================================================================
// Single-value card (ds18b20, soil moisture, bh1750, hc-sr04, mh-z19)
// =============================================================================

/// Field names probed on object states, most specific reading first
const VALUE_FIELDS: [&str; 8] = [
    "value",
    "state",
    "temperature",
    "distance",
    "co2",
    "lux",
    "moisture",
    "level",
];

/// One scalar reading with a label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleValueCard {
    pub title: String,
    pub value: Option<String>,
}

impl SingleValueCard {
    /// Pick the displayed reading from the state payload
    ///
    /// Scalar states display directly. Object states are probed over the
    /// known field names, then fall back to the first field present, so a
    /// sensor reporting an unanticipated field still shows something.
    pub fn from_entity(entity: &Entity) -> Self {
        let value = match &entity.state {
            StateValue::Fields(fields) => {
                let probed = VALUE_FIELDS
                    .iter()
                    .find_map(|name| fields.get(*name).filter(|v| !v.is_null()))
                    .or_else(|| fields.values().find(|v| !v.is_null()));
                probed.map(|v| match v {
                    serde_json::Value::Number(n) => {
                        n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
                    }
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Bool(b) => if *b { "ON" } else { "OFF" }.to_string(),
                    other => other.to_string(),
                })
            }
            scalar => scalar.scalar_display(),
        };

        Self {
            title: display_name(&entity.name),
            value,
        }
    }

    pub fn display(&self) -> String {
        self.value
            .clone()
            .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string())
    }
}
