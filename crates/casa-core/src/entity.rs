//! Entity and device records as reported by the backend device store
//!
//! These types mirror the wire shapes the store publishes. Casa only reads
//! them; all mutation happens in the backend and is reflected through fresh
//! snapshots.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::StateValue;

/// Error type for invalid entity IDs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntityIdError {
    #[error("entity id cannot be empty")]
    Empty,
}

/// Backend-issued identifier for a single entity
///
/// The backend owns the id scheme; Casa treats ids as opaque non-empty
/// strings and never derives meaning from their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Create a new EntityId, rejecting empty strings
    pub fn new(id: impl Into<String>) -> Result<Self, EntityIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EntityIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = EntityIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse entity classification
///
/// The set is open: backends may report kinds this build does not know, and
/// those survive round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    Sensor,
    Switch,
    Light,
    Fan,
    Stepper,
    Other(String),
}

impl EntityKind {
    /// Wire tag for this kind
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::Sensor => "sensor",
            EntityKind::Switch => "switch",
            EntityKind::Light => "light",
            EntityKind::Fan => "fan",
            EntityKind::Stepper => "stepper",
            EntityKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EntityKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "sensor" => EntityKind::Sensor,
            "switch" => EntityKind::Switch,
            "light" => EntityKind::Light,
            "fan" => EntityKind::Fan,
            "stepper" => EntityKind::Stepper,
            _ => EntityKind::Other(tag),
        }
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Specific sensor/actuator model tag
///
/// More precise than [`EntityKind`]; used to pick specialized card layouts.
/// Unknown tags are preserved through `Other` so newer backends keep working
/// against older panels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HardwareType {
    Dht11,
    Dht22,
    Bme280,
    Bmp280,
    Ds18b20,
    Pir,
    ReedSwitch,
    SoilMoistureCapacitive,
    Bh1750,
    UltrasonicHcsr04,
    Co2Mhz19,
    StepperUln2003,
    StepperA4988,
    Other(String),
}

impl HardwareType {
    /// Wire tag for this hardware type
    pub fn as_str(&self) -> &str {
        match self {
            HardwareType::Dht11 => "dht11",
            HardwareType::Dht22 => "dht22",
            HardwareType::Bme280 => "bme280",
            HardwareType::Bmp280 => "bmp280",
            HardwareType::Ds18b20 => "ds18b20",
            HardwareType::Pir => "pir",
            HardwareType::ReedSwitch => "reed_switch",
            HardwareType::SoilMoistureCapacitive => "soil_moisture_capacitive",
            HardwareType::Bh1750 => "bh1750",
            HardwareType::UltrasonicHcsr04 => "ultrasonic_hcsr04",
            HardwareType::Co2Mhz19 => "co2_mhz19",
            HardwareType::StepperUln2003 => "stepper_uln2003",
            HardwareType::StepperA4988 => "stepper_a4988",
            HardwareType::Other(tag) => tag,
        }
    }
}

impl From<String> for HardwareType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "dht11" => HardwareType::Dht11,
            "dht22" => HardwareType::Dht22,
            "bme280" => HardwareType::Bme280,
            "bmp280" => HardwareType::Bmp280,
            "ds18b20" => HardwareType::Ds18b20,
            "pir" => HardwareType::Pir,
            "reed_switch" => HardwareType::ReedSwitch,
            "soil_moisture_capacitive" => HardwareType::SoilMoistureCapacitive,
            "bh1750" => HardwareType::Bh1750,
            "ultrasonic_hcsr04" => HardwareType::UltrasonicHcsr04,
            "co2_mhz19" => HardwareType::Co2Mhz19,
            "stepper_uln2003" => HardwareType::StepperUln2003,
            "stepper_a4988" => HardwareType::StepperA4988,
            _ => HardwareType::Other(tag),
        }
    }
}

impl From<HardwareType> for String {
    fn from(hw: HardwareType) -> Self {
        hw.as_str().to_string()
    }
}

/// Optional feature a light entity advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Brightness,
    Color,
    Rgbw,
}

/// A single observable or controllable endpoint on a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Backend-issued identifier
    pub id: EntityId,

    /// Raw entity name; display code runs it through [`crate::display_name`]
    pub name: String,

    /// Coarse classification
    #[serde(rename = "entity_type")]
    pub kind: EntityKind,

    /// Specific model tag, when the backend knows it
    #[serde(
        rename = "hardware_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hardware: Option<HardwareType>,

    /// Last reported state payload; shape varies by kind
    #[serde(default)]
    pub state: StateValue,

    /// Whether the backend accepts control patches for this entity
    #[serde(default)]
    pub is_controllable: bool,

    /// Advertised optional features
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub capabilities: HashSet<Capability>,

    /// When the backend last updated the state payload
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Entity {
    /// Create a new entity with an unknown state and no capabilities
    pub fn new(id: EntityId, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hardware: None,
            state: StateValue::default(),
            is_controllable: false,
            capabilities: HashSet::new(),
            last_updated: Utc::now(),
        }
    }

    /// Set the hardware type
    pub fn with_hardware(mut self, hardware: HardwareType) -> Self {
        self.hardware = Some(hardware);
        self
    }

    /// Set the state payload
    pub fn with_state(mut self, state: StateValue) -> Self {
        self.state = state;
        self
    }

    /// Mark the entity as accepting control patches
    pub fn controllable(mut self) -> Self {
        self.is_controllable = true;
        self
    }

    /// Add a capability
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Check whether a capability is advertised
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// The physical or network unit hosting one or more entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Backend-issued device identifier
    pub id: String,

    /// Raw device name
    pub name: String,

    /// Whether the device is currently reachable
    #[serde(default = "default_online")]
    pub online: bool,

    /// Entities hosted by this device
    #[serde(default)]
    pub entities: Vec<Entity>,
}

fn default_online() -> bool {
    true
}

impl Device {
    /// Create a new online device with no entities
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            online: true,
            entities: Vec::new(),
        }
    }

    /// Add an entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Mark the device as unreachable
    pub fn offline(mut self) -> Self {
        self.online = false;
        self
    }

    /// Find a hosted entity by id
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }
}
