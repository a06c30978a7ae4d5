//! Trigger wire shapes
//!
//! These are the exact objects the backend automation engine accepts.
//! Exactly one shape per trigger; the authoring flows guarantee no partial
//! tuple is ever emitted.

use casa_core::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trigger as sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "trigger_type", rename_all = "snake_case")]
pub enum Trigger {
    /// Fires when an entity attribute compares true against a literal
    State(StateTrigger),

    /// Fires at a time of day, optionally on selected weekdays
    Time(TimeTrigger),

    /// Fires at a sun event, offset by minutes
    Sun(SunTrigger),
}

/// State comparison trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTrigger {
    pub entity_id: EntityId,
    pub entity_name: String,
    pub attribute: String,
    pub operator: Operator,
    /// Literal compared against; kept as text the way it was typed
    pub value: String,
}

/// Time-of-day trigger
///
/// `days_of_week` uses 0=Mon..6=Sun, sorted ascending. Absent means every
/// day; the authoring flow normalizes an empty selection to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTrigger {
    /// `HH:MM` by convention; the format is hinted, not enforced
    pub time_of_day: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
}

/// Sun event trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTrigger {
    pub sun_event: SunEvent,

    /// Minutes relative to the event; negative fires before it
    pub sun_offset: i32,
}

/// Comparison operators offered by the condition flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "==")]
    Equal,
}

impl Operator {
    /// All operators in picker order
    pub const ALL: [Operator; 3] = [Operator::GreaterThan, Operator::LessThan, Operator::Equal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::Equal => "==",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five sun events the backend understands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunEvent {
    #[default]
    Sunrise,
    Sunset,
    Dawn,
    Dusk,
    Noon,
}

impl SunEvent {
    /// All events in picker order
    pub const ALL: [SunEvent; 5] = [
        SunEvent::Sunrise,
        SunEvent::Sunset,
        SunEvent::Dawn,
        SunEvent::Dusk,
        SunEvent::Noon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SunEvent::Sunrise => "sunrise",
            SunEvent::Sunset => "sunset",
            SunEvent::Dawn => "dawn",
            SunEvent::Dusk => "dusk",
            SunEvent::Noon => "noon",
        }
    }
}

impl fmt::Display for SunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
