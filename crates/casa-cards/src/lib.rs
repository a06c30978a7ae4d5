//! Entity display dispatch and card view models for Casa
//!
//! The dispatcher maps every entity to exactly one card kind; the card view
//! models turn entity state into display strings and user input into control
//! patches. Everything here is pure: cards never talk to a backend, they
//! build [`ControlRequest`] values for the shell to forward.

mod dispatch;
mod light;
mod motor;
mod request;
mod sensor;
mod slider;
mod toggle;

pub use dispatch::{card_for, CardKind};
pub use light::{LightCard, LightSupport};
pub use motor::{MotorCard, MotorDirection, MOTOR_STEP_COUNT};
pub use request::ControlRequest;
pub use sensor::{ClimateCard, SingleValueCard, TempHumidityCard};
pub use slider::Slider;
pub use toggle::{BinaryToggleCard, ToggleCard};

/// Shown wherever a reading is missing from the state payload
pub const VALUE_PLACEHOLDER: &str = "--";
