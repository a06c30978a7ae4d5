//! Slider input mapping

use serde::Serialize;

/// An integer slider over a fixed range
///
/// The slider does not hold the current value; it maps raw drag positions to
/// the integers a card may emit. Disabled sliders emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub enabled: bool,
}

impl Slider {
    /// Slider over `[min, max]` with step 1, enabled
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            step: 1,
            enabled: true,
        }
    }

    /// Override the step size
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step.max(1);
        self
    }

    /// Enable or disable emission
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Map a raw position to the value to emit
    ///
    /// Rounds to the nearest step multiple and clamps into range. Returns
    /// `None` while disabled.
    pub fn emit(&self, raw: f64) -> Option<i64> {
        if !self.enabled {
            return None;
        }
        let step = self.step as f64;
        let snapped = (raw / step).round() * step;
        let value = snapped as i64;
        Some(value.clamp(self.min, self.max))
    }
}
