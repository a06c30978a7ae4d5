//! Sun trigger editor
//!
//! Single screen: pick one of the five sun events and an offset in minutes.
//! The offset can be nudged, typed, or quick-set; negative offsets fire
//! before the event.

use crate::trigger::{SunEvent, SunTrigger};

/// Minutes added or removed by one nudge
pub const OFFSET_STEP: i32 = 15;

/// Offsets offered as one-tap presets
pub const QUICK_OFFSETS: [i32; 5] = [-60, -30, 0, 30, 60];

/// Editable sun trigger draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunDraft {
    pub event: SunEvent,
    offset: i32,
}

impl SunDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_event(&mut self, event: SunEvent) {
        self.event = event;
    }

    /// Current offset in minutes
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Set the offset directly, as the quick-set buttons do
    pub fn set_offset(&mut self, minutes: i32) {
        self.offset = minutes;
    }

    /// Nudge the offset up by one step
    pub fn nudge_up(&mut self) {
        self.offset += OFFSET_STEP;
    }

    /// Nudge the offset down by one step
    pub fn nudge_down(&mut self) {
        self.offset -= OFFSET_STEP;
    }

    /// Take the offset from typed input; anything non-numeric becomes 0
    pub fn enter_offset(&mut self, text: &str) {
        self.offset = text.trim().parse().unwrap_or(0);
    }

    /// Human summary of the current offset and event
    pub fn describe(&self) -> String {
        describe_offset(self.offset, self.event)
    }

    /// Build the trigger; a sun draft is always complete
    pub fn emit(&self) -> SunTrigger {
        SunTrigger {
            sun_event: self.event,
            sun_offset: self.offset,
        }
    }
}

/// Render an offset as people read it
///
/// Zero is the event itself. Otherwise the magnitude renders as `{h}h {m}m`
/// with the hour part omitted when zero, followed by "before" or "after"
/// the event name.
pub fn describe_offset(offset: i32, event: SunEvent) -> String {
    if offset == 0 {
        return "At exact event time".to_string();
    }

    let magnitude = offset.unsigned_abs();
    let hours = magnitude / 60;
    let minutes = magnitude % 60;
    let span = if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    };
    let relation = if offset < 0 { "before" } else { "after" };
    format!("{span} {relation} {event}")
}
