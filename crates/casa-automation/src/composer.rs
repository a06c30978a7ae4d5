//! Top-level trigger composer
//!
//! The add-trigger dialog: a three-way kind switch over the sub-flow drafts.
//! Completion rules differ per kind; any successful completion resets the
//! whole dialog to its initial defaults.

use thiserror::Error;

use crate::condition::{ConditionFlow, FlowError};
use crate::sun_editor::SunDraft;
use crate::time_editor::TimeDraft;
use crate::trigger::Trigger;

/// Which sub-flow the dialog is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerKind {
    #[default]
    State,
    Time,
    Sun,
}

impl TriggerKind {
    /// All kinds in tab order
    pub const ALL: [TriggerKind; 3] = [TriggerKind::State, TriggerKind::Time, TriggerKind::Sun];
}

/// Errors that keep the dialog open
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// Time triggers need a time of day before they can complete
    #[error("time of day is required")]
    MissingTimeOfDay,

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// The add-trigger dialog state
#[derive(Debug, Clone, Default)]
pub struct TriggerComposer {
    kind: TriggerKind,
    pub condition: ConditionFlow,
    pub time: TimeDraft,
    pub sun: SunDraft,
}

impl TriggerComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> TriggerKind {
        self.kind
    }

    /// Switch sub-flows; drafts keep their contents until completion
    pub fn set_kind(&mut self, kind: TriggerKind) {
        self.kind = kind;
    }

    /// Whether the completion control should be enabled
    pub fn can_complete(&self) -> bool {
        match self.kind {
            TriggerKind::State => self.condition.can_submit(),
            TriggerKind::Time => !self.time.time_of_day.is_empty(),
            TriggerKind::Sun => true,
        }
    }

    /// Complete the dialog and emit the trigger for the active kind
    ///
    /// State defers to the condition flow, time requires a non-empty time
    /// of day, sun always completes. On success every draft resets and the
    /// kind switch returns to its default.
    pub fn complete(&mut self) -> Result<Trigger, ComposeError> {
        let trigger = match self.kind {
            TriggerKind::State => Trigger::State(self.condition.submit()?),
            TriggerKind::Time => {
                if self.time.time_of_day.is_empty() {
                    return Err(ComposeError::MissingTimeOfDay);
                }
                Trigger::Time(self.time.emit())
            }
            TriggerKind::Sun => Trigger::Sun(self.sun.emit()),
        };

        *self = Self::new();
        Ok(trigger)
    }
}
