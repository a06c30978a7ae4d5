//! Trigger model and authoring flows for Casa
//!
//! A trigger is one of three wire shapes (state comparison, time of day,
//! sun event) consumed by the backend automation engine. This crate owns
//! those shapes and the flows that author them: the stepped entity-condition
//! wizard, the single-screen time and sun editors, and the composer that
//! ties them together. The flows are plain state: no I/O, no timers, just
//! transitions and emission.

mod composer;
mod condition;
mod sun_editor;
mod time_editor;
mod trigger;

pub use composer::{ComposeError, TriggerComposer, TriggerKind};
pub use condition::{
    condition_attributes, ConditionFlow, ConditionStep, FlowError, InvalidTransition,
};
pub use sun_editor::{describe_offset, SunDraft, OFFSET_STEP, QUICK_OFFSETS};
pub use time_editor::{TimeDraft, DAY_LABELS};
pub use trigger::{Operator, StateTrigger, SunEvent, SunTrigger, TimeTrigger, Trigger};
