//! Entity-condition authoring flow
//!
//! A four-step wizard that builds a [`StateTrigger`]:
//!
//! ```text
//! Entity → Attribute → Operator → Value → (submit resets to Entity)
//!        ←           ←          ←   back, one step at a time
//! ```
//!
//! The step graph is explicit: moving anywhere else is an error, not a
//! silent no-op, and submission is the only way to complete. A submitted
//! trigger always carries all five fields.

use casa_core::{Entity, EntityId, EntityKind};
use thiserror::Error;

use crate::trigger::{Operator, StateTrigger};

/// Error when an invalid wizard transition is attempted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid wizard transition from {from:?} to {to:?}: {reason}")]
pub struct InvalidTransition {
    pub from: ConditionStep,
    pub to: ConditionStep,
    pub reason: &'static str,
}

/// Errors surfaced by the condition flow
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    Transition(#[from] InvalidTransition),

    /// The attribute is not among the candidates derived for the entity
    #[error("attribute not offered for this entity: {0}")]
    UnknownAttribute(String),

    /// A selection is missing at submission; unreachable through the step
    /// graph, kept as a typed error instead of a panic
    #[error("flow selection missing: {0}")]
    Incomplete(&'static str),

    /// Submission while the value text is still empty
    #[error("value must not be empty")]
    EmptyValue,
}

/// The wizard's current step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionStep {
    #[default]
    Entity,
    Attribute,
    Operator,
    Value,
}

impl ConditionStep {
    /// Attempt a transition to another step
    ///
    /// Forward moves advance one step, back moves retreat one step, and
    /// `Value → Entity` is the submit reset. Everything else is invalid.
    pub fn try_transition(self, to: ConditionStep) -> Result<ConditionStep, InvalidTransition> {
        use ConditionStep::*;

        let valid = matches!(
            (self, to),
            (Entity, Attribute)
                | (Attribute, Operator)
                | (Attribute, Entity)
                | (Operator, Value)
                | (Operator, Attribute)
                | (Value, Operator)
                | (Value, Entity)
        );

        if valid {
            Ok(to)
        } else {
            Err(InvalidTransition {
                from: self,
                to,
                reason: Self::transition_error_reason(self, to),
            })
        }
    }

    /// Check a transition without performing it
    pub fn can_transition_to(self, to: ConditionStep) -> bool {
        self.try_transition(to).is_ok()
    }

    /// The step back navigation returns to, if any
    pub fn back_target(self) -> Option<ConditionStep> {
        use ConditionStep::*;
        match self {
            Entity => None,
            Attribute => Some(Entity),
            Operator => Some(Attribute),
            Value => Some(Operator),
        }
    }

    fn transition_error_reason(from: ConditionStep, to: ConditionStep) -> &'static str {
        use ConditionStep::*;
        match (from, to) {
            (Entity, Entity) | (Attribute, Attribute) | (Operator, Operator) | (Value, Value) => {
                "already at this step"
            }
            (Entity, _) => "an entity must be chosen first",
            (Attribute, _) => "an attribute must be chosen before skipping ahead",
            (Operator, _) => "an operator must be chosen before skipping ahead",
            (Value, _) => "the value step only submits or goes back",
        }
    }
}

/// Attribute candidates for an entity, derived from its kind and name
///
/// Pure and case-insensitive on the name. `"temp"` also catches
/// `"temperature"`, `"hum"` catches `"humidity"`.
pub fn condition_attributes(kind: &EntityKind, name: &str) -> Vec<&'static str> {
    let name = name.to_lowercase();
    match kind {
        EntityKind::Sensor => {
            if name.contains("temp") {
                vec!["temperature"]
            } else if name.contains("hum") {
                vec!["humidity"]
            } else if name.contains("motion") || name.contains("pir") {
                vec!["state"]
            } else {
                vec!["state", "value"]
            }
        }
        EntityKind::Switch => vec!["state"],
        EntityKind::Light => vec!["state", "brightness"],
        EntityKind::Fan => vec!["state", "speed"],
        _ => vec!["state"],
    }
}

/// The wizard itself: current step plus the selections made so far
#[derive(Debug, Clone, Default)]
pub struct ConditionFlow {
    step: ConditionStep,
    entity_id: Option<EntityId>,
    entity_name: Option<String>,
    entity_kind: Option<EntityKind>,
    attribute: Option<String>,
    operator: Option<Operator>,
    value: String,
}

impl ConditionFlow {
    /// Start a fresh flow at the entity step
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step
    pub fn step(&self) -> ConditionStep {
        self.step
    }

    /// Choose an entity and advance to the attribute step
    pub fn select_entity(&mut self, entity: &Entity) -> Result<(), InvalidTransition> {
        self.step = self.step.try_transition(ConditionStep::Attribute)?;
        self.entity_id = Some(entity.id.clone());
        self.entity_name = Some(entity.name.clone());
        self.entity_kind = Some(entity.kind.clone());
        Ok(())
    }

    /// Attribute candidates for the chosen entity
    ///
    /// Empty before an entity is chosen.
    pub fn attributes(&self) -> Vec<&'static str> {
        match (&self.entity_kind, &self.entity_name) {
            (Some(kind), Some(name)) => condition_attributes(kind, name),
            _ => Vec::new(),
        }
    }

    /// Choose an attribute and advance to the operator step
    pub fn select_attribute(&mut self, attribute: &str) -> Result<(), FlowError> {
        if !self.attributes().contains(&attribute) {
            return Err(FlowError::UnknownAttribute(attribute.to_string()));
        }
        self.step = self.step.try_transition(ConditionStep::Operator)?;
        self.attribute = Some(attribute.to_string());
        Ok(())
    }

    /// Choose an operator and advance to the value step
    pub fn select_operator(&mut self, operator: Operator) -> Result<(), InvalidTransition> {
        self.step = self.step.try_transition(ConditionStep::Value)?;
        self.operator = Some(operator);
        Ok(())
    }

    /// Update the value text
    ///
    /// Plain data binding; submission stays gated on the text being
    /// non-empty regardless of when it was typed.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The current value text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value input should hint a numeric keyboard
    ///
    /// Everything except the textual `state` attribute compares numbers.
    pub fn numeric_input(&self) -> bool {
        self.attribute.as_deref() != Some("state")
    }

    /// Walk back one step
    pub fn back(&mut self) -> Result<ConditionStep, InvalidTransition> {
        let target = self.step.back_target().ok_or(InvalidTransition {
            from: self.step,
            to: self.step,
            reason: "the entity step is the start of the flow",
        })?;
        self.step = self.step.try_transition(target)?;
        Ok(self.step)
    }

    /// Whether submission is currently allowed
    pub fn can_submit(&self) -> bool {
        self.step == ConditionStep::Value && !self.value.is_empty()
    }

    /// Emit the finished trigger and reset the flow
    ///
    /// Fails at any step but [`ConditionStep::Value`], and with an empty
    /// value text. On success every selection is cleared and the flow is
    /// back at the entity step.
    pub fn submit(&mut self) -> Result<StateTrigger, FlowError> {
        if self.step != ConditionStep::Value {
            return Err(InvalidTransition {
                from: self.step,
                to: ConditionStep::Entity,
                reason: "submission is only available at the value step",
            }
            .into());
        }
        if self.value.is_empty() {
            return Err(FlowError::EmptyValue);
        }

        let entity_id = self.entity_id.clone().ok_or(FlowError::Incomplete("entity"))?;
        let entity_name = self
            .entity_name
            .clone()
            .ok_or(FlowError::Incomplete("entity"))?;
        let attribute = self
            .attribute
            .clone()
            .ok_or(FlowError::Incomplete("attribute"))?;
        let operator = self.operator.ok_or(FlowError::Incomplete("operator"))?;

        self.step = self.step.try_transition(ConditionStep::Entity)?;
        let trigger = StateTrigger {
            entity_id,
            entity_name,
            attribute,
            operator,
            value: std::mem::take(&mut self.value),
        };

        self.entity_id = None;
        self.entity_name = None;
        self.entity_kind = None;
        self.attribute = None;
        self.operator = None;
        Ok(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConditionStep::*;

    fn sensor(name: &str) -> casa_core::Entity {
        casa_core::Entity::new(EntityId::new("e1").unwrap(), name, EntityKind::Sensor)
    }

    // ==================== Step graph ====================

    #[test]
    fn test_forward_transitions() {
        assert_eq!(Entity.try_transition(Attribute), Ok(Attribute));
        assert_eq!(Attribute.try_transition(Operator), Ok(Operator));
        assert_eq!(Operator.try_transition(Value), Ok(Value));
    }

    #[test]
    fn test_back_transitions() {
        assert_eq!(Attribute.try_transition(Entity), Ok(Entity));
        assert_eq!(Operator.try_transition(Attribute), Ok(Attribute));
        assert_eq!(Value.try_transition(Operator), Ok(Operator));
    }

    #[test]
    fn test_no_skipping_ahead() {
        assert!(!Entity.can_transition_to(Operator));
        assert!(!Entity.can_transition_to(Value));
        assert!(!Attribute.can_transition_to(Value));
    }

    #[test]
    fn test_no_back_from_entity() {
        assert_eq!(Entity.back_target(), None);
        let err = Entity.try_transition(Entity).unwrap_err();
        assert_eq!(err.reason, "already at this step");
    }

    #[test]
    fn test_submit_reset_is_a_legal_move() {
        assert_eq!(Value.try_transition(Entity), Ok(Entity));
    }

    // ==================== Attribute derivation ====================

    #[test]
    fn test_sensor_name_precedence() {
        let attrs = condition_attributes(&EntityKind::Sensor, "Outdoor Temp Sensor");
        assert_eq!(attrs, vec!["temperature"]);

        let attrs = condition_attributes(&EntityKind::Sensor, "bathroom_humidity");
        assert_eq!(attrs, vec!["humidity"]);

        let attrs = condition_attributes(&EntityKind::Sensor, "hall_pir");
        assert_eq!(attrs, vec!["state"]);

        let attrs = condition_attributes(&EntityKind::Sensor, "mystery_probe");
        assert_eq!(attrs, vec!["state", "value"]);
    }

    #[test]
    fn test_kind_attributes() {
        assert_eq!(condition_attributes(&EntityKind::Switch, "Plug"), vec!["state"]);
        assert_eq!(
            condition_attributes(&EntityKind::Light, "Lamp"),
            vec!["state", "brightness"]
        );
        assert_eq!(
            condition_attributes(&EntityKind::Fan, "Ceiling Fan"),
            vec!["state", "speed"]
        );
        assert_eq!(
            condition_attributes(&EntityKind::Other("valve".to_string()), "Valve"),
            vec!["state"]
        );
    }

    #[test]
    fn test_derivation_is_case_insensitive() {
        let attrs = condition_attributes(&EntityKind::Sensor, "OUTDOOR TEMPERATURE");
        assert_eq!(attrs, vec!["temperature"]);
    }

    // ==================== Flow behavior ====================

    #[test]
    fn test_happy_path() {
        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("outdoor_temp")).unwrap();
        assert_eq!(flow.step(), Attribute);
        assert_eq!(flow.attributes(), vec!["temperature"]);

        flow.select_attribute("temperature").unwrap();
        flow.select_operator(crate::trigger::Operator::GreaterThan).unwrap();
        assert!(!flow.can_submit());

        flow.set_value("25");
        assert!(flow.can_submit());

        let trigger = flow.submit().unwrap();
        assert_eq!(trigger.entity_name, "outdoor_temp");
        assert_eq!(trigger.attribute, "temperature");
        assert_eq!(trigger.operator, crate::trigger::Operator::GreaterThan);
        assert_eq!(trigger.value, "25");

        // Fully reset
        assert_eq!(flow.step(), Entity);
        assert!(flow.attributes().is_empty());
        assert_eq!(flow.value(), "");
    }

    #[test]
    fn test_cannot_submit_early() {
        let mut flow = ConditionFlow::new();
        assert!(flow.submit().is_err());

        flow.select_entity(&sensor("probe")).unwrap();
        assert!(flow.submit().is_err());

        flow.select_attribute("state").unwrap();
        assert!(flow.submit().is_err());
    }

    #[test]
    fn test_empty_value_blocks_submission() {
        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("probe")).unwrap();
        flow.select_attribute("state").unwrap();
        flow.select_operator(crate::trigger::Operator::Equal).unwrap();

        assert!(!flow.can_submit());
        assert_eq!(flow.submit(), Err(FlowError::EmptyValue));
        // Still at the value step, nothing lost
        assert_eq!(flow.step(), Value);
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("outdoor_temp")).unwrap();

        let err = flow.select_attribute("speed").unwrap_err();
        assert_eq!(err, FlowError::UnknownAttribute("speed".to_string()));
        assert_eq!(flow.step(), Attribute);
    }

    #[test]
    fn test_back_walks_one_step() {
        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("probe")).unwrap();
        flow.select_attribute("state").unwrap();
        flow.select_operator(crate::trigger::Operator::Equal).unwrap();

        assert_eq!(flow.back().unwrap(), Operator);
        assert_eq!(flow.back().unwrap(), Attribute);
        assert_eq!(flow.back().unwrap(), Entity);
        assert!(flow.back().is_err());
    }

    #[test]
    fn test_selecting_entity_midflow_is_invalid() {
        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("probe")).unwrap();
        assert!(flow.select_entity(&sensor("other")).is_err());
    }

    #[test]
    fn test_numeric_keyboard_hint() {
        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("outdoor_temp")).unwrap();
        flow.select_attribute("temperature").unwrap();
        assert!(flow.numeric_input());

        let mut flow = ConditionFlow::new();
        flow.select_entity(&sensor("probe")).unwrap();
        flow.select_attribute("state").unwrap();
        assert!(!flow.numeric_input());
    }
}
