//! End-to-end trigger authoring tests
//!
//! Each test drives the composer the way a user would and checks the exact
//! JSON handed to the backend, since that boundary shape is the contract.

use casa_automation::{Operator, SunEvent, Trigger, TriggerComposer, TriggerKind};
use casa_core::{Entity, EntityId, EntityKind};
use serde_json::json;

fn entity(id: &str, name: &str, kind: EntityKind) -> Entity {
    Entity::new(EntityId::new(id).unwrap(), name, kind)
}

// ============================================================================
// Time triggers
// ============================================================================

#[test]
fn test_time_trigger_with_days_emits_exact_shape() {
    let mut composer = TriggerComposer::new();
    composer.set_kind(TriggerKind::Time);
    composer.time.set_time("18:30");
    composer.time.toggle_day(4);
    composer.time.toggle_day(5);

    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({
            "trigger_type": "time",
            "time_of_day": "18:30",
            "days_of_week": [4, 5]
        })
    );
}

#[test]
fn test_time_trigger_every_day_omits_days() {
    let mut composer = TriggerComposer::new();
    composer.set_kind(TriggerKind::Time);
    composer.time.set_time("06:45");

    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({"trigger_type": "time", "time_of_day": "06:45"})
    );
}

#[test]
fn test_deselecting_all_days_is_every_day_again() {
    let mut composer = TriggerComposer::new();
    composer.set_kind(TriggerKind::Time);
    composer.time.set_time("12:00");
    composer.time.toggle_day(2);
    composer.time.toggle_day(2);

    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({"trigger_type": "time", "time_of_day": "12:00"})
    );
}

// ============================================================================
// State triggers
// ============================================================================

#[test]
fn test_state_trigger_full_authoring_path() {
    let mut composer = TriggerComposer::new();
    assert_eq!(composer.kind(), TriggerKind::State);

    let sensor = entity("outdoor_temp", "outdoor_temp", EntityKind::Sensor);
    composer.condition.select_entity(&sensor).unwrap();
    assert_eq!(composer.condition.attributes(), vec!["temperature"]);

    composer.condition.select_attribute("temperature").unwrap();
    composer
        .condition
        .select_operator(Operator::GreaterThan)
        .unwrap();
    composer.condition.set_value("25");

    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({
            "trigger_type": "state",
            "entity_id": "outdoor_temp",
            "entity_name": "outdoor_temp",
            "attribute": "temperature",
            "operator": ">",
            "value": "25"
        })
    );
}

#[test]
fn test_state_trigger_never_emits_partial_tuple() {
    let mut composer = TriggerComposer::new();

    let fan = entity("fan_1", "ceiling_fan", EntityKind::Fan);
    composer.condition.select_entity(&fan).unwrap();
    composer.condition.select_attribute("speed").unwrap();
    composer.condition.select_operator(Operator::LessThan).unwrap();

    // Value still empty: the dialog must refuse to close
    assert!(!composer.can_complete());
    assert!(composer.complete().is_err());

    composer.condition.set_value("2");
    assert!(composer.can_complete());
    let trigger = composer.complete().unwrap();
    match trigger {
        Trigger::State(t) => {
            assert_eq!(t.entity_id.as_str(), "fan_1");
            assert_eq!(t.attribute, "speed");
            assert_eq!(t.operator, Operator::LessThan);
            assert_eq!(t.value, "2");
        }
        other => panic!("expected state trigger, got {:?}", other),
    }
}

// ============================================================================
// Sun triggers
// ============================================================================

#[test]
fn test_sun_trigger_quick_set_path() {
    let mut composer = TriggerComposer::new();
    composer.set_kind(TriggerKind::Sun);
    composer.sun.set_event(SunEvent::Sunset);
    composer.sun.set_offset(-60);
    assert_eq!(composer.sun.describe(), "1h 0m before sunset");

    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({"trigger_type": "sun", "sun_event": "sunset", "sun_offset": -60})
    );
}

#[test]
fn test_sun_trigger_typed_offset_path() {
    let mut composer = TriggerComposer::new();
    composer.set_kind(TriggerKind::Sun);
    composer.sun.set_event(SunEvent::Sunrise);
    composer.sun.enter_offset("45");
    assert_eq!(composer.sun.describe(), "45m after sunrise");

    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({"trigger_type": "sun", "sun_event": "sunrise", "sun_offset": 45})
    );
}

// ============================================================================
// Authoring several triggers in a row
// ============================================================================

#[test]
fn test_consecutive_authoring_sessions_start_clean() {
    let mut composer = TriggerComposer::new();

    composer.set_kind(TriggerKind::Sun);
    composer.sun.set_offset(30);
    composer.complete().unwrap();

    // Second session: the dialog is back at its defaults
    assert_eq!(composer.kind(), TriggerKind::State);
    assert_eq!(composer.sun.offset(), 0);

    composer.set_kind(TriggerKind::Time);
    composer.time.set_time("22:00");
    let trigger = composer.complete().unwrap();
    assert_eq!(
        serde_json::to_value(&trigger).unwrap(),
        json!({"trigger_type": "time", "time_of_day": "22:00"})
    );
}
