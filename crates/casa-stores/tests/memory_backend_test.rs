//! Integration tests for the in-memory reference backend
//!
//! Drives the backend through the store traits only, the way the panel
//! does: fixture in, snapshots and control patches through the traits.

use casa_core::{EntityId, StateValue};
use casa_stores::{DeviceStore, HomeStore, MemoryBackend, SceneStore};
use casa_stores::{HomeFixture, StoreError};
use serde_json::json;

const FIXTURE: &str = r#"
home:
  id: home_1
  name: Casa
devices:
  - id: node_bedroom
    name: bedroom
    entities:
      - id: bedroom_temp
        name: bedroom_temp
        entity_type: sensor
        hardware_type: dht22
        state: { temperature: 19.5, humidity: 55 }
  - id: node_living
    name: living_room
    entities:
      - id: living_lamp
        name: living_lamp
        entity_type: light
        is_controllable: true
        capabilities: [brightness, color]
        state: { power: "OFF", brightness: 120, color: { r: 255, g: 0, b: 0 } }
      - id: living_plug
        name: living_plug
        entity_type: switch
        is_controllable: true
        state: "OFF"
scenes:
  - id: scene_movie
    name: "🎬 Movie Night"
    actions:
      - entity_id: living_lamp
        value: { power: "ON", brightness: 30 }
        order: 0
      - entity_id: living_plug
        value: { value: "OFF" }
        order: 1
"#;

fn backend() -> MemoryBackend {
    let fixture = HomeFixture::from_yaml_str(FIXTURE).unwrap();
    MemoryBackend::from_fixture(fixture)
}

// ============================================================================
// Device store
// ============================================================================

#[tokio::test]
async fn test_device_snapshot_is_sorted() {
    let backend = backend();

    let devices = backend.devices().await.unwrap();
    let ids: Vec<&str> = devices.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["node_bedroom", "node_living"]);
    assert_eq!(devices[1].entities.len(), 2);
}

#[tokio::test]
async fn test_control_roundtrips_through_snapshot() {
    let backend = backend();
    let lamp: EntityId = "living_lamp".parse().unwrap();

    backend
        .control(&lamp, json!({"power": "ON", "brightness": 200}))
        .await
        .unwrap();

    let devices = backend.devices().await.unwrap();
    let entity = devices
        .iter()
        .flat_map(|d| &d.entities)
        .find(|e| e.id == lamp)
        .unwrap();
    assert_eq!(entity.state.field_str("power"), Some("ON"));
    assert_eq!(entity.state.field_f64("brightness"), Some(200.0));
    // Untouched fields survive the patch
    assert!(entity.state.field("color").is_some());
}

#[tokio::test]
async fn test_control_refuses_sensors() {
    let backend = backend();
    let sensor: EntityId = "bedroom_temp".parse().unwrap();

    let err = backend
        .control(&sensor, json!({"value": "ON"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));
}

// ============================================================================
// Scene store
// ============================================================================

#[tokio::test]
async fn test_fixture_scene_runs_in_order() {
    let backend = backend();

    backend.run_scene("scene_movie").await.unwrap();

    let lamp_state = backend
        .entity_state(&"living_lamp".parse().unwrap())
        .unwrap();
    assert_eq!(lamp_state.field_str("power"), Some("ON"));
    assert_eq!(lamp_state.field_f64("brightness"), Some(30.0));

    let plug_state = backend
        .entity_state(&"living_plug".parse().unwrap())
        .unwrap();
    assert_eq!(plug_state, StateValue::Text("OFF".to_string()));
}

#[tokio::test]
async fn test_created_scene_appends_after_fixture_scenes() {
    let backend = backend();

    let created = backend
        .create_scene("home_1", "Good Morning", Vec::new())
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let scenes = backend.scenes().await.unwrap();
    let names: Vec<&str> = scenes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["🎬 Movie Night", "Good Morning"]);
}

// ============================================================================
// Home store
// ============================================================================

#[tokio::test]
async fn test_current_home() {
    let backend = backend();
    let home = backend.current_home().await.unwrap();
    assert_eq!(home.id, "home_1");
    assert_eq!(home.name, "Casa");
}
