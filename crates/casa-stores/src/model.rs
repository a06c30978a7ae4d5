//! Wire models served by the scene and home stores

use casa_core::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One step of a scene: set an entity to a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAction {
    /// Target entity
    pub entity_id: EntityId,

    /// Value to apply; an object is merged field-wise, a scalar replaces
    /// the entity state
    pub value: Value,

    /// Execution position within the scene
    #[serde(default)]
    pub order: u32,
}

impl SceneAction {
    /// Create an action at the given position
    pub fn new(entity_id: EntityId, value: Value, order: u32) -> Self {
        Self {
            entity_id,
            value,
            order,
        }
    }
}

/// A stored scene as the backend reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Backend-issued scene identifier
    pub id: String,

    /// Scene name, possibly prefixed with an emoji chosen at creation
    pub name: String,

    /// Ordered actions executed when the scene runs
    #[serde(default)]
    pub actions: Vec<SceneAction>,
}

/// The home the panel is attached to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Home {
    /// Backend-issued home identifier
    pub id: String,

    /// Home name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scene_round_trip() {
        let scene = Scene {
            id: "scene_1".to_string(),
            name: "🎬 Movie Night".to_string(),
            actions: vec![SceneAction::new(
                "lamp".parse().unwrap(),
                json!({"power": "OFF"}),
                0,
            )],
        };

        let text = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn test_scene_actions_default_empty() {
        let scene: Scene =
            serde_json::from_str(r#"{"id": "s", "name": "Empty"}"#).unwrap();
        assert!(scene.actions.is_empty());
    }
}
