//! Scene draft edited before creation

use casa_core::EntityId;
use casa_stores::SceneAction;
use serde_json::Value;

/// A scene being authored
///
/// The draft collects a name, an optional emoji shown in front of it, and
/// the actions in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDraft {
    pub name: String,
    pub emoji: Option<String>,
    pub actions: Vec<SceneAction>,
}

impl SceneDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: None,
            actions: Vec::new(),
        }
    }

    /// Pick the emoji shown before the name
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Append an action; order follows insertion
    pub fn with_action(mut self, entity_id: EntityId, value: Value) -> Self {
        let order = self.actions.len() as u32;
        self.actions.push(SceneAction::new(entity_id, value, order));
        self
    }

    /// The name as stored: `"{emoji} {name}"` when an emoji was chosen
    pub fn composed_name(&self) -> String {
        match &self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.name),
            None => self.name.clone(),
        }
    }
}
