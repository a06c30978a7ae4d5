//! Navigation intents
//!
//! The panel never routes; it hands one of these to the navigation
//! collaborator, which pushes the named route.

/// A named-route push requested by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    /// Open the scene editor for an existing scene
    EditScene(String),

    /// Open the scene creation screen
    CreateScene,
}

impl NavRequest {
    /// The route name the navigator pushes
    pub fn route(&self) -> &'static str {
        match self {
            NavRequest::EditScene(_) => "EditScene",
            NavRequest::CreateScene => "CreateScene",
        }
    }
}
