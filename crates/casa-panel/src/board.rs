//! Scene board view model
//!
//! The scene list screen: run, delete, duplicate, and create wired through
//! the scene service, outcomes reflected as alerts, editing handed off as
//! navigation intents. The service's in-flight guard backs [`is_busy`],
//! which the shell uses to disable a scene's controls while a request is
//! outstanding.
//!
//! [`is_busy`]: SceneBoard::is_busy

use std::sync::Arc;

use casa_scenes::{SceneDraft, SceneError, SceneService};
use casa_stores::{Scene, SceneStore};
use tracing::{debug, warn};

use crate::alert::AlertCenter;
use crate::nav::NavRequest;

pub struct SceneBoard {
    service: SceneService,
    home_id: String,
    pub alerts: AlertCenter,
}

impl SceneBoard {
    pub fn new(store: Arc<dyn SceneStore>, home_id: impl Into<String>) -> Self {
        Self {
            service: SceneService::new(store),
            home_id: home_id.into(),
            alerts: AlertCenter::new(),
        }
    }

    /// Current scenes, in backend order
    ///
    /// A store failure queues an alert and shows an empty board.
    pub async fn scenes(&mut self) -> Vec<Scene> {
        match self.service.scenes().await {
            Ok(scenes) => scenes,
            Err(err) => {
                warn!(%err, "Scene list failed");
                self.alerts.error("Connection Error", "Failed to load scenes");
                Vec::new()
            }
        }
    }

    /// Whether any request for this scene is still outstanding
    pub fn is_busy(&self, scene_id: &str) -> bool {
        self.service.is_busy(scene_id)
    }

    /// Execute a scene
    pub async fn run(&mut self, scene_id: &str) {
        match self.service.run(scene_id).await {
            Ok(()) => {
                self.alerts.success("Scene", "Scene executed");
            }
            Err(err) => self.report(err, "Failed to run scene"),
        }
    }

    /// Delete a scene
    pub async fn delete(&mut self, scene_id: &str) {
        match self.service.delete(scene_id).await {
            Ok(()) => {
                self.alerts.success("Scene", "Scene deleted");
            }
            Err(err) => self.report(err, "Failed to delete scene"),
        }
    }

    /// Duplicate a scene under a copy name
    pub async fn duplicate(&mut self, scene_id: &str) {
        match self.service.duplicate(&self.home_id, scene_id).await {
            Ok(_) => {
                self.alerts.success("Scene", "Scene duplicated");
            }
            Err(err) => self.report(err, "Failed to duplicate scene"),
        }
    }

    /// Create a scene from a finished draft
    pub async fn create(&mut self, draft: SceneDraft) {
        match self.service.create(&self.home_id, draft).await {
            Ok(_) => {
                self.alerts.success("Scene", "Scene created");
            }
            Err(err) => self.report(err, "Failed to create scene"),
        }
    }

    /// Intent to open the editor for a scene
    pub fn edit(&self, scene_id: &str) -> NavRequest {
        NavRequest::EditScene(scene_id.to_string())
    }

    /// Intent to open the scene creation screen
    pub fn compose(&self) -> NavRequest {
        NavRequest::CreateScene
    }

    /// Busy means the control was effectively disabled; only real store
    /// rejections reach the user.
    fn report(&mut self, err: SceneError, message: &str) {
        match err {
            SceneError::Busy(op) => {
                debug!(%op, "Request dropped while in flight");
            }
            SceneError::Store(err) => {
                warn!(%err, "Scene operation rejected");
                self.alerts.error("Error", message);
            }
        }
    }
}
