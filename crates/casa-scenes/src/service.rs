//! Scene service
//!
//! Issues scene operations against the backend store, one at a time per
//! scene. The store decides outcomes; this layer only serializes requests
//! and reports what happened.

use std::fmt;
use std::sync::Arc;

use casa_stores::{Scene, SceneStore, StoreError, StoreResult};
use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::draft::SceneDraft;

/// Name suffix given to duplicated scenes
const COPY_SUFFIX: &str = " (copy)";

/// The operations the service guards individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneOp {
    Run,
    Delete,
    Duplicate,
    Create,
}

impl SceneOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneOp::Run => "run",
            SceneOp::Delete => "delete",
            SceneOp::Duplicate => "duplicate",
            SceneOp::Create => "create",
        }
    }
}

impl fmt::Display for SceneOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by scene operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The same operation for the same target is still outstanding
    #[error("a {0} request for this scene is already in flight")]
    Busy(SceneOp),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialized access to the scene store
///
/// Each (operation, target) pair admits one outstanding request; a second
/// invocation while the first is awaited is dropped with [`SceneError::Busy`].
/// This mirrors disabling the triggering control on first press.
pub struct SceneService {
    store: Arc<dyn SceneStore>,
    in_flight: DashMap<(SceneOp, String), ()>,
}

impl SceneService {
    pub fn new(store: Arc<dyn SceneStore>) -> Self {
        Self {
            store,
            in_flight: DashMap::new(),
        }
    }

    /// Current scenes, in backend order
    pub async fn scenes(&self) -> StoreResult<Vec<Scene>> {
        self.store.scenes().await
    }

    /// Whether any operation is outstanding for this scene
    pub fn is_busy(&self, scene_id: &str) -> bool {
        self.in_flight.iter().any(|entry| entry.key().1 == scene_id)
    }

    /// Execute a scene
    #[instrument(skip(self))]
    pub async fn run(&self, scene_id: &str) -> Result<(), SceneError> {
        let _guard = self.acquire(SceneOp::Run, scene_id)?;
        debug!("Running scene");
        let result = self.store.run_scene(scene_id).await;
        if let Err(err) = &result {
            warn!(%err, "Scene run rejected");
        }
        Ok(result?)
    }

    /// Delete a scene
    #[instrument(skip(self))]
    pub async fn delete(&self, scene_id: &str) -> Result<(), SceneError> {
        let _guard = self.acquire(SceneOp::Delete, scene_id)?;
        debug!("Deleting scene");
        let result = self.store.delete_scene(scene_id).await;
        if let Err(err) = &result {
            warn!(%err, "Scene delete rejected");
        }
        Ok(result?)
    }

    /// Re-create a scene under a ` (copy)` name with the source's actions
    #[instrument(skip(self))]
    pub async fn duplicate(&self, home_id: &str, scene_id: &str) -> Result<Scene, SceneError> {
        let _guard = self.acquire(SceneOp::Duplicate, scene_id)?;

        let source = self
            .store
            .scenes()
            .await?
            .into_iter()
            .find(|scene| scene.id == scene_id)
            .ok_or_else(|| StoreError::not_found("scene", scene_id))?;

        let name = format!("{}{}", source.name, COPY_SUFFIX);
        let result = self.store.create_scene(home_id, &name, source.actions).await;
        match &result {
            Ok(copy) => info!(copy_id = %copy.id, "Scene duplicated"),
            Err(err) => warn!(%err, "Scene duplicate rejected"),
        }
        Ok(result?)
    }

    /// Create a scene from a finished draft
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, home_id: &str, draft: SceneDraft) -> Result<Scene, SceneError> {
        let _guard = self.acquire(SceneOp::Create, home_id)?;

        let name = draft.composed_name();
        let result = self.store.create_scene(home_id, &name, draft.actions).await;
        match &result {
            Ok(scene) => info!(scene_id = %scene.id, "Scene created"),
            Err(err) => warn!(%err, "Scene create rejected"),
        }
        Ok(result?)
    }

    fn acquire(&self, op: SceneOp, target: &str) -> Result<InFlightGuard<'_>, SceneError> {
        let key = (op, target.to_string());
        if self.in_flight.insert(key.clone(), ()).is_some() {
            debug!(%op, target, "Duplicate invocation dropped");
            return Err(SceneError::Busy(op));
        }
        Ok(InFlightGuard {
            set: &self.in_flight,
            key,
        })
    }
}

/// Clears the in-flight entry when the operation finishes, however it ends
struct InFlightGuard<'a> {
    set: &'a DashMap<(SceneOp, String), ()>,
    key: (SceneOp, String),
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.remove(&self.key);
    }
}
