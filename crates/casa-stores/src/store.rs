//! Store traits implemented by the backend
//!
//! These traits are the full surface the panel requires. Implementations can
//! wrap a network client, a bridge process, or the in-memory reference
//! backend; the panel holds them as `Arc<dyn ...>` and never downcasts.

use async_trait::async_trait;
use casa_core::{Device, EntityId};
use serde_json::Value;

use crate::error::StoreResult;
use crate::model::{Home, Scene, SceneAction};

/// Access to devices and their entities
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Snapshot of all devices with their current entity states
    async fn devices(&self) -> StoreResult<Vec<Device>>;

    /// Apply a control patch to an entity
    ///
    /// The patch is a partial JSON object, e.g. `{"value": "ON"}` or
    /// `{"brightness": 180}`. The backend decides how it maps onto the
    /// hardware; a refusal surfaces as [`StoreError::Rejected`].
    ///
    /// [`StoreError::Rejected`]: crate::StoreError::Rejected
    async fn control(&self, entity_id: &EntityId, patch: Value) -> StoreResult<()>;
}

/// Access to stored scenes
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// All scenes of the current home, in backend order
    async fn scenes(&self) -> StoreResult<Vec<Scene>>;

    /// Execute a scene's actions
    async fn run_scene(&self, id: &str) -> StoreResult<()>;

    /// Remove a scene
    async fn delete_scene(&self, id: &str) -> StoreResult<()>;

    /// Store a new scene and return it with its assigned id
    async fn create_scene(
        &self,
        home_id: &str,
        name: &str,
        actions: Vec<SceneAction>,
    ) -> StoreResult<Scene>;
}

/// Access to home metadata
#[async_trait]
pub trait HomeStore: Send + Sync {
    /// The home this panel is attached to
    async fn current_home(&self) -> StoreResult<Home>;
}
