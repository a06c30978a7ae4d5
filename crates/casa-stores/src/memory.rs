//! In-memory reference backend
//!
//! Implements all three store traits against process-local tables. The demo
//! binary and the integration tests run on top of this; it is also the
//! executable description of how a real backend is expected to behave.

use async_trait::async_trait;
use casa_core::{Device, EntityId, StateValue};
use chrono::Utc;
use dashmap::DashMap;
use indexmap::IndexMap;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use ulid::Ulid;

use crate::error::{StoreError, StoreResult};
use crate::fixture::HomeFixture;
use crate::model::{Home, Scene, SceneAction};
use crate::store::{DeviceStore, HomeStore, SceneStore};

/// Process-local backend holding devices, scenes, and home metadata
pub struct MemoryBackend {
    home: Home,
    /// Devices keyed by device id
    devices: DashMap<String, Device>,
    /// Owning device id for each entity id
    entity_index: DashMap<String, String>,
    /// Scenes in creation order
    scenes: RwLock<IndexMap<String, Scene>>,
}

impl MemoryBackend {
    /// Create an empty backend for the given home
    pub fn new(home: Home) -> Self {
        Self {
            home,
            devices: DashMap::new(),
            entity_index: DashMap::new(),
            scenes: RwLock::new(IndexMap::new()),
        }
    }

    /// Build a populated backend from a parsed fixture
    pub fn from_fixture(fixture: HomeFixture) -> Self {
        let mut scenes = IndexMap::new();
        for scene_fixture in fixture.scenes {
            let scene = scene_fixture.into_scene();
            scenes.insert(scene.id.clone(), scene);
        }

        let backend = Self {
            home: fixture.home,
            devices: DashMap::new(),
            entity_index: DashMap::new(),
            scenes: RwLock::new(scenes),
        };
        for device in fixture.devices {
            backend.add_device(device);
        }
        backend
    }

    /// Register a device, indexing its entities
    pub fn add_device(&self, device: Device) {
        for entity in &device.entities {
            self.entity_index
                .insert(entity.id.to_string(), device.id.clone());
        }
        self.devices.insert(device.id.clone(), device);
    }

    /// Builder-style [`add_device`](Self::add_device)
    pub fn with_device(self, device: Device) -> Self {
        self.add_device(device);
        self
    }

    /// Mark a device online or offline
    pub fn set_online(&self, device_id: &str, online: bool) -> StoreResult<()> {
        let mut device = self
            .devices
            .get_mut(device_id)
            .ok_or_else(|| StoreError::not_found("device", device_id))?;
        device.online = online;
        Ok(())
    }

    /// Current state of a single entity, if known
    pub fn entity_state(&self, entity_id: &EntityId) -> Option<StateValue> {
        let device_id = self.entity_index.get(entity_id.as_str())?;
        let device = self.devices.get(device_id.value())?;
        device.entity(entity_id).map(|e| e.state.clone())
    }

    fn apply_to_entity(&self, entity_id: &EntityId, value: &Value) -> StoreResult<()> {
        let device_id = self
            .entity_index
            .get(entity_id.as_str())
            .ok_or_else(|| StoreError::not_found("entity", entity_id.as_str()))?
            .value()
            .clone();

        let mut device = self
            .devices
            .get_mut(&device_id)
            .ok_or_else(|| StoreError::not_found("device", &device_id))?;

        if !device.online {
            return Err(StoreError::rejected(format!(
                "device offline: {device_id}"
            )));
        }

        let entity = device
            .entities
            .iter_mut()
            .find(|e| &e.id == entity_id)
            .ok_or_else(|| StoreError::not_found("entity", entity_id.as_str()))?;

        match value {
            Value::Object(patch) => apply_patch(&mut entity.state, patch),
            other => {
                entity.state = scalar_state(other).ok_or_else(|| {
                    StoreError::rejected(format!("unsupported state value: {other}"))
                })?;
            }
        }
        entity.last_updated = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl DeviceStore for MemoryBackend {
    async fn devices(&self) -> StoreResult<Vec<Device>> {
        // Sorted by id for stable snapshots
        let mut devices: Vec<Device> = self.devices.iter().map(|r| r.value().clone()).collect();
        devices.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(devices)
    }

    #[instrument(skip(self, patch), fields(entity_id = %entity_id))]
    async fn control(&self, entity_id: &EntityId, patch: Value) -> StoreResult<()> {
        if !patch.is_object() {
            return Err(StoreError::rejected("control patch must be an object"));
        }

        {
            let device_id = self
                .entity_index
                .get(entity_id.as_str())
                .ok_or_else(|| StoreError::not_found("entity", entity_id.as_str()))?;
            let device = self
                .devices
                .get(device_id.value())
                .ok_or_else(|| StoreError::not_found("device", device_id.value()))?;
            let entity = device
                .entity(entity_id)
                .ok_or_else(|| StoreError::not_found("entity", entity_id.as_str()))?;
            if !entity.is_controllable {
                return Err(StoreError::rejected(format!(
                    "entity not controllable: {entity_id}"
                )));
            }
        }

        debug!(patch = %patch, "Applying control patch");
        self.apply_to_entity(entity_id, &patch)
    }
}

#[async_trait]
impl SceneStore for MemoryBackend {
    async fn scenes(&self) -> StoreResult<Vec<Scene>> {
        Ok(self.scenes.read().await.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn run_scene(&self, id: &str) -> StoreResult<()> {
        let scene = self
            .scenes
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("scene", id))?;

        // Stable sort keeps fixture order for equal positions
        let mut actions = scene.actions;
        actions.sort_by_key(|a| a.order);

        debug!(scene = %scene.name, actions = actions.len(), "Running scene");
        for action in &actions {
            if let Err(err) = self.apply_to_entity(&action.entity_id, &action.value) {
                warn!(entity_id = %action.entity_id, %err, "Scene action skipped");
            }
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_scene(&self, id: &str) -> StoreResult<()> {
        self.scenes
            .write()
            .await
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("scene", id))
    }

    #[instrument(skip(self, actions), fields(actions = actions.len()))]
    async fn create_scene(
        &self,
        home_id: &str,
        name: &str,
        actions: Vec<SceneAction>,
    ) -> StoreResult<Scene> {
        if home_id != self.home.id {
            return Err(StoreError::not_found("home", home_id));
        }

        let scene = Scene {
            id: Ulid::new().to_string(),
            name: name.to_string(),
            actions,
        };
        debug!(scene_id = %scene.id, name = %scene.name, "Creating scene");
        self.scenes
            .write()
            .await
            .insert(scene.id.clone(), scene.clone());
        Ok(scene)
    }
}

#[async_trait]
impl HomeStore for MemoryBackend {
    async fn current_home(&self) -> StoreResult<Home> {
        Ok(self.home.clone())
    }
}

/// Merge an object patch into an entity state
///
/// Field states take the patch keys directly. A scalar state is replaced by
/// the patch's `value` when that is the only key; any other object patch
/// promotes the state to fields.
fn apply_patch(state: &mut StateValue, patch: &serde_json::Map<String, Value>) {
    if let StateValue::Fields(fields) = state {
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
        return;
    }

    if patch.len() == 1 {
        if let Some(next) = patch.get("value").and_then(scalar_state) {
            *state = next;
            return;
        }
    }

    let mut fields = IndexMap::new();
    for (key, value) in patch {
        fields.insert(key.clone(), value.clone());
    }
    *state = StateValue::Fields(fields);
}

fn scalar_state(value: &Value) -> Option<StateValue> {
    match value {
        Value::Bool(b) => Some(StateValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(StateValue::Number),
        Value::String(s) => Some(StateValue::Text(s.clone())),
        _ => None,
    }
}
