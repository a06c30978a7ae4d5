//! YAML home fixtures for the reference backend
//!
//! A fixture describes a whole home in one YAML document: metadata, devices
//! with their entities, and optional pre-made scenes. The demo binary ships
//! one; tests write their own inline.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use casa_core::Device;
use serde::Deserialize;
use thiserror::Error;
use ulid::Ulid;

use crate::model::{Home, Scene, SceneAction};

/// Errors raised while loading a home fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to read the fixture file
    #[error("failed to read fixture {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML
    #[error("failed to parse fixture YAML: {source}")]
    ParseYaml {
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but describes an inconsistent home
    #[error("invalid fixture: {reason}")]
    Invalid { reason: String },
}

/// A complete home definition parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct HomeFixture {
    /// Home metadata
    pub home: Home,

    /// Devices and their entities
    #[serde(default)]
    pub devices: Vec<Device>,

    /// Pre-made scenes
    #[serde(default)]
    pub scenes: Vec<SceneFixture>,
}

/// Scene entry in a fixture; the id is generated when omitted
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFixture {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub actions: Vec<SceneAction>,
}

impl SceneFixture {
    pub(crate) fn into_scene(self) -> Scene {
        Scene {
            id: self.id.unwrap_or_else(|| Ulid::new().to_string()),
            name: self.name,
            actions: self.actions,
        }
    }
}

impl HomeFixture {
    /// Parse a fixture from a YAML string and validate it
    pub fn from_yaml_str(text: &str) -> Result<Self, FixtureError> {
        let fixture: HomeFixture =
            serde_yaml::from_str(text).map_err(|source| FixtureError::ParseYaml { source })?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Read and parse a fixture file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FixtureError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml_str(&text)
    }

    /// Check cross-device consistency
    ///
    /// Device ids and entity ids must be unique across the whole home, since
    /// the backend indexes entities globally. Scene actions must point at
    /// entities the fixture defines.
    fn validate(&self) -> Result<(), FixtureError> {
        let mut device_ids = HashSet::new();
        let mut entity_ids = HashSet::new();

        for device in &self.devices {
            if !device_ids.insert(device.id.as_str()) {
                return Err(FixtureError::Invalid {
                    reason: format!("duplicate device id: {}", device.id),
                });
            }
            for entity in &device.entities {
                if !entity_ids.insert(entity.id.as_str()) {
                    return Err(FixtureError::Invalid {
                        reason: format!("duplicate entity id: {}", entity.id),
                    });
                }
            }
        }

        for scene in &self.scenes {
            for action in &scene.actions {
                if !entity_ids.contains(action.entity_id.as_str()) {
                    return Err(FixtureError::Invalid {
                        reason: format!(
                            "scene '{}' targets unknown entity: {}",
                            scene.name, action.entity_id
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
