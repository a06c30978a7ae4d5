//! Scene drafting and the scene service for Casa
//!
//! Scenes live in the backend; this crate owns the draft a user edits
//! before creation and the service that issues run/delete/duplicate/create
//! requests. The service keeps a per-operation in-flight set so rapid
//! repeated taps cannot issue duplicate requests for the same scene.

mod draft;
mod service;

pub use draft::SceneDraft;
pub use service::{SceneError, SceneOp, SceneService};
