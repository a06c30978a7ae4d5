//! Backend store interfaces for Casa
//!
//! The panel never talks to devices or a database directly. Everything it
//! knows about the home arrives through the three store traits defined here,
//! and everything it changes goes back out through them. A real deployment
//! implements the traits against its own backend; [`MemoryBackend`] is the
//! in-process reference implementation used by the demo binary and tests.

mod error;
mod fixture;
mod memory;
mod model;
mod store;

pub use error::{StoreError, StoreResult};
pub use fixture::{FixtureError, HomeFixture};
pub use memory::MemoryBackend;
pub use model::{Home, Scene, SceneAction};
pub use store::{DeviceStore, HomeStore, SceneStore};
