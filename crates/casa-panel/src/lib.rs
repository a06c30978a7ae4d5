//! Screen view models for the Casa panel
//!
//! The shell renders what these models expose and feeds user input back into
//! them. The models hold no widget state: they snapshot the stores, build
//! cards through the dispatcher, forward control patches, and queue alerts
//! for whatever the shell uses to show them.

mod alert;
mod board;
mod dashboard;
mod nav;

pub use alert::{Alert, AlertCenter, AlertSeverity};
pub use board::SceneBoard;
pub use dashboard::{build_card, DashboardModel, DeviceSection, EntityCard};
pub use nav::NavRequest;
