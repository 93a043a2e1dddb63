//! Editor glue systems
//!
//! This module contains the observers that react to camera lifecycle
//! events and to camera move commands.

pub mod attach;
pub mod move_camera;

pub use attach::attach_editor_motion;
pub use move_camera::{move_camera_to_entity, move_camera_to_position};
