//! Editor camera navigation glue for Bevy scenes
//!
//! When a camera is added to the world, this crate decides whether it is the
//! editable viewport and, if so, attaches an [`EditorMotion`] component that
//! the host editor's motion systems drive. Cameras belonging to secondary
//! render contexts (picture-in-picture views, UI previews) are left alone,
//! and cameras that already carry the component keep it untouched.
//!
//! It also handles the camera move commands editors issue against a scene:
//! framing an entity ([`MoveCameraToEntity`]) and teleporting to a pose
//! ([`MoveCameraToPosition`]).
//!
//! # Module Structure
//!
//! - `config`: Viewport context convention and default tuning values
//! - `components`: `ViewportContext` tag and the `EditorMotion` component
//! - `resources`: Runtime settings for the glue
//! - `events`: Camera move command events
//! - `systems`: Attach observer and move command observers
//! - `plugin`: Plugin wiring everything into an `App`
//!
//! # Usage
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_editor_motion::EditorMotionPlugin;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(EditorMotionPlugin)
//!     .run();
//! ```

pub mod components;
pub mod config;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

// Re-export commonly used items
pub use components::{EditorMotion, ViewportContext};
pub use events::{MoveCameraToEntity, MoveCameraToPosition};
pub use plugin::EditorMotionPlugin;
pub use resources::EditorMotionSettings;
