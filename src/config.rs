//! Configuration constants for editor camera navigation
//!
//! This module contains the viewport context convention and the default
//! tuning values used when navigation components are created.

/// Context id of the primary (editable) viewport
///
/// Secondary render contexts (picture-in-picture views, minimaps, UI
/// previews) use other ids and are left alone by the editor glue. The
/// effective value can be overridden at runtime through
/// [`EditorMotionSettings`](crate::resources::EditorMotionSettings).
pub const PRIMARY_CONTEXT_ID: u32 = 0;

/// Default tuning for freshly attached navigation components
pub mod motion {
    /// Translation speed in world units per second
    pub const DEFAULT_MOVE_SPEED: f32 = 10.0;

    /// Rotation speed multiplier for mouse drag
    pub const DEFAULT_ROTATION_SPEED: f32 = 0.005;

    /// Zoom speed multiplier for scroll wheel
    pub const DEFAULT_ZOOM_SPEED: f32 = 0.5;
}

/// Defaults for the camera move commands
pub mod move_command {
    /// Final camera-to-target distance when none is given
    pub const DEFAULT_DISTANCE: f32 = 10.0;

    /// Whether the current eye direction is preserved when none is given
    pub const DEFAULT_KEEP_DIRECTION: bool = true;
}
