//! Component definitions
//!
//! This module contains the components the editor glue reads from and
//! attaches to camera entities.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{motion, PRIMARY_CONTEXT_ID};

/// Render context a camera belongs to
///
/// Cameras without this tag count as [`PRIMARY_CONTEXT_ID`]; see that
/// constant for the context convention.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportContext(pub u32);

impl Default for ViewportContext {
    fn default() -> Self {
        Self(PRIMARY_CONTEXT_ID)
    }
}

impl ViewportContext {
    /// Effective context id of a camera that may or may not carry the tag
    pub fn resolve(context: Option<&ViewportContext>) -> u32 {
        context.map_or(PRIMARY_CONTEXT_ID, |c| c.0)
    }
}

/// Editor camera navigation component
///
/// Attached automatically to cameras on the primary viewport context and
/// consumed by the host editor's motion systems. An existing component is
/// never overwritten, so tuning edited by hand survives a camera component
/// being re-added to the same entity.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorMotion {
    /// Whether navigation input is applied to this camera
    pub enabled: bool,
    /// Translation speed in world units per second
    pub move_speed: f32,
    /// Rotation speed multiplier for mouse drag
    pub rotation_speed: f32,
    /// Zoom speed multiplier for scroll wheel
    pub zoom_speed: f32,
}

impl Default for EditorMotion {
    fn default() -> Self {
        Self {
            enabled: true,
            move_speed: motion::DEFAULT_MOVE_SPEED,
            rotation_speed: motion::DEFAULT_ROTATION_SPEED,
            zoom_speed: motion::DEFAULT_ZOOM_SPEED,
        }
    }
}
