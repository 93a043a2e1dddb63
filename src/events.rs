//! Camera command events
//!
//! Editor widgets trigger these events to reposition scene cameras. Each
//! command carries a context id so that only cameras on the addressed
//! viewport context move; secondary views stay where they are.

use bevy::prelude::*;

use crate::config::{move_command, PRIMARY_CONTEXT_ID};

/// Move cameras so they frame the given entity
#[derive(Event, Clone, Copy, Debug)]
pub struct MoveCameraToEntity {
    /// Entity to frame
    pub target: Entity,
    /// Final distance between camera and target
    pub distance: f32,
    /// If true the current eye direction is preserved and the camera is
    /// translated until the target lies on it. If false the camera stays on
    /// its current bearing from the target, is pulled to `distance` and is
    /// rotated to face the target; a camera sitting exactly on the target
    /// has no bearing and backs away along +Z.
    pub keep_camera_direction: bool,
    /// Only cameras on this context are moved
    pub context_id: u32,
}

impl MoveCameraToEntity {
    /// Frame `target` on the primary context with default distance
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            distance: move_command::DEFAULT_DISTANCE,
            keep_camera_direction: move_command::DEFAULT_KEEP_DIRECTION,
            context_id: PRIMARY_CONTEXT_ID,
        }
    }
}

/// Teleport cameras to a fixed pose
#[derive(Event, Clone, Copy, Debug)]
pub struct MoveCameraToPosition {
    /// New camera position
    pub position: Vec3,
    /// Point to look at; if equal to `position` the camera looks along its
    /// direction of movement instead
    pub look_at: Vec3,
    /// Up vector for the final orientation
    pub up: Vec3,
    /// Only cameras on this context are moved
    pub context_id: u32,
}

impl MoveCameraToPosition {
    /// Move primary-context cameras to `position`, looking at `look_at`
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            up: Vec3::Y,
            context_id: PRIMARY_CONTEXT_ID,
        }
    }
}
