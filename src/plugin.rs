//! Plugin wiring
//!
//! This module registers the editor glue with a Bevy `App`. Registration
//! happens from `Plugin::build`, so subscription is explicit, happens at a
//! known point in app construction and can be exercised in tests.

use bevy::prelude::*;

use crate::resources::EditorMotionSettings;
use crate::systems::{attach_editor_motion, move_camera_to_entity, move_camera_to_position};

/// Plugin that attaches editor navigation to scene cameras and executes
/// camera move commands
pub struct EditorMotionPlugin;

impl Plugin for EditorMotionPlugin {
    fn build(&self, app: &mut App) {
        app
            // Settings
            .init_resource::<EditorMotionSettings>()
            // Observer for camera lifecycle
            .add_observer(attach_editor_motion)
            // Observers for camera move commands
            .add_observer(move_camera_to_entity)
            .add_observer(move_camera_to_position);
    }
}
