//! Camera-added handler
//!
//! This module attaches editor navigation to cameras as they appear in the
//! world, so a freshly loaded scene becomes navigable without any manual
//! setup step.

use bevy::prelude::*;

use crate::components::{EditorMotion, ViewportContext};
use crate::resources::EditorMotionSettings;

/// Attach [`EditorMotion`] to freshly added primary-context cameras
///
/// Runs as an observer on camera insertion. The component is only created
/// when the camera renders the editable viewport context and the entity
/// does not already carry one; every other case is a silent no-op, so the
/// handler is idempotent.
pub fn attach_editor_motion(
    trigger: On<Add, Camera>,
    settings: Res<EditorMotionSettings>,
    cameras: Query<Option<&ViewportContext>, With<Camera>>,
    existing: Query<(), With<EditorMotion>>,
    mut commands: Commands,
) {
    if !settings.auto_attach {
        return;
    }

    let entity = trigger.entity;

    // The camera can already be gone if it was despawned in the same flush
    let Ok(context) = cameras.get(entity) else {
        return;
    };

    if ViewportContext::resolve(context) != settings.primary_context {
        return;
    }

    // Never overwrite an existing component; tuning edited by hand must
    // survive the camera component being re-added
    if existing.contains(entity) {
        return;
    }

    debug!("Attaching editor motion to camera {entity}");
    commands.entity(entity).insert(EditorMotion::default());
}
