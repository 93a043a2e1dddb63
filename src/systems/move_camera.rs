//! Camera move commands
//!
//! This module executes the move commands editors issue against scene
//! cameras: framing an entity and teleporting to a fixed pose. Commands
//! address a single viewport context; cameras on other contexts are
//! untouched.

use bevy::prelude::*;

use crate::components::ViewportContext;
use crate::events::{MoveCameraToEntity, MoveCameraToPosition};

/// Move cameras on the addressed context so they frame the target entity
pub fn move_camera_to_entity(
    trigger: On<MoveCameraToEntity>,
    targets: Query<&GlobalTransform>,
    mut cameras: Query<(&mut Transform, Option<&ViewportContext>), With<Camera>>,
) {
    let Ok(target) = targets.get(trigger.target) else {
        warn!("MoveCameraToEntity: target {} not found", trigger.target);
        return;
    };
    let focus = target.translation();

    for (mut transform, context) in cameras.iter_mut() {
        if ViewportContext::resolve(context) != trigger.context_id {
            continue;
        }

        if trigger.keep_camera_direction {
            // Slide the camera so the target lies `distance` along the
            // current eye direction
            let eye_dir = transform.forward().as_vec3();
            transform.translation = focus - eye_dir * trigger.distance;
        } else {
            // Stay on the current bearing from the target, pull the camera
            // to `distance`, then face the target
            let bearing = (transform.translation - focus)
                .try_normalize()
                .unwrap_or(Vec3::Z);
            transform.translation = focus + bearing * trigger.distance;
            transform.look_at(focus, Vec3::Y);
        }
    }
}

/// Teleport cameras on the addressed context to a fixed pose
pub fn move_camera_to_position(
    trigger: On<MoveCameraToPosition>,
    mut cameras: Query<(&mut Transform, Option<&ViewportContext>), With<Camera>>,
) {
    for (mut transform, context) in cameras.iter_mut() {
        if ViewportContext::resolve(context) != trigger.context_id {
            continue;
        }

        let movement = trigger.position - transform.translation;
        transform.translation = trigger.position;

        if trigger.look_at != trigger.position {
            transform.look_at(trigger.look_at, trigger.up);
        } else if movement.length_squared() > 0.0 {
            // Degenerate look-at point: look along the direction of
            // movement, keeping the orientation if the camera did not move
            transform.look_at(trigger.position + movement, trigger.up);
        }
    }
}
