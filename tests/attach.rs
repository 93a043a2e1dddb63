use bevy::prelude::*;
use bevy_editor_motion::{EditorMotion, EditorMotionPlugin, EditorMotionSettings, ViewportContext};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(EditorMotionPlugin);
    app
}

#[test]
fn attaches_to_untagged_camera() {
    let mut app = test_app();

    let cam = app.world_mut().spawn(Camera::default()).id();
    app.update();

    let motion = app.world().entity(cam).get::<EditorMotion>();
    assert_eq!(motion, Some(&EditorMotion::default()));
    assert!(motion.unwrap().enabled);
}

#[test]
fn attaches_to_primary_context_camera() {
    let mut app = test_app();

    let cam = app
        .world_mut()
        .spawn((Camera::default(), ViewportContext(0)))
        .id();
    app.update();

    assert!(app.world().entity(cam).contains::<EditorMotion>());
}

#[test]
fn attaches_through_required_components() {
    // Spawning a 3d camera inserts the camera component implicitly; the
    // handler must fire for that path too
    let mut app = test_app();

    let cam = app.world_mut().spawn(Camera3d::default()).id();
    app.update();

    assert!(app.world().entity(cam).contains::<EditorMotion>());
}

#[test]
fn ignores_secondary_context_camera() {
    let mut app = test_app();

    let pip = app
        .world_mut()
        .spawn((Camera::default(), ViewportContext(1)))
        .id();
    app.update();

    assert!(!app.world().entity(pip).contains::<EditorMotion>());
}

#[test]
fn ignores_entity_without_camera() {
    let mut app = test_app();

    let entity = app
        .world_mut()
        .spawn((Transform::default(), ViewportContext(0)))
        .id();
    app.update();

    assert!(!app.world().entity(entity).contains::<EditorMotion>());
}

#[test]
fn preserves_existing_component() {
    let mut app = test_app();

    let custom = EditorMotion {
        move_speed: 42.0,
        ..default()
    };
    let cam = app
        .world_mut()
        .spawn((Camera::default(), custom.clone()))
        .id();
    app.update();

    assert_eq!(app.world().entity(cam).get::<EditorMotion>(), Some(&custom));
}

#[test]
fn re_adding_camera_does_not_reset_tuning() {
    let mut app = test_app();

    let cam = app.world_mut().spawn(Camera::default()).id();
    app.update();

    app.world_mut()
        .entity_mut(cam)
        .get_mut::<EditorMotion>()
        .unwrap()
        .move_speed = 3.5;

    app.world_mut().entity_mut(cam).remove::<Camera>();
    app.world_mut().entity_mut(cam).insert(Camera::default());
    app.update();

    let motion = app.world().entity(cam).get::<EditorMotion>().unwrap();
    assert_eq!(motion.move_speed, 3.5);

    let mut attached = app
        .world_mut()
        .query_filtered::<Entity, With<EditorMotion>>();
    assert_eq!(attached.iter(app.world()).count(), 1);
}

#[test]
fn primary_context_is_configurable() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<EditorMotionSettings>()
        .primary_context = 1;

    let main = app
        .world_mut()
        .spawn((Camera::default(), ViewportContext(1)))
        .id();
    let other = app.world_mut().spawn(Camera::default()).id();
    app.update();

    assert!(app.world().entity(main).contains::<EditorMotion>());
    assert!(!app.world().entity(other).contains::<EditorMotion>());
}

#[test]
fn auto_attach_can_be_disabled() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<EditorMotionSettings>()
        .auto_attach = false;

    let cam = app.world_mut().spawn(Camera::default()).id();
    app.update();

    assert!(!app.world().entity(cam).contains::<EditorMotion>());
}
