//! Lifecycle tests for the wobbly effect and the host-facing dispatch.

use glam::Vec2;
use wobble::{GrabOp, ResizeEdge, Settings, WindowEffect, WobblyEffect};

const SIZE: Vec2 = Vec2::new(400.0, 300.0);
const POSITION: Vec2 = Vec2::new(50.0, 60.0);

fn settings() -> Settings {
    Settings::default()
}

/// The maximize snap runs on its own and tears itself down once the grid
/// settles, well before the timeline hard stop.
#[test]
fn maximize_effect_terminates_by_itself() {
    let mut effect =
        WobblyEffect::new(GrabOp::Maximized, SIZE, POSITION, Vec2::ZERO, &settings()).unwrap();

    let mut t = 0.0;
    let mut frames = 0;
    loop {
        t += 16.0;
        let result = effect.advance(t);
        if !result.still_animating {
            break;
        }
        frames += 1;
        assert!(frames < 5000, "maximize wobble never settled");
    }

    assert!(!effect.is_active(), "finished effect should be destroyed");
    // Liveness stays false on further ticks.
    assert!(!effect.advance(t + 16.0).still_animating);
}

/// A move grab with no actual motion tears down on the first tick after
/// release: nothing was excited, so there is nothing to animate.
#[test]
fn released_idle_grab_finishes_immediately() {
    let pointer = POSITION + Vec2::new(200.0, 150.0);
    let mut effect =
        WobblyEffect::new(GrabOp::Move, SIZE, POSITION, pointer, &settings()).unwrap();

    assert!(effect.advance(16.0).still_animating);

    effect.end_gesture();
    assert!(!effect.advance(32.0).still_animating);
    assert!(!effect.is_active());
}

/// Dragging the window excites the mesh; the sampled surface deviates from
/// identity while the wobble lasts.
#[test]
fn moved_window_deforms_the_surface() {
    let pointer = POSITION + Vec2::new(200.0, 150.0);
    let mut effect =
        WobblyEffect::new(GrabOp::Move, SIZE, POSITION, pointer, &settings()).unwrap();

    effect.notify_moved(POSITION + Vec2::new(30.0, 0.0));
    assert!(effect.advance(16.0).still_animating);
    assert!(effect.movement());

    // The far corner lags behind the moved actor, so its painted position
    // differs from the undeformed corner.
    let corner = effect.deform_vertex(0.0, 0.0, SIZE);
    assert!(
        (corner - Vec2::ZERO).length() > 1.0,
        "corner did not lag: {:?}",
        corner
    );
}

/// The timeline hard stop destroys the effect even if the host never
/// reports rest.
#[test]
fn timeline_expiry_finishes_the_effect() {
    let pointer = POSITION + Vec2::new(200.0, 150.0);
    let mut effect =
        WobblyEffect::new(GrabOp::Move, SIZE, POSITION, pointer, &settings()).unwrap();

    assert!(!effect.advance(1_000_000.0).still_animating);
    assert!(!effect.is_active());
}

/// Destroy is idempotent, and a destroyed effect deforms to identity.
#[test]
fn destroy_is_idempotent_and_identity() {
    let mut effect =
        WobblyEffect::new(GrabOp::Unmaximized, SIZE, POSITION, Vec2::ZERO, &settings()).unwrap();

    effect.destroy();
    effect.destroy();

    assert!(!effect.is_active());
    assert!(!effect.advance(16.0).still_animating);

    let p = effect.deform_vertex(0.25, 0.75, SIZE);
    assert_eq!(p, Vec2::new(0.25, 0.75) * SIZE);
}

/// Dispatch honors the enable toggles: resize and maximize respect their
/// switches, unmaximize is unconditional.
#[test]
fn from_grab_honors_enable_toggles() {
    let disabled = Settings {
        maximize_effect: false,
        resize_effect: false,
        ..settings()
    };

    let resize = WindowEffect::from_grab(
        GrabOp::Resize(ResizeEdge::West),
        SIZE,
        POSITION,
        POSITION,
        &disabled,
    )
    .unwrap();
    assert!(resize.is_none());

    let maximized =
        WindowEffect::from_grab(GrabOp::Maximized, SIZE, POSITION, POSITION, &disabled).unwrap();
    assert!(maximized.is_none());

    let unmaximized =
        WindowEffect::from_grab(GrabOp::Unmaximized, SIZE, POSITION, POSITION, &disabled).unwrap();
    assert!(unmaximized.is_some());

    let moved = WindowEffect::from_grab(GrabOp::Move, SIZE, POSITION, POSITION, &disabled).unwrap();
    assert!(moved.is_some());
}

/// Invalid settings are rejected at construction, not discovered as NaN
/// mid-simulation.
#[test]
fn from_grab_rejects_invalid_settings() {
    let bad = Settings {
        mass: 100.0,
        ..settings()
    };

    let result = WindowEffect::from_grab(GrabOp::Move, SIZE, POSITION, POSITION, &bad);
    assert!(result.is_err());
}

/// The dispatch wrapper routes frame and gesture calls to whichever mode it
/// holds.
#[test]
fn window_effect_forwards_through_the_dispatch() {
    let mut effect =
        WindowEffect::from_grab(GrabOp::Maximized, SIZE, POSITION, POSITION, &settings())
            .unwrap()
            .unwrap();

    assert!(effect.advance(16.0).still_animating);
    assert!(effect.is_active());

    effect.destroy();
    assert!(!effect.is_active());
    assert_eq!(
        effect.deform_vertex(1.0, 1.0, SIZE),
        SIZE,
        "destroyed dispatch should deform to identity"
    );
}
