use shotlens_core::geometry::Vec2;
use shotlens_core::viewport::{
    Handled, InputEvent, InteractionController, InteractionMode, Viewport,
};

fn setup() -> (InteractionController, Viewport) {
    (InteractionController::new(), Viewport::default())
}

#[test]
fn test_space_arms_but_does_not_pan() {
    let (mut ctl, mut vp) = setup();
    assert_eq!(
        ctl.handle(InputEvent::SpaceDown { repeat: false }, &mut vp),
        Handled::Consumed
    );
    assert_eq!(ctl.mode(), InteractionMode::SpaceHeld);
    assert!(vp.state().is_space_pressed);
    assert!(!vp.is_panning());

    // Moving the pointer with only space held changes nothing.
    ctl.handle(InputEvent::PointerMove(Vec2::new(50.0, 50.0)), &mut vp);
    assert_eq!(vp.pan_offset(), Vec2::ZERO);
}

#[test]
fn test_space_then_primary_pans() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::SpaceDown { repeat: false }, &mut vp);
    ctl.handle(InputEvent::PrimaryDown(Vec2::new(100.0, 100.0)), &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::SpacePanning);

    ctl.handle(InputEvent::PointerMove(Vec2::new(150.0, 130.0)), &mut vp);
    assert_eq!(vp.pan_offset(), Vec2::new(50.0, 30.0));

    ctl.handle(InputEvent::ButtonUp, &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::Idle);
    assert!(!vp.is_panning());
}

#[test]
fn test_repeat_space_down_ignored() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::SpaceDown { repeat: true }, &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::Idle);
    assert!(!vp.state().is_space_pressed);
}

#[test]
fn test_space_up_returns_to_idle() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::SpaceDown { repeat: false }, &mut vp);
    ctl.handle(InputEvent::SpaceUp, &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::Idle);
    assert!(!vp.state().is_space_pressed);
}

#[test]
fn test_space_up_during_space_pan_ends_pan() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::SpaceDown { repeat: false }, &mut vp);
    ctl.handle(InputEvent::PrimaryDown(Vec2::ZERO), &mut vp);
    ctl.handle(InputEvent::SpaceUp, &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::Idle);
    assert!(!vp.is_panning());
}

#[test]
fn test_middle_pan_survives_space_release() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::SpaceDown { repeat: false }, &mut vp);
    ctl.handle(InputEvent::MiddleDown(Vec2::new(10.0, 10.0)), &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::MiddlePanning);

    ctl.handle(InputEvent::SpaceUp, &mut vp);
    assert_eq!(ctl.mode(), InteractionMode::MiddlePanning);
    assert!(vp.is_panning());

    ctl.handle(InputEvent::PointerMove(Vec2::new(30.0, 5.0)), &mut vp);
    assert_eq!(vp.pan_offset(), Vec2::new(20.0, -5.0));
}

#[test]
fn test_middle_pan_from_idle_ends_on_leave() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::MiddleDown(Vec2::ZERO), &mut vp);
    assert!(vp.state().is_middle_mouse_down);
    assert_eq!(
        ctl.handle(InputEvent::PointerLeave, &mut vp),
        Handled::Consumed
    );
    assert_eq!(ctl.mode(), InteractionMode::Idle);
    assert!(!vp.state().is_middle_mouse_down);
}

#[test]
fn test_only_one_pan_gesture_at_a_time() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::MiddleDown(Vec2::new(0.0, 0.0)), &mut vp);
    ctl.handle(InputEvent::PointerMove(Vec2::new(5.0, 5.0)), &mut vp);
    // A second press while panning must not re-anchor the gesture.
    ctl.handle(InputEvent::MiddleDown(Vec2::new(100.0, 100.0)), &mut vp);
    ctl.handle(InputEvent::PrimaryDown(Vec2::new(100.0, 100.0)), &mut vp);
    ctl.handle(InputEvent::PointerMove(Vec2::new(10.0, 10.0)), &mut vp);
    assert_eq!(vp.pan_offset(), Vec2::new(10.0, 10.0));
}

#[test]
fn test_idle_primary_and_move_pass_through_to_tool() {
    let (mut ctl, mut vp) = setup();
    assert_eq!(
        ctl.handle(InputEvent::PrimaryDown(Vec2::new(1.0, 1.0)), &mut vp),
        Handled::Passthrough
    );
    assert_eq!(
        ctl.handle(InputEvent::PointerMove(Vec2::new(2.0, 2.0)), &mut vp),
        Handled::Passthrough
    );
    assert_eq!(
        ctl.handle(InputEvent::ButtonUp, &mut vp),
        Handled::Passthrough
    );
    assert_eq!(ctl.mode(), InteractionMode::Idle);
}

#[test]
fn test_reset_clears_everything() {
    let (mut ctl, mut vp) = setup();
    ctl.handle(InputEvent::SpaceDown { repeat: false }, &mut vp);
    ctl.handle(InputEvent::PrimaryDown(Vec2::ZERO), &mut vp);
    ctl.reset(&mut vp);
    assert_eq!(ctl.mode(), InteractionMode::Idle);
    assert!(!vp.is_panning());
    assert!(!vp.state().is_space_pressed);
}
