// Host-side tests for key state, bindings and the intent queue.

use skyrun_core::*;

fn held(codes: &[KeyCode]) -> InputState {
    let mut input = InputState::default();
    input.apply(codes.iter().map(|c| Intent::KeyDown(*c)));
    input
}

#[test]
fn opposing_keys_cancel() {
    let pairs = [
        (KEY_LEFT, KEY_RIGHT),
        (KEY_A, KEY_D),
        (KEY_UP, KEY_DOWN),
        (KEY_W, KEY_S),
        (KEY_A, KEY_RIGHT),
        (KEY_W, KEY_DOWN),
    ];
    for (a, b) in pairs {
        let axes = held(&[a, b]).axes();
        assert_eq!(axes, MoveAxes::default(), "keys {a} and {b} should cancel");
    }
}

#[test]
fn axis_convention_matches_bindings() {
    assert_eq!(held(&[KEY_W]).axes(), MoveAxes { x: 0, z: 1 });
    assert_eq!(held(&[KEY_DOWN]).axes(), MoveAxes { x: 0, z: -1 });
    assert_eq!(held(&[KEY_A]).axes(), MoveAxes { x: 1, z: 0 });
    assert_eq!(held(&[KEY_RIGHT]).axes(), MoveAxes { x: -1, z: 0 });
    assert_eq!(held(&[KEY_W, KEY_A]).axes(), MoveAxes { x: 1, z: 1 });
    // both keys for one action still count once
    assert_eq!(held(&[KEY_W, KEY_UP]).axes(), MoveAxes { x: 0, z: 1 });
}

#[test]
fn keyup_always_clears_entry() {
    let mut keys = KeyState::default();
    keys.release(KEY_W);
    assert!(!keys.is_pressed(KEY_W));

    keys.press(KEY_W);
    keys.press(KEY_W);
    assert!(keys.is_pressed(KEY_W));
    keys.release(KEY_W);
    assert!(!keys.is_pressed(KEY_W));

    keys.release(KEY_W);
    assert!(!keys.is_pressed(KEY_W));
}

#[test]
fn unbound_codes_are_tracked_but_ignored() {
    let mut input = held(&[81]); // Q
    assert!(input.keys.is_pressed(81));
    assert!(input.axes().is_zero());
    let cmds = input.apply([Intent::KeyDown(81)]);
    assert_eq!(cmds.jump_requests, 0);
}

#[test]
fn release_all_clears_held_keys() {
    let mut input = held(&[KEY_W, KEY_A, KEY_SPACE]);
    assert_eq!(input.keys.held_count(), 3);
    input.apply([Intent::ReleaseAll]);
    assert_eq!(input.keys.held_count(), 0);
    assert!(input.axes().is_zero());
}

#[test]
fn every_jump_keydown_is_a_request() {
    let mut input = InputState::default();
    let cmds = input.apply([
        Intent::KeyDown(KEY_SPACE),
        Intent::KeyDown(KEY_SPACE), // key repeat
        Intent::KeyUp(KEY_SPACE),
        Intent::KeyDown(KEY_SPACE),
    ]);
    assert_eq!(cmds.jump_requests, 3);
    assert!(input.keys.is_pressed(KEY_SPACE));
}

#[test]
fn orbit_and_zoom_accumulate() {
    let mut input = InputState::default();
    let cmds = input.apply([
        Intent::Orbit { dx: 3.0, dy: -1.0 },
        Intent::Orbit { dx: 2.0, dy: 4.0 },
        Intent::Zoom(100.0),
        Intent::Zoom(-40.0),
    ]);
    assert_eq!(cmds.orbit, glam::Vec2::new(5.0, 3.0));
    assert_eq!(cmds.zoom, 60.0);
}

#[test]
fn queue_drains_in_order() {
    let mut queue = InputQueue::default();
    queue.push(Intent::KeyDown(KEY_W));
    queue.push(Intent::KeyUp(KEY_W));
    queue.push(Intent::ReleaseAll);
    assert_eq!(queue.len(), 3);
    let drained = queue.drain();
    assert!(queue.is_empty());
    assert_eq!(
        drained.as_slice(),
        &[
            Intent::KeyDown(KEY_W),
            Intent::KeyUp(KEY_W),
            Intent::ReleaseAll
        ]
    );
}

#[test]
fn rebinding_changes_actions() {
    let mut bindings = KeyBindings::default();
    assert_eq!(bindings.action_for(KEY_SPACE), Some(Action::Jump));
    assert_eq!(bindings.unbind(KEY_SPACE), Some(Action::Jump));
    bindings.bind(74, Action::Jump); // J
    let mut input = InputState::new(bindings);
    assert_eq!(input.apply([Intent::KeyDown(KEY_SPACE)]).jump_requests, 0);
    assert_eq!(input.apply([Intent::KeyDown(74)]).jump_requests, 1);
}

#[test]
fn captured_keys_are_arrows_and_space() {
    let bindings = KeyBindings::default();
    for code in [KEY_UP, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_SPACE] {
        assert!(bindings.captures(code));
    }
    assert!(!bindings.captures(KEY_W));
    assert!(!bindings.captures(13)); // Enter
}
