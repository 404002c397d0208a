// Host-side tests for the character controller and its jump state machine.

use glam::Vec3;
use skyrun_core::*;

fn character() -> Character {
    Character::new(CHARACTER_START, CharacterParams::default())
}

fn params_with_duration(duration: f32) -> CharacterParams {
    CharacterParams {
        jump_duration_sec: duration,
        ..Default::default()
    }
}

#[test]
fn forward_step_moves_only_z() {
    let mut c = character();
    c.move_by(0.0, 1.0);
    assert_eq!(c.position.z, CHARACTER_START.z + MOVE_STEP);
    assert_eq!(c.position.x, CHARACTER_START.x);
    assert_eq!(c.position.y, CHARACTER_START.y);
}

#[test]
fn diagonal_is_normalized_by_default() {
    let mut c = character();
    c.move_by(1.0, 1.0);
    let moved = c.position - CHARACTER_START;
    assert!((moved.length() - MOVE_STEP).abs() < 1e-3);
    assert!((moved.x - moved.z).abs() < 1e-4);
}

#[test]
fn diagonal_is_faster_without_normalization() {
    let mut c = Character::new(
        Vec3::ZERO,
        CharacterParams {
            normalize_diagonal: false,
            ..Default::default()
        },
    );
    c.move_by(1.0, -1.0);
    assert_eq!(c.position, Vec3::new(MOVE_STEP, 0.0, -MOVE_STEP));
}

#[test]
fn oversized_and_invalid_directions() {
    let mut c = Character::new(Vec3::ZERO, CharacterParams::default());
    c.move_by(5.0, 0.0);
    assert_eq!(c.position.x, MOVE_STEP);
    c.move_by(f32::NAN, 1.0);
    assert_eq!(c.position, Vec3::new(MOVE_STEP, 0.0, 0.0));
}

#[test]
fn jump_is_idempotent_while_airborne() {
    let mut c = character();
    assert!(c.jump());
    c.update(0.1);
    let state = c.jump_state();
    let offset = c.vertical_offset();
    assert!(!c.jump());
    assert_eq!(c.jump_state(), state);
    assert_eq!(c.vertical_offset(), offset);
}

#[test]
fn full_jump_cycle_returns_to_idle() {
    let mut c = Character::new(CHARACTER_START, params_with_duration(0.5));
    assert!(c.jump());
    let mut peak = 0.0f32;
    for _ in 0..3 {
        c.update(0.125);
        assert!(c.is_jumping());
        assert!(c.vertical_offset() > 0.0);
        peak = peak.max(c.vertical_offset());
    }
    c.update(0.125);
    assert_eq!(c.jump_state(), JumpState::Idle);
    assert_eq!(c.vertical_offset(), 0.0);
    assert_eq!(c.world_position(), CHARACTER_START);
    // t = 0.5 hits the apex exactly
    assert!((peak - JUMP_HEIGHT).abs() < 1e-3);
}

#[test]
fn sixty_fps_jump_lands() {
    let mut c = character();
    c.jump();
    let frames = (JUMP_DURATION_SEC * 60.0).round() as usize;
    for _ in 0..frames {
        c.update(1.0 / 60.0);
    }
    assert!(!c.is_jumping());
    assert_eq!(c.vertical_offset(), 0.0);
}

#[test]
fn update_ignores_bad_dt_and_idle() {
    let mut c = character();
    c.update(1.0);
    assert_eq!(c.jump_state(), JumpState::Idle);

    c.jump();
    c.update(-1.0);
    c.update(f32::NAN);
    assert_eq!(c.jump_state(), JumpState::Jumping { elapsed: 0.0 });
}

#[test]
fn horizontal_and_vertical_motion_compose() {
    let mut c = character();
    c.jump();
    c.move_by(1.0, 0.0);
    c.update(JUMP_DURATION_SEC / 2.0);
    let p = c.world_position();
    assert_eq!(p.x, CHARACTER_START.x + MOVE_STEP);
    assert!(p.y > CHARACTER_START.y);
    assert_eq!(c.visual().center, p);
}
