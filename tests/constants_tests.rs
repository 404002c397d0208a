// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use skyrun_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn movement_constants_are_positive() {
    assert!(MOVE_STEP > 0.0);
    assert!(JUMP_DURATION_SEC > 0.0);
    assert!(JUMP_HEIGHT > 0.0);
    assert!(JUMP_EPSILON_SEC < JUMP_DURATION_SEC);
    assert!(MAX_FRAME_DT > 1.0 / 60.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn character_starts_on_the_ground() {
    let bottom = CHARACTER_START.y - CHARACTER_HALF_EXTENTS.y;
    assert!((bottom - GROUND_Y).abs() < 1e-3);
    assert!(CHARACTER_START.x.abs() < GROUND_HALF_SIZE);
    assert!(CHARACTER_START.z.abs() < GROUND_HALF_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn obstacle_area_fits_on_the_ground() {
    assert_eq!(OBSTACLE_COUNT, 5);
    assert!(OBSTACLE_COUNT <= OBSTACLE_COUNT_MAX);
    // ground and character share the instance buffer
    assert!(OBSTACLE_COUNT_MAX + 2 <= MAX_BOX_INSTANCES);
    for axis in 0..2 {
        assert!(OBSTACLE_AREA_MIN[axis] < OBSTACLE_AREA_MAX[axis]);
        assert!(OBSTACLE_AREA_MIN[axis] >= -GROUND_HALF_SIZE);
        assert!(OBSTACLE_AREA_MAX[axis] <= GROUND_HALF_SIZE);
    }
    assert!(OBSTACLE_HALF_SIZE_MIN > 0.0);
    assert!(OBSTACLE_HALF_SIZE_MAX >= OBSTACLE_HALF_SIZE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_range_covers_the_scene() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MAX_DISTANCE < CAMERA_ZFAR);
    assert!(CAMERA_EYE.distance(CAMERA_TARGET) > ORBIT_MIN_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_and_page_constants_are_sane() {
    assert!(KEY_LIGHT_INTENSITY > 0.0 && KEY_LIGHT_INTENSITY <= 1.0);
    assert!(FILL_LIGHT_INTENSITY > 0.0 && FILL_LIGHT_INTENSITY <= 1.0);
    assert!(AMBIENT_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
    // ground + character + obstacles must fit the instance buffer
    assert!(MAX_BOX_INSTANCES >= 2 + OBSTACLE_COUNT);
    assert!(SKYBOX_BASE_PATH.ends_with('/'));
    assert!(!CONTAINER_ID.is_empty());
}
