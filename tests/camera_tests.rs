// Host-side tests for the camera description and orbit rig.

use glam::{Vec2, Vec3, Vec4};
use skyrun_core::*;

#[test]
fn default_orbit_reproduces_start_eye() {
    let orbit = OrbitCamera::default();
    assert!(orbit.eye().distance(CAMERA_EYE) < 1e-2);
    assert_eq!(orbit.target, CAMERA_TARGET);
}

#[test]
fn pitch_is_clamped() {
    let mut orbit = OrbitCamera::default();
    orbit.orbit(Vec2::new(0.0, 1.0e6));
    assert_eq!(orbit.pitch, ORBIT_PITCH_LIMIT);
    orbit.orbit(Vec2::new(0.0, -1.0e6));
    assert_eq!(orbit.pitch, -ORBIT_PITCH_LIMIT);
}

#[test]
fn zoom_is_clamped_and_ignores_nan() {
    let mut orbit = OrbitCamera::default();
    orbit.zoom(-1.0e6);
    assert_eq!(orbit.distance, ORBIT_MIN_DISTANCE);
    orbit.zoom(1.0e6);
    assert_eq!(orbit.distance, ORBIT_MAX_DISTANCE);
    orbit.zoom(f32::NAN);
    assert_eq!(orbit.distance, ORBIT_MAX_DISTANCE);
}

#[test]
fn target_projects_to_screen_center() {
    let cam = OrbitCamera::default().camera(16.0 / 9.0);
    let clip = cam.view_proj() * Vec4::from((CAMERA_TARGET, 1.0));
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn sky_matrix_points_center_along_view() {
    let cam = OrbitCamera::default().camera(1.0);
    let p = cam.sky_inv_view_proj() * Vec4::new(0.0, 0.0, 1.0, 1.0);
    let dir = (p.truncate() / p.w).normalize();
    let expected = (cam.target - cam.eye).normalize();
    assert!(dir.dot(expected) > 0.999);
}

#[test]
fn degenerate_aspect_falls_back() {
    let cam = OrbitCamera::default().camera(0.0);
    assert_eq!(cam.aspect, 1.0);
    assert_eq!(cam.up, Vec3::Y);
}
