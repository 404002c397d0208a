//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The renderer
//! consumes them to build camera matrices and per-instance box data.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
    /// Inverse of projection * rotation-only view, for reconstructing skybox
    /// directions from clip space.
    pub fn sky_inv_view_proj(&self) -> Mat4 {
        let dir = (self.target - self.eye).normalize_or_zero();
        let view = Mat4::look_to_rh(Vec3::ZERO, dir, self.up);
        (self.projection_matrix() * view).inverse()
    }
}

/// Orbit rig around a fixed target, driven by pointer drag and wheel.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(CAMERA_EYE, CAMERA_TARGET)
    }
}

impl OrbitCamera {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            target,
            yaw,
            pitch: pitch.clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT),
            distance,
        }
    }

    /// Rotate by a pointer drag given in pixels.
    pub fn orbit(&mut self, drag_px: Vec2) {
        if !drag_px.is_finite() {
            return;
        }
        self.yaw -= drag_px.x * ORBIT_RADIANS_PER_PX;
        self.pitch = (self.pitch + drag_px.y * ORBIT_RADIANS_PER_PX)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Dolly in (negative) or out (positive) by a wheel delta in pixels.
    pub fn zoom(&mut self, wheel_px: f32) {
        if !wheel_px.is_finite() {
            return;
        }
        let factor = (wheel_px * ORBIT_ZOOM_PER_WHEEL_PX).exp();
        self.distance = (self.distance * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// One axis-aligned box to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxInstance {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub color: [f32; 4],
}

/// Everything the renderer needs for one frame besides the camera.
#[derive(Clone, Debug, Default)]
pub struct SceneSnapshot {
    pub boxes: Vec<BoxInstance>,
}

impl SceneSnapshot {
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
