use crate::constants::*;
use crate::state::BoxInstance;
use glam::{Vec2, Vec3};

/// Movement and jump tuning for the character.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterParams {
    /// Distance moved per `move_by` call along a fully held axis.
    pub move_step: f32,
    pub jump_duration_sec: f32,
    pub jump_height: f32,
    pub half_extents: Vec3,
    /// Scale diagonal input to unit length so diagonals are not faster.
    pub normalize_diagonal: bool,
}

impl Default for CharacterParams {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            jump_duration_sec: JUMP_DURATION_SEC,
            jump_height: JUMP_HEIGHT,
            half_extents: CHARACTER_HALF_EXTENTS,
            normalize_diagonal: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum JumpState {
    #[default]
    Idle,
    Jumping {
        elapsed: f32,
    },
}

/// The player-controlled box. `position` is the grounded centre; the jump
/// offset is applied on top when building the visual.
#[derive(Clone, Debug)]
pub struct Character {
    pub position: Vec3,
    pub params: CharacterParams,
    jump: JumpState,
    vertical_offset: f32,
}

impl Character {
    pub fn new(position: Vec3, params: CharacterParams) -> Self {
        Self {
            position,
            params,
            jump: JumpState::Idle,
            vertical_offset: 0.0,
        }
    }

    /// Step the character along the requested direction. `x` and `z` are
    /// expected in [-1, 1]; larger magnitudes are clamped.
    pub fn move_by(&mut self, x: f32, z: f32) {
        let requested = Vec2::new(x, z);
        if !requested.is_finite() {
            return;
        }
        let mut dir = requested.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        if self.params.normalize_diagonal && dir.length_squared() > 1.0 {
            dir = dir.normalize();
        }
        self.position.x += dir.x * self.params.move_step;
        self.position.z += dir.y * self.params.move_step;
    }

    /// Start a jump. Returns false and changes nothing while airborne.
    pub fn jump(&mut self) -> bool {
        match self.jump {
            JumpState::Idle => {
                self.jump = JumpState::Jumping { elapsed: 0.0 };
                log::debug!("[character] jump start at ({:.0},{:.0})", self.position.x, self.position.z);
                true
            }
            JumpState::Jumping { .. } => false,
        }
    }

    /// Advance the jump by `dt_sec`. Horizontal position is untouched.
    pub fn update(&mut self, dt_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let JumpState::Jumping { elapsed } = self.jump else {
            return;
        };
        let elapsed = elapsed + dt;
        let duration = self.params.jump_duration_sec;
        if elapsed + JUMP_EPSILON_SEC >= duration {
            self.jump = JumpState::Idle;
            self.vertical_offset = 0.0;
            log::debug!("[character] landed");
            return;
        }
        let t = elapsed / duration;
        self.vertical_offset = self.params.jump_height * 4.0 * t * (1.0 - t);
        self.jump = JumpState::Jumping { elapsed };
    }

    #[inline]
    pub fn jump_state(&self) -> JumpState {
        self.jump
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        matches!(self.jump, JumpState::Jumping { .. })
    }

    #[inline]
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Grounded position plus the current jump offset.
    pub fn world_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.vertical_offset
    }

    pub fn visual(&self) -> BoxInstance {
        BoxInstance {
            center: self.world_position(),
            half_extents: self.params.half_extents,
            color: CHARACTER_COLOR,
        }
    }
}
