use crate::character::Character;
use crate::config::GameConfig;
use crate::constants::*;
use crate::error::GameError;
use crate::input::{InputState, Intent, MoveAxes};
use crate::obstacle::Obstacle;
use crate::state::{BoxInstance, OrbitCamera, SceneSnapshot};
use fnv::FnvHashSet;
use glam::Vec3;

/// Summary of one `World::frame` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub axes: MoveAxes,
    /// Jump requests seen this frame, including ones ignored mid-air.
    pub jump_requests: u32,
    /// Idle -> Jumping transitions that actually happened.
    pub jumps_started: u32,
    pub landed: bool,
    pub obstacles_skipped: usize,
}

/// Owns the character, the obstacles and the orbit rig.
pub struct World {
    pub character: Character,
    pub obstacles: Vec<Obstacle>,
    pub orbit: OrbitCamera,
    pub ground: BoxInstance,
    /// Ids of obstacles currently being skipped.
    skipped: FnvHashSet<usize>,
    frame_index: u64,
}

impl World {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let character = Character::new(config.character_start, config.character.clone());
        let obstacles =
            Obstacle::spawn_batch(config.obstacle_count, config.obstacle_seed, config.spawn_area);
        log::info!(
            "[world] character at ({:.0},{:.0},{:.0}), {} obstacles (seed {})",
            character.position.x,
            character.position.y,
            character.position.z,
            obstacles.len(),
            config.obstacle_seed
        );
        Ok(Self {
            character,
            obstacles,
            orbit: OrbitCamera::default(),
            ground: BoxInstance {
                center: Vec3::new(0.0, config.spawn_area.ground_y - GROUND_THICKNESS * 0.5, 0.0),
                half_extents: Vec3::new(GROUND_HALF_SIZE, GROUND_THICKNESS * 0.5, GROUND_HALF_SIZE),
                color: GROUND_COLOR,
            },
            skipped: FnvHashSet::default(),
            frame_index: 0,
        })
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Number of obstacles skipped by the most recent frame.
    pub fn skipped_obstacles(&self) -> usize {
        self.skipped.len()
    }

    /// Run one frame: apply intents, move, advance the jump, update obstacles.
    pub fn frame<I>(&mut self, input: &mut InputState, intents: I, dt_sec: f32) -> FrameReport
    where
        I: IntoIterator<Item = Intent>,
    {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let cmds = input.apply(intents);
        let mut report = FrameReport {
            jump_requests: cmds.jump_requests,
            ..Default::default()
        };

        for _ in 0..cmds.jump_requests {
            if self.character.jump() {
                report.jumps_started += 1;
            }
        }

        report.axes = input.axes();
        let dir = report.axes.as_vec2();
        self.character.move_by(dir.x, dir.y);

        let was_jumping = self.character.is_jumping();
        self.character.update(dt);
        report.landed = was_jumping && !self.character.is_jumping();

        for obstacle in &mut self.obstacles {
            match obstacle.update(dt) {
                Err(e) => {
                    if self.skipped.insert(obstacle.id) {
                        log::warn!("[world] frame {}: skipping {}", self.frame_index, e);
                    }
                    report.obstacles_skipped += 1;
                }
                Ok(()) => {
                    if self.skipped.remove(&obstacle.id) {
                        log::info!(
                            "[world] frame {}: obstacle {} drawable again",
                            self.frame_index,
                            obstacle.id
                        );
                    }
                }
            }
        }

        if cmds.orbit != glam::Vec2::ZERO {
            self.orbit.orbit(cmds.orbit);
        }
        if cmds.zoom != 0.0 {
            self.orbit.zoom(cmds.zoom);
        }

        self.frame_index += 1;
        report
    }

    /// Boxes to draw: ground, character, then every drawable obstacle.
    pub fn snapshot(&self) -> SceneSnapshot {
        let mut boxes = Vec::with_capacity(2 + self.obstacles.len());
        boxes.push(self.ground);
        boxes.push(self.character.visual());
        boxes.extend(
            self.obstacles
                .iter()
                .filter(|o| o.is_drawable())
                .map(Obstacle::visual),
        );
        SceneSnapshot { boxes }
    }
}
