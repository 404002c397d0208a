use crate::constants::*;
use crate::error::GameError;
use crate::state::BoxInstance;
use glam::Vec3;
use rand::prelude::*;

/// Rectangle on the ground (x/z) that obstacles are scattered over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnArea {
    pub min: [f32; 2],
    pub max: [f32; 2],
    pub ground_y: f32,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            min: OBSTACLE_AREA_MIN,
            max: OBSTACLE_AREA_MAX,
            ground_y: GROUND_Y,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Obstacle {
    pub id: usize,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub color: [f32; 4],
}

impl Obstacle {
    /// Scatter `count` obstacles resting on the ground. The same seed always
    /// yields the same layout.
    pub fn spawn_batch(count: usize, seed: u64, area: SpawnArea) -> Vec<Obstacle> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|id| {
                let half = Vec3::new(
                    rng.gen_range(OBSTACLE_HALF_SIZE_MIN..=OBSTACLE_HALF_SIZE_MAX),
                    rng.gen_range(OBSTACLE_HALF_SIZE_MIN..=OBSTACLE_HALF_SIZE_MAX),
                    rng.gen_range(OBSTACLE_HALF_SIZE_MIN..=OBSTACLE_HALF_SIZE_MAX),
                );
                let x = rng.gen_range(area.min[0]..=area.max[0]);
                let z = rng.gen_range(area.min[1]..=area.max[1]);
                let color = *OBSTACLE_PALETTE
                    .choose(&mut rng)
                    .unwrap_or(&OBSTACLE_PALETTE[0]);
                Obstacle {
                    id,
                    position: Vec3::new(x, area.ground_y + half.y, z),
                    half_extents: half,
                    color,
                }
            })
            .collect()
    }

    /// Per-frame hook. Obstacles are static for now; this only rejects
    /// obstacles that can no longer be drawn.
    pub fn update(&mut self, _dt_sec: f32) -> Result<(), GameError> {
        match self.malformed_reason() {
            Some(reason) => Err(GameError::MalformedObstacle {
                index: self.id,
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.malformed_reason().is_none()
    }

    fn malformed_reason(&self) -> Option<&'static str> {
        if !self.position.is_finite() {
            Some("non-finite position")
        } else if !self.half_extents.is_finite() || self.half_extents.min_element() <= 0.0 {
            Some("invalid extents")
        } else {
            None
        }
    }

    pub fn visual(&self) -> BoxInstance {
        BoxInstance {
            center: self.position,
            half_extents: self.half_extents,
            color: self.color,
        }
    }
}
