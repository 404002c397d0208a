use crate::character::CharacterParams;
use crate::constants::*;
use crate::error::ConfigError;
use crate::obstacle::SpawnArea;
use glam::Vec3;

/// All start-up tunables. Defaults come from `constants.rs`; the web
/// frontend can override a few of them from the page's query string.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub character: CharacterParams,
    pub character_start: Vec3,
    pub obstacle_count: usize,
    pub obstacle_seed: u64,
    pub spawn_area: SpawnArea,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            character: CharacterParams::default(),
            character_start: CHARACTER_START,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_seed: OBSTACLE_SEED,
            spawn_area: SpawnArea::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.character;
        if !(c.move_step.is_finite() && c.move_step >= 0.0) {
            return Err(invalid("step", c.move_step));
        }
        if !(c.jump_duration_sec.is_finite() && c.jump_duration_sec > JUMP_EPSILON_SEC) {
            return Err(invalid("jump_duration", c.jump_duration_sec));
        }
        if !(c.jump_height.is_finite() && c.jump_height >= 0.0) {
            return Err(invalid("jump_height", c.jump_height));
        }
        if !c.half_extents.is_finite() || c.half_extents.min_element() <= 0.0 {
            return Err(invalid("character_extents", c.half_extents));
        }
        if !self.character_start.is_finite() {
            return Err(invalid("character_start", self.character_start));
        }
        if self.obstacle_count > OBSTACLE_COUNT_MAX {
            return Err(invalid("obstacles", self.obstacle_count));
        }
        let a = &self.spawn_area;
        let finite = a.min.iter().chain(&a.max).all(|v| v.is_finite()) && a.ground_y.is_finite();
        if !finite || a.min[0] > a.max[0] || a.min[1] > a.max[1] {
            return Err(invalid("spawn_area", format!("{:?}..{:?}", a.min, a.max)));
        }
        Ok(())
    }

    /// Apply `key=value` overrides from a URL query string (leading `?`
    /// optional) and validate the result. Unknown keys are ignored.
    pub fn with_query(mut self, query: &str) -> Result<Self, ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "step" => self.character.move_step = parse(key, value)?,
                "jump_height" => self.character.jump_height = parse(key, value)?,
                "jump_duration" => self.character.jump_duration_sec = parse(key, value)?,
                "obstacles" => self.obstacle_count = parse(key, value)?,
                "seed" => self.obstacle_seed = parse(key, value)?,
                "normalize" => self.character.normalize_diagonal = parse_flag(key, value)?,
                _ => log::warn!("[config] ignoring unknown override `{}`", key),
            }
        }
        self.validate()?;
        Ok(self)
    }
}

fn invalid(key: &'static str, value: impl std::fmt::Debug) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: format!("{:?}", value),
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Unparsable {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "true" | "on" | "" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Unparsable {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
