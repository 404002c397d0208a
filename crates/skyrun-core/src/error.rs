use thiserror::Error;

/// Rejected configuration values, either from defaults or URL overrides.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("cannot parse override `{key}={value}`")]
    Unparsable { key: String, value: String },
}

/// Skybox face decoding failures.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("expected 6 skybox faces, got {0}")]
    FaceCount(usize),
    #[error("failed to decode skybox face {face}")]
    Decode {
        face: &'static str,
        #[source]
        source: image::ImageError,
    },
    #[error("skybox face {face} is not square ({width}x{height})")]
    NotSquare {
        face: &'static str,
        width: u32,
        height: u32,
    },
    #[error("skybox face {face} is {got}px, expected {expected}px")]
    SizeMismatch {
        face: &'static str,
        expected: u32,
        got: u32,
    },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("obstacle {index} is malformed: {reason}")]
    MalformedObstacle { index: usize, reason: &'static str },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}
