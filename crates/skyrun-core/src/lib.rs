//! Platform-free game logic for skyrun.
//!
//! Nothing in here touches the DOM or the GPU. The web front-end feeds
//! intents in, calls [`World::frame`] once per animation frame and hands
//! the resulting [`SceneSnapshot`] to its renderer.

pub mod assets;
pub mod character;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod obstacle;
pub mod state;
pub mod world;

pub use assets::*;
pub use character::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use input::*;
pub use obstacle::*;
pub use state::*;
pub use world::*;
