/// Page, asset and lighting constants for the web frontend.
///
/// Gameplay tuning lives in `skyrun_core::constants`; these only describe
/// how the demo is mounted and lit.
// DOM
pub const CONTAINER_ID: &str = "container";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const ERROR_OVERLAY_ID: &str = "error-overlay";

// Skybox faces are fetched from here before the first frame
pub const SKYBOX_BASE_PATH: &str = "/assets/textures/skybox/";
pub const SKYBOX_EXTENSION: &str = "jpg";

// Lights (directions point from the light towards the origin)
pub const AMBIENT_RGB: [f32; 3] = [0.2, 0.2, 0.2]; // 0x333333
pub const KEY_LIGHT_POS: [f32; 3] = [-1300.0, 700.0, 1240.0];
pub const KEY_LIGHT_INTENSITY: f32 = 0.9;
pub const FILL_LIGHT_POS: [f32; 3] = [1000.0, -500.0, -1200.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.7;

// Renderer
pub const CLEAR_RGB: [f64; 3] = [1.0, 1.0, 1.0];
pub const MAX_BOX_INSTANCES: usize = 64;
