use glam::Vec3;

// Shared gameplay tuning constants. `GameConfig::default()` is built from these.

// Key codes (DOM `KeyboardEvent.keyCode`)
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_SPACE: u32 = 32;
pub const KEY_A: u32 = 65;
pub const KEY_D: u32 = 68;
pub const KEY_S: u32 = 83;
pub const KEY_W: u32 = 87;

// Character movement
pub const MOVE_STEP: f32 = 10.0; // world units per frame along each held axis
pub const JUMP_DURATION_SEC: f32 = 0.6; // ground to ground
pub const JUMP_HEIGHT: f32 = 300.0; // apex of the jump parabola
pub const JUMP_EPSILON_SEC: f32 = 1e-4; // slack when comparing elapsed jump time
pub const CHARACTER_START: Vec3 = Vec3::new(0.0, -1100.0, 1800.0);
pub const CHARACTER_HALF_EXTENTS: Vec3 = Vec3::new(50.0, 100.0, 50.0);
pub const CHARACTER_COLOR: [f32; 4] = [0.25, 0.45, 0.85, 1.0];

// Ground slab
pub const GROUND_Y: f32 = -1200.0; // top surface
pub const GROUND_HALF_SIZE: f32 = 2500.0;
pub const GROUND_THICKNESS: f32 = 50.0;
pub const GROUND_COLOR: [f32; 4] = [0.42, 0.55, 0.33, 1.0];

// Obstacles
pub const OBSTACLE_COUNT: usize = 5;
pub const OBSTACLE_COUNT_MAX: usize = 60; // plus ground and character, fits MAX_BOX_INSTANCES
pub const OBSTACLE_SEED: u64 = 42;
pub const OBSTACLE_AREA_MIN: [f32; 2] = [-2000.0, -2000.0]; // (x, z)
pub const OBSTACLE_AREA_MAX: [f32; 2] = [2000.0, 1200.0]; // (x, z)
pub const OBSTACLE_HALF_SIZE_MIN: f32 = 60.0;
pub const OBSTACLE_HALF_SIZE_MAX: f32 = 180.0;
pub const OBSTACLE_PALETTE: [[f32; 4]; 4] = [
    [0.85, 0.30, 0.25, 1.0], // brick
    [0.90, 0.65, 0.20, 1.0], // amber
    [0.55, 0.35, 0.70, 1.0], // violet
    [0.35, 0.35, 0.38, 1.0], // slate
];

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 100.0;
pub const CAMERA_ZFAR: f32 = 20000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2000.0, 4000.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, -160.0, 0.0);

// Orbit rig
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
pub const ORBIT_PITCH_LIMIT: f32 = 1.5; // just short of +-pi/2
pub const ORBIT_MIN_DISTANCE: f32 = 500.0;
pub const ORBIT_MAX_DISTANCE: f32 = 12000.0;
pub const ORBIT_ZOOM_PER_WHEEL_PX: f32 = 0.001;

// Frame timing
pub const MAX_FRAME_DT: f32 = 0.1; // clamp after tab switches so jumps don't teleport
