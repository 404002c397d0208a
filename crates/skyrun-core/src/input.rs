//! Keyboard state, key bindings and the intent queue.
//!
//! DOM handlers only ever push [`Intent`]s. The frame drains the queue into
//! an [`InputState`], which is the single writer of the key map, and reads
//! movement axes from it afterwards.

use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::collections::VecDeque;

pub type KeyCode = u32;

/// Logical actions the demo understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Jump,
}

/// Live map of which key codes are held.
///
/// Codes that were never seen and codes that were released both read as
/// not pressed.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: FnvHashMap<KeyCode, bool>,
}

impl KeyState {
    pub fn press(&mut self, code: KeyCode) {
        self.pressed.insert(code, true);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.pressed.insert(code, false);
    }

    /// Drop every entry, e.g. when the window loses focus and key-ups are lost.
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    #[inline]
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.get(&code).copied().unwrap_or(false)
    }

    pub fn held_count(&self) -> usize {
        self.pressed.values().filter(|p| **p).count()
    }
}

/// Key code to action mapping. Several codes may share one action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: FnvHashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    /// Arrows and WASD move, space jumps.
    fn default() -> Self {
        let mut bindings = Self {
            key_to_action: FnvHashMap::default(),
        };
        bindings.bind(KEY_UP, Action::MoveForward);
        bindings.bind(KEY_W, Action::MoveForward);
        bindings.bind(KEY_DOWN, Action::MoveBack);
        bindings.bind(KEY_S, Action::MoveBack);
        bindings.bind(KEY_LEFT, Action::MoveLeft);
        bindings.bind(KEY_A, Action::MoveLeft);
        bindings.bind(KEY_RIGHT, Action::MoveRight);
        bindings.bind(KEY_D, Action::MoveRight);
        bindings.bind(KEY_SPACE, Action::Jump);
        bindings
    }
}

impl KeyBindings {
    pub fn bind(&mut self, code: KeyCode, action: Action) {
        self.key_to_action.insert(code, action);
    }

    pub fn unbind(&mut self, code: KeyCode) -> Option<Action> {
        self.key_to_action.remove(&code)
    }

    #[inline]
    pub fn action_for(&self, code: KeyCode) -> Option<Action> {
        self.key_to_action.get(&code).copied()
    }

    /// True if any key bound to `action` is held.
    pub fn is_active(&self, keys: &KeyState, action: Action) -> bool {
        self.key_to_action
            .iter()
            .any(|(code, a)| *a == action && keys.is_pressed(*code))
    }

    /// Whether the browser's default handling (page scroll) should be suppressed.
    pub fn captures(&self, code: KeyCode) -> bool {
        matches!(code, KEY_UP | KEY_DOWN | KEY_LEFT | KEY_RIGHT | KEY_SPACE)
            && self.action_for(code).is_some()
    }
}

/// Requested direction per axis, each in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAxes {
    pub x: i8,
    pub z: i8,
}

impl MoveAxes {
    /// Forward is +z, left is +x. Opposite keys cancel.
    pub fn from_keys(keys: &KeyState, bindings: &KeyBindings) -> Self {
        let mut axes = Self::default();
        if bindings.is_active(keys, Action::MoveForward) {
            axes.z += 1;
        }
        if bindings.is_active(keys, Action::MoveLeft) {
            axes.x += 1;
        }
        if bindings.is_active(keys, Action::MoveBack) {
            axes.z -= 1;
        }
        if bindings.is_active(keys, Action::MoveRight) {
            axes.x -= 1;
        }
        axes
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.z == 0
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.z as f32)
    }
}

/// Something an event handler wants the next frame to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    ReleaseAll,
    /// Pointer drag in canvas pixels.
    Orbit { dx: f32, dy: f32 },
    /// Wheel delta in pixels, positive zooms out.
    Zoom(f32),
}

/// FIFO of intents between event handlers and the frame loop.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<Intent>,
}

impl InputQueue {
    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&mut self) -> SmallVec<[Intent; 8]> {
        self.pending.drain(..).collect()
    }
}

/// What a frame's worth of intents asks the world to do besides holding keys.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCommands {
    pub jump_requests: u32,
    pub orbit: Vec2,
    pub zoom: f32,
}

/// Key state plus bindings, passed explicitly into each frame update.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keys: KeyState,
    pub bindings: KeyBindings,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            keys: KeyState::default(),
            bindings,
        }
    }

    /// Apply intents in order. Every key-down of a jump key counts as one
    /// request, repeats included.
    pub fn apply<I>(&mut self, intents: I) -> FrameCommands
    where
        I: IntoIterator<Item = Intent>,
    {
        let mut cmds = FrameCommands::default();
        for intent in intents {
            match intent {
                Intent::KeyDown(code) => {
                    self.keys.press(code);
                    if self.bindings.action_for(code) == Some(Action::Jump) {
                        cmds.jump_requests += 1;
                    }
                }
                Intent::KeyUp(code) => self.keys.release(code),
                Intent::ReleaseAll => {
                    log::debug!("[keys] released {} held keys", self.keys.held_count());
                    self.keys.release_all();
                }
                Intent::Orbit { dx, dy } => cmds.orbit += Vec2::new(dx, dy),
                Intent::Zoom(d) => cmds.zoom += d,
            }
        }
        cmds
    }

    pub fn axes(&self) -> MoveAxes {
        MoveAxes::from_keys(&self.keys, &self.bindings)
    }
}
