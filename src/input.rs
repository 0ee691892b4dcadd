//! Polled input. The core never sees raw events; a frontend folds them into
//! something implementing `InputSource` once per frame.

use std::collections::HashSet;

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    /// Start / restart.
    Confirm,
    Mute,
}

pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
    fn is_pointer_down(&self) -> bool;
    /// Pointer position in simulation coordinates.
    fn pointer(&self) -> Vec2;
}

/// A plain snapshot of held keys and the pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub keys: HashSet<Key>,
    pub pointer_down: bool,
    pub pointer: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: &[Key]) -> Self {
        InputState { keys: keys.iter().copied().collect(), ..Self::default() }
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    fn pointer(&self) -> Vec2 {
        self.pointer
    }
}
