use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::KeyCode;

use crate::game::Action;
use crate::geometry::Direction;

/// Translates a key press into a game action. Letter key codes ignore shift,
/// so `w` and `W` both steer up. `None` means the key is not ours and should
/// be left alone; `Some` means the game consumed it.
pub fn map_key(key: KeyCode) -> Option<Action> {
    let dir = match key {
        KeyCode::Up | KeyCode::W => Direction::Up,
        KeyCode::Down | KeyCode::S => Direction::Down,
        KeyCode::Left | KeyCode::A => Direction::Left,
        KeyCode::Right | KeyCode::D => Direction::Right,
        KeyCode::Space | KeyCode::Enter | KeyCode::KpEnter => return Some(Action::ToggleStartPause),
        _ => return None,
    };
    Some(Action::SetDirection(dir))
}

/// Collects key presses in the order the window delivered them.
///
/// The frame loop replays the raw input events into this handler with
/// `macroquad::input::utils::repeat_all_miniquad_input`, then drains the
/// actions. Auto-repeat events are dropped so holding Space does not flicker
/// between paused and running.
#[derive(Debug, Default)]
pub struct KeyQueue {
    actions: Vec<Action>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: KeyCode, repeat: bool) {
        if repeat {
            return;
        }
        if let Some(action) = map_key(key) {
            self.actions.push(action);
        }
    }

    /// Actions queued since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }
}

impl EventHandler for KeyQueue {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        self.push(keycode, repeat);
    }
}
