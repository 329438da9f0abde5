use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::KeyCode;

use snake_canvas::game::Action;
use snake_canvas::geometry::Direction;
use snake_canvas::input::{KeyQueue, map_key};

#[test]
fn arrows_steer() {
    assert_eq!(map_key(KeyCode::Up), Some(Action::SetDirection(Direction::Up)));
    assert_eq!(map_key(KeyCode::Down), Some(Action::SetDirection(Direction::Down)));
    assert_eq!(map_key(KeyCode::Left), Some(Action::SetDirection(Direction::Left)));
    assert_eq!(map_key(KeyCode::Right), Some(Action::SetDirection(Direction::Right)));
}

#[test]
fn wasd_steers_like_arrows() {
    assert_eq!(map_key(KeyCode::W), map_key(KeyCode::Up));
    assert_eq!(map_key(KeyCode::S), map_key(KeyCode::Down));
    assert_eq!(map_key(KeyCode::A), map_key(KeyCode::Left));
    assert_eq!(map_key(KeyCode::D), map_key(KeyCode::Right));
}

#[test]
fn space_and_enter_toggle() {
    assert_eq!(map_key(KeyCode::Space), Some(Action::ToggleStartPause));
    assert_eq!(map_key(KeyCode::Enter), Some(Action::ToggleStartPause));
    assert_eq!(map_key(KeyCode::KpEnter), Some(Action::ToggleStartPause));
}

#[test]
fn other_keys_are_ignored() {
    for key in [KeyCode::Q, KeyCode::Escape, KeyCode::Key1, KeyCode::Tab, KeyCode::LeftShift] {
        assert_eq!(map_key(key), None, "{:?}", key);
    }
}

#[test]
fn queue_keeps_press_order() {
    // Up then Left within one frame must reach the reducer as Up, Left.
    let mut keys = KeyQueue::new();
    keys.push(KeyCode::W, false);
    keys.push(KeyCode::Left, false);
    keys.push(KeyCode::Space, false);
    assert_eq!(
        keys.drain(),
        vec![
            Action::SetDirection(Direction::Up),
            Action::SetDirection(Direction::Left),
            Action::ToggleStartPause,
        ]
    );

    keys.push(KeyCode::Space, false);
    keys.push(KeyCode::D, false);
    assert_eq!(keys.drain(), vec![Action::ToggleStartPause, Action::SetDirection(Direction::Right)]);
}

#[test]
fn queue_skips_repeats_and_unknown_keys() {
    let mut keys = KeyQueue::new();
    keys.push(KeyCode::Space, false);
    keys.push(KeyCode::Space, true);
    keys.push(KeyCode::Q, false);
    keys.push(KeyCode::Down, true);
    assert_eq!(keys.drain(), vec![Action::ToggleStartPause]);
}

#[test]
fn drain_empties_the_queue() {
    let mut keys = KeyQueue::new();
    assert!(keys.drain().is_empty());
    keys.push(KeyCode::Up, false);
    assert_eq!(keys.drain().len(), 1);
    assert!(keys.drain().is_empty());
}

#[test]
fn key_down_events_feed_the_queue() {
    let mut keys = KeyQueue::new();
    let mods = KeyMods::default();
    keys.key_down_event(KeyCode::Down, mods, false);
    keys.key_down_event(KeyCode::Down, mods, true);
    keys.key_down_event(KeyCode::Enter, mods, false);
    assert_eq!(keys.drain(), vec![Action::SetDirection(Direction::Down), Action::ToggleStartPause]);
}
