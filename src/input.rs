//! Keyboard mapping for the game screen.

use crate::game::GameInput;
use crossterm::event::KeyCode;

/// Map a key press to a directional intent.
///
/// Only the four arrow keys carry an intent; anything else is not game input
/// (restart/quit keys are handled by the main loop).
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up => Some(GameInput::Up),
        KeyCode::Down => Some(GameInput::Down),
        KeyCode::Left => Some(GameInput::Left),
        KeyCode::Right => Some(GameInput::Right),
        _ => None,
    }
}
