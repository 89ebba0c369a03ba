//! Terminal view adapter. Renders the board, score, and record; reveals the
//! restart control on game over. Holds no game state.

mod board_scene;
mod common;

use crate::game::Game;
use ratatui::Frame;

/// Idempotent repaint of the whole screen from the current game state.
pub fn draw(frame: &mut Frame, game: &Game) {
    board_scene::render_scene(frame, frame.size(), game);
}
