//! Serpent - a terminal grid snake game.
//!
//! The game engine lives in [`game`]; the terminal view adapter in [`ui`].
//! Everything the engine needs from the outside world (tick source, key
//! events, record storage) is driven by the binary.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod record;
pub mod ui;
pub mod utils;

pub use constants::{BOARD_CELLS, BOARD_SIZE, TICK_INTERVAL_MS};
pub use game::{Apple, Cell, Direction, Game, GameInput, Phase, RoundOutcome, Snake, TickOutcome};
pub use record::RecordStore;
