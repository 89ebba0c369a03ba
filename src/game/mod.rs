//! The game-state engine: board model and tick advancement.

pub mod logic;
pub mod types;

pub use logic::{Game, GameInput, Phase, RoundOutcome, TickOutcome};
pub use types::{Apple, Cell, Direction, Snake};
