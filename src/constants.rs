use crate::game::Direction;

// Board geometry
pub const BOARD_SIZE: i16 = 10;
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 500;
/// Cap on a single frame's elapsed time; bounds catch-up steps after terminal lag.
pub const MAX_FRAME_MS: u64 = 500;

// Initial round state
pub const INITIAL_BODY: [(i16, i16); 2] = [(5, 5), (5, 6)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;
pub const INITIAL_APPLE: (i16, i16) = (2, 3);

// Persistence
pub const RECORD_FILE: &str = "record.json";
