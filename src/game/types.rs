//! Board data structures: cells, directions, the snake, and the apple.

use crate::constants::{BOARD_SIZE, INITIAL_APPLE, INITIAL_BODY, INITIAL_DIRECTION};
use rand::Rng;
use std::collections::VecDeque;

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (row, col) delta for one step in this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A board coordinate. Signed so a head that has left the board is
/// representable between a move and the wall check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// True if the cell lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The neighboring cell one step away in the given direction.
    pub fn step(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// The player-controlled chain of occupied cells.
///
/// The head is the back element of `body`, the tail the front.
#[derive(Debug, Clone)]
pub struct Snake {
    pub body: VecDeque<Cell>,
    pub direction: Direction,
}

impl Snake {
    /// A snake in the initial configuration: two cells at board center,
    /// heading right.
    pub fn new() -> Self {
        Self {
            body: INITIAL_BODY.iter().map(|&(r, c)| Cell::new(r, c)).collect(),
            direction: INITIAL_DIRECTION,
        }
    }

    /// The head cell (back of the body).
    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Assigns a new direction. Callers enforce the reversal ban.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance one cell: drop the tail, append the new head.
    ///
    /// Length is preserved. No bounds check happens here; the engine
    /// validates the head after the move.
    pub fn step(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.pop_front();
        self.body.push_back(new_head);
    }

    /// Prepend a duplicate of the tail cell. The next `step` drops the
    /// duplicate, so a grow/step pair nets exactly one extra cell.
    pub fn grow(&mut self) {
        let tail = self.body[0];
        self.body.push_front(tail);
    }

    /// True iff some element other than the head equals `cell`. Used after a
    /// move to test the head against the body strictly behind it.
    pub fn is_body_segment(&self, cell: Cell) -> bool {
        let behind_head = self.body.len() - 1;
        self.body.iter().take(behind_head).any(|&seg| seg == cell)
    }

    /// Restore the initial body and direction.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

/// The single target cell the snake is chasing.
#[derive(Debug, Clone)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    /// The apple in its fixed boot position.
    pub fn new() -> Self {
        let (row, col) = INITIAL_APPLE;
        Self {
            position: Cell::new(row, col),
        }
    }

    /// Sample a new position uniformly over the board, rejecting cells
    /// occupied by the snake.
    ///
    /// Terminates as long as at least one cell is free; the engine declares a
    /// win instead of respawning once the snake fills the board.
    pub fn respawn<R: Rng>(&mut self, body: &VecDeque<Cell>, rng: &mut R) {
        loop {
            let candidate = Cell::new(
                rng.gen_range(0..BOARD_SIZE),
                rng.gen_range(0..BOARD_SIZE),
            );
            if !body.contains(&candidate) {
                self.position = candidate;
                return;
            }
        }
    }
}

impl Default for Apple {
    fn default() -> Self {
        Self::new()
    }
}
