//! Game engine: input policy, tick advancement, collision resolution, and the
//! round lifecycle.

use super::types::{Apple, Direction, Snake};
use crate::constants::{BOARD_CELLS, MAX_FRAME_MS, TICK_INTERVAL_MS};
use crate::record::RecordStore;
use rand::Rng;

/// UI-agnostic directional intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
}

impl GameInput {
    fn direction(self) -> Direction {
        match self {
            Self::Up => Direction::Up,
            Self::Down => Direction::Down,
            Self::Left => Direction::Left,
            Self::Right => Direction::Right,
        }
    }
}

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Wall or self collision.
    Lose,
    /// The snake filled the board.
    Win,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Lose,
    Win,
}

/// The game engine. Owns the snake, the apple, the score, the persistent
/// record, and the pending-direction slot; the view holds no game state.
#[derive(Debug)]
pub struct Game {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    pub record: u32,
    /// Buffered direction consumed at the next tick. Last accepted input wins.
    pub pending_direction: Option<Direction>,
    pub phase: Phase,
    pub outcome: Option<RoundOutcome>,
    /// True while the round that just ended beat the stored record.
    pub new_record: bool,
    /// Sub-tick time accumulator (milliseconds).
    accumulated_ms: u64,
    /// Total ticks advanced across the session.
    pub tick_count: u64,
    record_store: RecordStore,
}

impl Game {
    /// Create an engine with a fresh round and the record loaded from the
    /// store (missing or unreadable counts as 0).
    pub fn new(record_store: RecordStore) -> Self {
        let record = record_store.load();
        Self {
            snake: Snake::new(),
            apple: Apple::new(),
            score: 0,
            record,
            pending_direction: None,
            phase: Phase::Running,
            outcome: None,
            new_record: false,
            accumulated_ms: 0,
            tick_count: 0,
            record_store,
        }
    }

    /// Process a directional intent.
    ///
    /// An input is accepted only if it is not the opposite of the snake's
    /// live direction; rejected inputs are silently discarded. Within one
    /// inter-tick interval the last accepted input wins.
    pub fn handle_input(&mut self, input: GameInput) {
        if self.phase == Phase::Over {
            return;
        }
        let direction = input.direction();
        if direction != self.snake.direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    /// Feed elapsed wall time to the engine, stepping the simulation in fixed
    /// `TICK_INTERVAL_MS` increments. Returns true if the state changed.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        if self.phase == Phase::Over {
            return false;
        }

        self.accumulated_ms += dt_ms.min(MAX_FRAME_MS);
        let mut changed = false;

        while self.accumulated_ms >= TICK_INTERVAL_MS {
            self.accumulated_ms -= TICK_INTERVAL_MS;
            self.advance(rng);
            changed = true;

            if self.phase == Phase::Over {
                break;
            }
        }

        changed
    }

    /// Advance exactly one tick: consume the pending direction, move the
    /// snake, resolve collisions, handle apple capture.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        self.tick_count += 1;

        if let Some(direction) = self.pending_direction.take() {
            if direction != self.snake.direction
                && direction != self.snake.direction.opposite()
            {
                self.snake.set_direction(direction);
            }
        }

        self.snake.step();
        let head = self.snake.head();

        if !head.in_bounds() {
            self.game_over(RoundOutcome::Lose);
            return TickOutcome::Lose;
        }

        if self.snake.is_body_segment(head) {
            self.game_over(RoundOutcome::Lose);
            return TickOutcome::Lose;
        }

        if head == self.apple.position {
            self.snake.grow();
            self.score += 1;

            if self.snake.len() == BOARD_CELLS {
                self.game_over(RoundOutcome::Win);
                return TickOutcome::Win;
            }

            self.apple.respawn(&self.snake.body, rng);
        }

        TickOutcome::Continue
    }

    /// End the round: halt ticking, persist the record if beaten, expose the
    /// restart control (via `phase`).
    fn game_over(&mut self, outcome: RoundOutcome) {
        self.phase = Phase::Over;
        self.outcome = Some(outcome);

        if self.score > self.record {
            self.record = self.score;
            self.new_record = true;
            // A failed write keeps the in-memory record for the session.
            let _ = self.record_store.save(self.record);
        }
    }

    /// Start a fresh round: reset score and snake, respawn the apple against
    /// the fresh body, clear residual tick time.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.score = 0;
        self.snake.reset();
        self.apple.respawn(&self.snake.body, rng);
        self.pending_direction = None;
        self.new_record = false;
        self.accumulated_ms = 0;
        self.phase = Phase::Running;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_SIZE;
    use crate::game::types::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_game(name: &str) -> Game {
        let path = std::env::temp_dir().join(format!("serpent_logic_{}.json", name));
        let _ = std::fs::remove_file(&path);
        Game::new(RecordStore::at(path))
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_new_game_state() {
        let game = test_game("new_state");
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.record, 0);
        assert!(game.outcome.is_none());
        assert!(game.pending_direction.is_none());
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.apple.position, Cell::new(2, 3));
    }

    #[test]
    fn test_input_buffers_pending_direction() {
        let mut game = test_game("input_buffer");
        game.handle_input(GameInput::Up);
        assert_eq!(game.pending_direction, Some(Direction::Up));
        assert_eq!(game.snake.direction, Direction::Right);
    }

    #[test]
    fn test_reversal_rejected_for_all_directions() {
        let cases = [
            (Direction::Right, GameInput::Left),
            (Direction::Left, GameInput::Right),
            (Direction::Up, GameInput::Down),
            (Direction::Down, GameInput::Up),
        ];
        for (current, reversal) in cases {
            let mut game = test_game("reversal");
            game.snake.set_direction(current);
            game.handle_input(reversal);
            assert_eq!(game.pending_direction, None);
        }
    }

    #[test]
    fn test_last_accepted_input_wins() {
        let mut game = test_game("last_wins");
        game.handle_input(GameInput::Up);
        game.handle_input(GameInput::Left); // opposite of Right: rejected
        assert_eq!(game.pending_direction, Some(Direction::Up));
        game.handle_input(GameInput::Down);
        assert_eq!(game.pending_direction, Some(Direction::Down));
    }

    #[test]
    fn test_input_ignored_when_over() {
        let mut game = test_game("input_over");
        game.phase = Phase::Over;
        game.handle_input(GameInput::Up);
        assert!(game.pending_direction.is_none());
    }

    #[test]
    fn test_advance_moves_head_by_delta() {
        let mut game = test_game("advance_delta");
        let head = game.snake.head();
        let outcome = game.advance(&mut rng());
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(game.snake.head(), head.step(Direction::Right));
    }

    #[test]
    fn test_pending_direction_applied_at_tick() {
        let mut game = test_game("pending_applied");
        game.handle_input(GameInput::Up);
        game.advance(&mut rng());
        assert_eq!(game.snake.direction, Direction::Up);
        assert!(game.pending_direction.is_none());
        assert_eq!(game.snake.head(), Cell::new(4, 6));
    }

    #[test]
    fn test_length_preserved_without_capture() {
        let mut game = test_game("length");
        game.apple.position = Cell::new(0, 0);
        let len = game.snake.len();
        game.advance(&mut rng());
        assert_eq!(game.snake.len(), len);
    }

    #[test]
    fn test_capture_grows_and_scores() {
        let mut game = test_game("capture");
        game.apple.position = game.snake.head().step(Direction::Right);
        let len = game.snake.len();

        let outcome = game.advance(&mut rng());

        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(game.score, 1);
        assert_eq!(game.snake.len(), len + 1);
        // Apple moved somewhere legal
        assert!(game.apple.position.in_bounds());
        assert!(!game.snake.body.contains(&game.apple.position));
    }

    #[test]
    fn test_wall_collision_loses() {
        let mut game = test_game("wall");
        // Walk straight right from (5,6): three safe ticks, the fourth leaves
        // the board.
        let mut r = rng();
        for _ in 0..3 {
            assert_eq!(game.advance(&mut r), TickOutcome::Continue);
        }
        assert_eq!(game.snake.head(), Cell::new(5, 9));

        assert_eq!(game.advance(&mut r), TickOutcome::Lose);
        assert_eq!(game.phase, Phase::Over);
        assert_eq!(game.outcome, Some(RoundOutcome::Lose));
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_self_collision_loses() {
        let mut game = test_game("self_collision");
        // Square-shaped body; head at (5,5) moving right into (5,6).
        game.snake.body = [(6, 6), (6, 5), (5, 6), (5, 5)]
            .iter()
            .map(|&(r, c)| Cell::new(r, c))
            .collect();
        game.snake.set_direction(Direction::Right);
        game.apple.position = Cell::new(0, 0);

        assert_eq!(game.advance(&mut rng()), TickOutcome::Lose);
        assert_eq!(game.outcome, Some(RoundOutcome::Lose));
    }

    #[test]
    fn test_tail_chasing_is_safe() {
        let mut game = test_game("tail_chase");
        // 2x2 loop: head at (5,5) moving down into the tail cell (6,5),
        // which the same tick vacates.
        game.snake.body = [(6, 5), (6, 6), (5, 6), (5, 5)]
            .iter()
            .map(|&(r, c)| Cell::new(r, c))
            .collect();
        game.snake.set_direction(Direction::Down);
        game.apple.position = Cell::new(0, 0);

        assert_eq!(game.advance(&mut rng()), TickOutcome::Continue);
        assert_eq!(game.snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_win_when_board_fills() {
        let mut game = test_game("win");
        // Rig a body covering every cell except (0,0), head at (0,1) so a
        // left step captures on the last free cell.
        let mut body: Vec<Cell> = Vec::new();
        for row in (1..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                body.push(Cell::new(row, col));
            }
        }
        for col in (1..BOARD_SIZE).rev() {
            body.push(Cell::new(0, col));
        }
        assert_eq!(body.len(), BOARD_CELLS - 1);

        game.snake.body = body.into_iter().collect();
        game.snake.set_direction(Direction::Left);
        game.apple.position = Cell::new(0, 0);

        assert_eq!(game.advance(&mut rng()), TickOutcome::Win);
        assert_eq!(game.outcome, Some(RoundOutcome::Win));
        assert_eq!(game.snake.len(), BOARD_CELLS);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_tick_accumulates_fixed_steps() {
        let mut game = test_game("tick_accumulator");
        let mut r = rng();

        assert!(!game.tick(TICK_INTERVAL_MS - 1, &mut r));
        assert_eq!(game.tick_count, 0);

        assert!(game.tick(1, &mut r));
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_tick_clamps_large_frames() {
        let mut game = test_game("tick_clamp");
        game.tick(60_000, &mut rng());
        // One clamped frame advances at most MAX_FRAME_MS / TICK_INTERVAL_MS.
        assert!(game.tick_count <= MAX_FRAME_MS / TICK_INTERVAL_MS);
    }

    #[test]
    fn test_tick_halts_after_game_over() {
        let mut game = test_game("tick_halt");
        game.phase = Phase::Over;
        assert!(!game.tick(10 * TICK_INTERVAL_MS, &mut rng()));
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_game_over_updates_record_only_on_improvement() {
        let mut game = test_game("record_update");
        game.record = 3;
        game.score = 5;
        game.game_over(RoundOutcome::Lose);
        assert_eq!(game.record, 5);
        assert!(game.new_record);

        game.restart(&mut rng());
        game.score = 2;
        game.game_over(RoundOutcome::Lose);
        assert_eq!(game.record, 5);
        assert!(!game.new_record);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut game = test_game("restart");
        let mut r = rng();
        // Lose against the right wall, then restart.
        while game.phase == Phase::Running {
            game.advance(&mut r);
        }

        game.restart(&mut r);

        assert_eq!(game.phase, Phase::Running);
        assert!(game.outcome.is_none());
        assert_eq!(game.score, 0);
        let fresh = Snake::new();
        assert_eq!(game.snake.body, fresh.body);
        assert_eq!(game.snake.direction, fresh.direction);
        assert!(game.apple.position.in_bounds());
        assert!(!game.snake.body.contains(&game.apple.position));
    }
}
