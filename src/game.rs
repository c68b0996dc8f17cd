use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::{GameConfig, GridSize, POINTS_PER_LEVEL};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Observable outcome of one [`GameState::tick`].
///
/// Flags are edge-triggered: a tick on a finished game reports nothing.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickEffects {
    pub ate_food: bool,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// Reasons an explicit snake/food layout cannot start a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum LayoutError {
    #[error("snake has no segments")]
    EmptySnake,
    #[error("snake segment {0:?} lies outside the grid")]
    SegmentOutOfBounds(Position),
    #[error("snake occupies {0:?} more than once")]
    OverlappingSegments(Position),
    #[error("food at {0:?} lies outside the grid")]
    FoodOutOfBounds(Position),
    #[error("food at {0:?} is under the snake")]
    FoodOnSnake(Position),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Food,
    score: u32,
    level: u32,
    tick_count: u64,
    status: GameStatus,
    config: GameConfig,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a new game seeded from the OS.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Builds a running game around an explicit snake and food layout.
    ///
    /// The snake must be non-empty, inside the grid and free of repeated
    /// cells; the food must sit on a free cell inside the grid.
    pub fn from_parts(
        config: GameConfig,
        snake: Snake,
        food: Food,
        seed: u64,
    ) -> Result<Self, LayoutError> {
        let bounds = config.grid_size();
        validate_layout(bounds, &snake, food)?;

        Ok(Self {
            snake,
            food,
            score: 0,
            level: 1,
            tick_count: 0,
            status: GameStatus::Running,
            config,
            bounds,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let bounds = config.grid_size();
        let length = config
            .initial_length
            .min(bounds.total_cells().saturating_sub(1))
            .max(1);
        let snake = Snake::straight(bounds.center(), Direction::Right, length, bounds);

        // A 1x1 board has nowhere to put food; it starts finished.
        let (food, status) = match Food::spawn(&mut rng, bounds, &snake) {
            Some(food) => (food, GameStatus::Running),
            None => (Food::new(snake.head()), GameStatus::Over),
        };

        Self {
            snake,
            food,
            score: 0,
            level: 1,
            tick_count: 0,
            status,
            config,
            bounds,
            rng,
        }
    }

    /// Buffers a heading change for the next tick.
    ///
    /// Reversals of the current heading and input after game over are ignored.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.is_over() {
            return;
        }

        if !self.snake.buffer_direction(requested) {
            debug!(
                "ignored reversal {requested:?} while heading {:?}",
                self.snake.direction()
            );
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickEffects {
        if self.is_over() {
            return TickEffects::default();
        }

        self.snake.commit_direction();
        let next_head = self.snake.next_head_position(self.bounds);

        // The tail still counts even though it would move away this tick.
        if self.snake.occupies(next_head) {
            self.finish("self collision");
            return TickEffects {
                game_over: true,
                ..TickEffects::default()
            };
        }

        self.tick_count += 1;

        let ate_food = next_head == self.food.position;
        let mut leveled_up = false;
        if ate_food {
            self.score += 1;
            if self.score % POINTS_PER_LEVEL == 0 {
                self.level += 1;
                leveled_up = true;
                info!("reached level {} at score {}", self.level, self.score);
            }
        }

        self.snake.advance(next_head, ate_food);

        if ate_food {
            match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
                Some(food) => self.food = food,
                None => {
                    self.finish("board full");
                    return TickEffects {
                        ate_food,
                        leveled_up,
                        game_over: true,
                    };
                }
            }
        }

        TickEffects {
            ate_food,
            leveled_up,
            game_over: false,
        }
    }

    fn finish(&mut self, reason: &str) {
        self.status = GameStatus::Over;
        info!(
            "game over ({reason}) after {} ticks: score {}, level {}, length {}",
            self.tick_count,
            self.score,
            self.level,
            self.snake.len()
        );
    }

    /// Returns true once the game has reached its terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Snake cells from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.snake.segments()
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food.position
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Committed heading, which the head's eyes face.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.snake.pending_direction()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Score and level text, e.g. `Score: 7 | Level: 1`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Score: {} | Level: {}", self.score, self.level)
    }
}

fn validate_layout(bounds: GridSize, snake: &Snake, food: Food) -> Result<(), LayoutError> {
    if snake.is_empty() {
        return Err(LayoutError::EmptySnake);
    }

    let mut seen = HashSet::with_capacity(snake.len());
    for segment in snake.segments() {
        if !segment.is_within_bounds(bounds) {
            return Err(LayoutError::SegmentOutOfBounds(*segment));
        }
        if !seen.insert(*segment) {
            return Err(LayoutError::OverlappingSegments(*segment));
        }
    }

    if !food.position.is_within_bounds(bounds) {
        return Err(LayoutError::FoodOutOfBounds(food.position));
    }
    if snake.occupies(food.position) {
        return Err(LayoutError::FoodOnSnake(food.position));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::GameConfig;
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus, LayoutError, TickEffects};

    fn small_config() -> GameConfig {
        GameConfig {
            width: 200,
            height: 200,
            cell_size: 20,
            initial_length: 3,
        }
    }

    fn cells(state: &GameState) -> Vec<Position> {
        state.segments().copied().collect()
    }

    #[test]
    fn new_game_starts_centered_heading_right() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);

        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(
            cells(&state),
            vec![
                Position { x: 25, y: 20 },
                Position { x: 24, y: 20 },
                Position { x: 23, y: 20 },
            ]
        );
        assert!(!state.snake().occupies(state.food()));
        assert!(state.food().is_within_bounds(state.bounds()));
    }

    #[test]
    fn non_eating_move_keeps_length() {
        let config = small_config();
        let snake = Snake::straight(
            Position { x: 5, y: 5 },
            Direction::Right,
            3,
            config.grid_size(),
        );
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 0, y: 0 }), 2)
            .expect("valid layout");

        let effects = state.tick();

        assert_eq!(effects, TickEffects::default());
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.head(), Position { x: 6, y: 5 });
        assert_eq!(state.food(), Position { x: 0, y: 0 });
    }

    #[test]
    fn snake_grows_and_scores_after_eating_food() {
        let config = small_config();
        let snake = Snake::straight(
            Position { x: 5, y: 5 },
            Direction::Right,
            3,
            config.grid_size(),
        );
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 6, y: 5 }), 4)
            .expect("valid layout");

        let effects = state.tick();

        assert!(effects.ate_food);
        assert!(!effects.leveled_up);
        assert!(!effects.game_over);
        assert_eq!(state.score(), 1);
        assert_eq!(state.level(), 1);
        assert_eq!(state.snake().len(), 4);
        assert_ne!(state.food(), Position { x: 6, y: 5 });
        assert!(!state.snake().occupies(state.food()));
    }

    #[test]
    fn wraps_from_right_edge_to_left_edge() {
        let config = GameConfig::default();
        let snake = Snake::new(Position { x: 49, y: 7 }, Direction::Right);
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 10, y: 10 }), 5)
            .expect("valid layout");
        assert_eq!(config.cell_origin(state.head()), (980, 140));

        state.tick();

        assert_eq!(state.head(), Position { x: 0, y: 7 });
        assert_eq!(config.cell_origin(state.head()), (0, 140));
    }

    #[test]
    fn wraps_from_top_edge_to_bottom_edge() {
        let config = small_config();
        let snake = Snake::new(Position { x: 3, y: 0 }, Direction::Up);
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 0, y: 0 }), 5)
            .expect("valid layout");

        state.tick();

        assert_eq!(state.head(), Position { x: 3, y: 9 });
    }

    #[test]
    fn reverse_request_does_not_change_heading() {
        let mut state = GameState::new_with_seed(small_config(), 6);

        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction(), Direction::Right);
        state.tick();

        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.status(), GameStatus::Running);
    }

    #[test]
    fn last_direction_before_tick_wins() {
        let mut state = GameState::new_with_seed(small_config(), 7);
        let head = state.head();

        state.set_direction(Direction::Up);
        state.set_direction(Direction::Down);
        state.tick();

        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.head(), Position { x: head.x, y: head.y + 1 });
    }

    #[test]
    fn snake_collision_with_body_sets_game_over_and_freezes_snake() {
        let config = small_config();
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 1 },
            ],
            Direction::Up,
        );
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 8, y: 8 }), 3)
            .expect("valid layout");
        state.set_direction(Direction::Left);
        let before = cells(&state);

        let effects = state.tick();

        assert!(effects.game_over);
        assert!(state.is_over());
        assert_eq!(cells(&state), before);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
    }

    #[test]
    fn fatal_tick_is_not_counted() {
        let config = small_config();
        let snake = Snake::straight(
            Position { x: 5, y: 5 },
            Direction::Right,
            5,
            config.grid_size(),
        );
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 0, y: 0 }), 16)
            .expect("valid layout");

        // Down, Left, Up curls the head back into the body.
        state.set_direction(Direction::Down);
        state.tick();
        state.set_direction(Direction::Left);
        state.tick();
        assert_eq!(state.tick_count(), 2);

        state.set_direction(Direction::Up);
        assert!(state.tick().game_over);

        assert_eq!(state.tick_count(), 2);
    }

    #[test]
    fn from_parts_rejects_broken_layouts() {
        let config = small_config();
        let snake = || {
            Snake::from_segments(
                vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }],
                Direction::Right,
            )
        };
        let free_food = Food::new(Position { x: 7, y: 7 });

        assert_eq!(
            GameState::from_parts(config, snake(), Food::new(Position { x: 1, y: 2 }), 1).err(),
            Some(LayoutError::FoodOnSnake(Position { x: 1, y: 2 }))
        );
        assert_eq!(
            GameState::from_parts(config, snake(), Food::new(Position { x: 10, y: 0 }), 1).err(),
            Some(LayoutError::FoodOutOfBounds(Position { x: 10, y: 0 }))
        );

        let repeated = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 2, y: 2 },
            ],
            Direction::Right,
        );
        assert_eq!(
            GameState::from_parts(config, repeated, free_food, 1).err(),
            Some(LayoutError::OverlappingSegments(Position { x: 2, y: 2 }))
        );

        let outside = Snake::new(Position { x: -1, y: 4 }, Direction::Left);
        assert_eq!(
            GameState::from_parts(config, outside, free_food, 1).err(),
            Some(LayoutError::SegmentOutOfBounds(Position { x: -1, y: 4 }))
        );

        let empty = Snake::from_segments(Vec::new(), Direction::Up);
        assert_eq!(
            GameState::from_parts(config, empty, free_food, 1).err(),
            Some(LayoutError::EmptySnake)
        );

        assert!(GameState::from_parts(config, snake(), free_food, 1).is_ok());
    }

    #[test]
    fn moving_into_current_tail_cell_is_fatal() {
        let config = small_config();
        // A 2x2 loop: the head's next cell is the tail, which would vacate this tick.
        let snake = Snake::from_segments(
            vec![
                Position { x: 1, y: 1 },
                Position { x: 2, y: 1 },
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
            ],
            Direction::Down,
        );
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 8, y: 8 }), 9)
            .expect("valid layout");

        let effects = state.tick();

        assert!(effects.game_over);
        assert_eq!(state.status(), GameStatus::Over);
    }

    #[test]
    fn ticks_after_game_over_change_nothing() {
        let config = small_config();
        let snake = Snake::from_segments(
            vec![
                Position { x: 1, y: 1 },
                Position { x: 2, y: 1 },
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
            ],
            Direction::Down,
        );
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 8, y: 8 }), 9)
            .expect("valid layout");
        assert!(state.tick().game_over);

        let before = cells(&state);
        let ticks = state.tick_count();
        state.set_direction(Direction::Left);
        for _ in 0..5 {
            assert_eq!(state.tick(), TickEffects::default());
        }

        assert!(state.is_over());
        assert_eq!(cells(&state), before);
        assert_eq!(state.tick_count(), ticks);
        assert_eq!(state.food(), Position { x: 8, y: 8 });
        assert_eq!(state.pending_direction(), Direction::Down);
    }

    #[test]
    fn level_increments_once_per_ten_points() {
        let config = GameConfig::default();
        let snake = Snake::new(Position { x: 0, y: 0 }, Direction::Right);
        let mut state = GameState::from_parts(config, snake, Food::new(Position { x: 1, y: 0 }), 10)
            .expect("valid layout");
        let mut level_ups = Vec::new();

        for _ in 0..25 {
            // Keep the next meal straight ahead of the head.
            let ahead = state.snake().next_head_position(state.bounds());
            state.food = Food::new(ahead);

            let effects = state.tick();
            assert!(effects.ate_food);
            if effects.leveled_up {
                level_ups.push(state.score());
            }
        }

        assert_eq!(level_ups, vec![10, 20]);
        assert_eq!(state.level(), 3);
        assert_eq!(state.score(), 25);
        assert_eq!(state.snake().len(), 26);
    }

    #[test]
    fn snake_cells_stay_distinct_while_running() {
        let mut state = GameState::new_with_seed(small_config(), 12);
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        for step in 0..400 {
            if state.is_over() {
                break;
            }
            if step % 3 == 0 {
                state.set_direction(turns[(step / 3) % turns.len()]);
            }
            state.tick();

            if !state.is_over() {
                let unique: HashSet<Position> = state.segments().copied().collect();
                assert_eq!(unique.len(), state.snake().len());
                assert!(!state.snake().occupies(state.food()));
            }
        }
    }

    #[test]
    fn title_shows_score_and_level() {
        let state = GameState::new_with_seed(small_config(), 13);

        assert_eq!(state.title(), "Score: 0 | Level: 1");
    }

    #[test]
    fn oversized_initial_length_leaves_room_for_food() {
        let config = GameConfig {
            width: 60,
            height: 20,
            cell_size: 20,
            initial_length: 10,
        };
        let state = GameState::new_with_seed(config, 14);

        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.status(), GameStatus::Running);
        assert!(!state.snake().occupies(state.food()));
    }

    #[test]
    fn single_cell_board_starts_finished() {
        let config = GameConfig {
            width: 20,
            height: 20,
            cell_size: 20,
            initial_length: 3,
        };
        let mut state = GameState::new_with_seed(config, 15);

        assert!(state.is_over());
        assert_eq!(state.tick(), TickEffects::default());
    }
}
