use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    food::Food,
    grid::GridSpace,
    snake::Snake,
    state::GameState,
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// The snake bit itself and was sent back to its spawn cell
    pub reset: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh session: one-cell snake in the middle heading right, food elsewhere
    pub fn reset(&mut self) -> Result<GameState> {
        let grid = GridSpace::new(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = Food::spawn(&grid, snake.body(), &mut self.rng)
            .context("Failed to place the first food")?;

        info!(
            width = grid.width(),
            height = grid.height(),
            "new session"
        );

        Ok(GameState::new(grid, snake, food))
    }

    /// Advance the game by one tick.
    ///
    /// Applies the turn, moves the snake (resetting it on a self-collision),
    /// then handles eating: grow, score, new food clear of the snake, record.
    pub fn tick(&mut self, state: &mut GameState, action: Action) -> Result<TickResult> {
        if let Action::Move(direction) = action {
            state.snake.set_heading(direction);
        }

        let reset = state.snake.step(&state.grid);
        state.steps += 1;

        if reset {
            info!(
                score = state.score,
                spawn = ?state.snake.spawn(),
                "self-collision, snake reset"
            );
        }

        let ate_food = state.head_on_food();
        if ate_food {
            state.snake.grow();
            state.add_point();

            let cell = state
                .food
                .relocate(&state.grid, state.snake.body(), &mut self.rng)
                .context("Failed to relocate food")?;

            debug!(score = state.score, food = ?cell, "food eaten");
        }

        Ok(TickResult { ate_food, reset })
    }
}
