use super::food::Food;
use super::grid::{GridSpace, Position};
use super::snake::Snake;

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: GridSpace,
    pub snake: Snake,
    pub food: Food,
    /// Food eaten this session; self-collisions do not clear it
    pub score: u32,
    /// Highest score seen this session
    pub record: u32,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(grid: GridSpace, snake: Snake, food: Food) -> Self {
        Self {
            grid,
            snake,
            food,
            score: 0,
            record: 0,
            steps: 0,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn head_on_food(&self) -> bool {
        self.snake.head() == self.food.position()
    }

    /// Count one eaten food and carry the record along
    pub fn add_point(&mut self) {
        self.score += 1;
        self.record = self.record.max(self.score);
    }
}
