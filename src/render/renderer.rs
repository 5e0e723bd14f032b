use anyhow::Result;
use ratatui::style::Color;

use crate::game::{GameState, Position};

/// Board background, snake and food colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub food: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(50, 50, 50),
            snake: Color::Rgb(0, 255, 0),
            food: Color::Rgb(255, 0, 0),
        }
    }
}

/// Numbers shown above the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub score: u32,
    pub record: u32,
    pub resets: u32,
    pub elapsed: String,
}

/// Something a frame can be drawn on.
///
/// A frame is `clear`, any number of `draw_cell` calls, then `present`.
pub trait Renderer {
    /// Fill the whole board with `color`
    fn clear(&mut self, color: Color);

    /// Paint one board cell. `size` is the drawn width of a cell.
    fn draw_cell(&mut self, position: Position, color: Color, size: u16);

    /// Replace the status line shown with the next frame
    fn set_status(&mut self, status: &Status);

    /// Push the finished frame out
    fn present(&mut self) -> Result<()>;
}

/// Draw the board for `state`: background, snake, then food
pub fn draw_scene<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    palette: &Palette,
    cell_size: u16,
) -> Result<()> {
    renderer.clear(palette.background);

    for &segment in state.snake.body() {
        renderer.draw_cell(segment, palette.snake, cell_size);
    }
    renderer.draw_cell(state.food.position(), palette.food, cell_size);

    renderer.present()
}
