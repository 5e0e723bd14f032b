use super::action::Direction;

/// A cell on the game grid, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The toroidal playing field.
///
/// Leaving one edge re-enters on the opposite edge. The full cell list is
/// built once and reused for every food placement.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpace {
    width: usize,
    height: usize,
    cells: Vec<Position>,
}

impl GridSpace {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..width)
            .flat_map(|x| (0..height).map(move |y| Position::new(x as i32, y as i32)))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the space
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every valid cell, column by column
    pub fn all_cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Bring an arbitrary coordinate pair back inside the space
    pub fn wrap(&self, x: i32, y: i32) -> Position {
        Position::new(
            x.rem_euclid(self.width as i32),
            y.rem_euclid(self.height as i32),
        )
    }

    /// The neighbouring cell in `direction`, across the edge if needed
    pub fn step_from(&self, pos: Position, direction: Direction) -> Position {
        let raw = pos.moved_in_direction(direction);
        self.wrap(raw.x, raw.y)
    }
}
