use super::action::Direction;
use super::grid::{GridSpace, Position};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
    heading: Direction,
    pending_growth: bool,
    /// Cell the snake was created on; a self-collision sends it back here
    spawn: Position,
}

impl Snake {
    /// A one-cell snake at `spawn`
    pub fn new(spawn: Position, heading: Direction) -> Self {
        Self {
            body: vec![spawn],
            heading,
            pending_growth: false,
            spawn,
        }
    }

    /// A snake with an explicit body, head first. The head doubles as the spawn cell.
    ///
    /// Returns `None` for an empty body.
    pub fn with_body(body: Vec<Position>, heading: Direction) -> Option<Self> {
        let spawn = *body.first()?;
        Some(Self {
            body,
            heading,
            pending_growth: false,
            spawn,
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn spawn(&self) -> Position {
        self.spawn
    }

    pub fn is_growing(&self) -> bool {
        self.pending_growth
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a reset leaves one cell behind
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Turn, unless `requested` would send the head back into the neck
    pub fn set_heading(&mut self, requested: Direction) {
        if !self.heading.is_opposite(requested) {
            self.heading = requested;
        }
    }

    /// Lengthen by one cell on the next step
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Advance one cell. Returns true if the snake bit itself and was reset.
    ///
    /// The body is updated first; the collision test runs on the moved body.
    pub fn step(&mut self, grid: &GridSpace) -> bool {
        let new_head = grid.step_from(self.head(), self.heading);
        self.body.insert(0, new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }

        if self.body[1..].contains(&new_head) {
            self.reset();
            return true;
        }

        false
    }

    /// Collapse to a single cell at the spawn position. Heading is kept.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.spawn);
    }
}
