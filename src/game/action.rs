/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The heading pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step (dx, dy); y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// What the player asked for during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Try to turn to this heading
    Move(Direction),
    /// Keep the current heading
    Continue,
}

impl Action {
    /// Collapse the turn requests buffered between two ticks into one action.
    ///
    /// Only one turn may take effect per tick: the newest request that does not
    /// reverse `current`. Requests that would reverse it are skipped rather than
    /// cancelling an earlier valid one.
    pub fn from_requests(current: Direction, requests: &[Direction]) -> Action {
        requests
            .iter()
            .rev()
            .find(|requested| !current.is_opposite(**requested))
            .map(|&direction| Action::Move(direction))
            .unwrap_or(Action::Continue)
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}
