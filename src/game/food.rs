use anyhow::{bail, Result};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

use super::grid::{GridSpace, Position};

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Food at a fixed cell
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Food on a random cell not in `occupied`
    pub fn spawn<R: Rng + ?Sized>(
        grid: &GridSpace,
        occupied: &[Position],
        rng: &mut R,
    ) -> Result<Self> {
        let mut food = Self::at(Position::new(0, 0));
        food.relocate(grid, occupied, rng)?;
        Ok(food)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a cell chosen uniformly among those not in `occupied`.
    ///
    /// The caller must leave at least one cell free. A full grid is an error,
    /// and the food stays where it was.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &GridSpace,
        occupied: &[Position],
        rng: &mut R,
    ) -> Result<Position> {
        let taken: HashSet<Position> = occupied.iter().copied().collect();
        let free: Vec<Position> = grid
            .all_cells()
            .iter()
            .copied()
            .filter(|cell| !taken.contains(cell))
            .collect();

        let Some(&cell) = free.choose(rng) else {
            bail!(
                "no free cell for food: {} occupied cells cover the {}x{} grid",
                taken.len(),
                grid.width(),
                grid.height()
            );
        };

        self.position = cell;
        Ok(cell)
    }
}
