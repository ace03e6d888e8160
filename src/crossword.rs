//! The finished puzzle handed to renderers and persistence.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::placement::Placement;

/// A generated crossword: the grid, the placed words in placement order and
/// the summed score of every scored placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossword {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub total_score: u32,
}

impl Crossword {
    /// An empty crossword of the given size.
    pub fn empty(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
            total_score: 0,
        }
    }

    /// Number of placed words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Marks every placement as solved. Hints are left untouched.
    pub fn solve(&mut self) {
        for placement in &mut self.placements {
            placement.solved = true;
        }
    }

    /// Marks each placement as solved with probability 1/2, drawing once per
    /// placement in placement order. Already solved placements stay solved.
    pub fn solve_random<R: Rng>(&mut self, rng: &mut R) {
        for placement in &mut self.placements {
            if rng.random_bool(0.5) {
                placement.solved = true;
            }
        }
    }

    /// Placements covering `(x, y)`, across entries first.
    pub fn cell_placements(&self, x: usize, y: usize) -> Vec<&Placement> {
        let mut covering: Vec<&Placement> = self
            .placements
            .iter()
            .filter(|placement| placement.offset_of(x, y).is_some())
            .collect();
        covering.sort_by_key(|placement| placement.is_vertical());
        covering
    }

    /// Whether the letter at `(x, y)` is shown: some covering placement is
    /// solved, or lists the cell's stored `letter_index` among its hints.
    /// Empty cells are never visible.
    ///
    /// The stored index belongs to the first word that wrote the cell, so a
    /// crossing word's hints are matched against that index rather than
    /// against the crossing word's own position.
    pub fn is_cell_visible(&self, x: usize, y: usize) -> bool {
        let Some(cell) = self.grid.cell(x, y).filter(|cell| !cell.is_empty()) else {
            return false;
        };
        self.cell_placements(x, y)
            .into_iter()
            .any(|placement| placement.reveals(cell.letter_index))
    }
}
