//! Square letter grid.
//!
//! The grid is stored as a flat vector in row-major order, so the cell at
//! `(x, y)` lives at index `y * size + x`. A cell is either empty or holds one
//! letter together with that letter's index in the word that first wrote it.

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Direction};

/// One grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    /// Index of `letter` within the first word that occupied this cell.
    pub letter_index: usize,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        letter_index: 0,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Fixed-size square grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Converts `(x, y)` to a linear cell index.
#[inline(always)]
const fn coord_to_idx(size: usize, x: usize, y: usize) -> usize {
    y * size + x
}

impl Grid {
    /// Creates an all-empty `size` x `size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::EMPTY; size * size],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.contains(x, y)
            .then(|| &self.cells[coord_to_idx(self.size, x, y)])
    }

    /// The letter at `(x, y)`; `None` for empty or off-grid cells.
    #[inline]
    pub fn letter(&self, x: usize, y: usize) -> Option<char> {
        self.cell(x, y).and_then(|cell| cell.letter)
    }

    /// Occupancy predicate. Off-grid coordinates count as empty.
    #[inline]
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.letter(x, y).is_none()
    }

    /// Returns `true` when no cell holds a letter.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Writes `letters` starting at `start` in `direction`.
    ///
    /// Callers must have checked that the word fits; letters that would fall
    /// outside the grid are dropped. A cell that already holds a letter keeps
    /// its original `letter_index`.
    pub fn place(&mut self, letters: &[char], start: Coord, direction: Direction) {
        for (offset, &letter) in letters.iter().enumerate() {
            let (x, y) = direction.advance(start, offset);
            if !self.contains(x, y) {
                continue;
            }
            let cell = &mut self.cells[coord_to_idx(self.size, x, y)];
            if cell.is_empty() {
                *cell = Cell {
                    letter: Some(letter),
                    letter_index: offset,
                };
            } else {
                cell.letter = Some(letter);
            }
        }
    }

    /// Reads `len` letters starting at `start` in `direction`, with `None`
    /// for empty cells.
    pub fn read(&self, start: Coord, direction: Direction, len: usize) -> Vec<Option<char>> {
        direction
            .footprint(start, len)
            .map(|(x, y)| self.letter(x, y))
            .collect()
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}
