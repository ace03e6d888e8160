//! Candidate and committed word placements.

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Direction};
use crate::words::Word;

/// A proposed position for a word, produced by the search step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Candidate {
    pub const fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    pub const fn across(x: usize, y: usize) -> Self {
        Self::new(x, y, Direction::Across)
    }

    pub const fn down(x: usize, y: usize) -> Self {
        Self::new(x, y, Direction::Down)
    }

    #[inline]
    pub fn start(&self) -> Coord {
        (self.x, self.y)
    }
}

/// A word committed to the grid.
///
/// `id` is `1 + number of words already placed` at commit time and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: usize,
    pub word: Word,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    #[serde(default)]
    pub solved: bool,
}

impl Placement {
    pub fn new(id: usize, word: Word, candidate: Candidate) -> Self {
        Self {
            id,
            word,
            x: candidate.x,
            y: candidate.y,
            direction: candidate.direction,
            solved: false,
        }
    }

    #[inline]
    pub fn start(&self) -> Coord {
        (self.x, self.y)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.direction.is_vertical()
    }

    /// Display id: the explicit label if present, otherwise `A{id}` or
    /// `D{id}` depending on orientation.
    pub fn clue_id(&self) -> String {
        match &self.word.label {
            Some(label) => label.clone(),
            None => format!("{}{}", self.direction.prefix(), self.id),
        }
    }

    /// Offset of `(x, y)` within this word, if the cell is on its footprint.
    pub fn offset_of(&self, x: usize, y: usize) -> Option<usize> {
        let len = self.word.len();
        match self.direction {
            Direction::Across if y == self.y && x >= self.x && x < self.x + len => {
                Some(x - self.x)
            }
            Direction::Down if x == self.x && y >= self.y && y < self.y + len => Some(y - self.y),
            _ => None,
        }
    }

    /// Whether the letter at `offset` should be shown: the word is solved or
    /// the letter is a hint.
    #[inline]
    pub fn reveals(&self, offset: usize) -> bool {
        self.solved || self.word.is_hinted(offset)
    }
}
