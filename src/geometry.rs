//! Orientation and neighbourhood helpers for a square grid.
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing
//! downwards. Across words extend in `+x`, down words in `+y`. Every helper
//! is written once in terms of an "along" axis and a "cross" axis so the
//! scorer can treat both orientations symmetrically.

use serde::{Deserialize, Serialize};

/// A grid coordinate `(x, y)`.
pub type Coord = (usize, usize);

/// Orientation of a word on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Returns `true` for [`Direction::Down`].
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Direction::Down
    }

    /// Prefix used for generated clue ids.
    pub fn prefix(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }

    /// Cell holding the `offset`-th letter of a word starting at `start`.
    #[inline(always)]
    pub fn advance(self, (x, y): Coord, offset: usize) -> Coord {
        match self {
            Direction::Across => (x + offset, y),
            Direction::Down => (x, y + offset),
        }
    }

    /// Position of `cell` along this direction's axis.
    #[inline(always)]
    pub fn along(self, (x, y): Coord) -> usize {
        match self {
            Direction::Across => x,
            Direction::Down => y,
        }
    }

    /// Returns `true` when a word of `len` letters starting at `start` stays
    /// inside a `size`-wide grid.
    pub fn fits(self, start: Coord, len: usize, size: usize) -> bool {
        let (x, y) = start;
        if len == 0 || x >= size || y >= size {
            return false;
        }
        self.along(start) + len <= size
    }

    /// Cell immediately before the first letter, if it is on the grid.
    pub fn before(self, (x, y): Coord) -> Option<Coord> {
        match self {
            Direction::Across => x.checked_sub(1).map(|px| (px, y)),
            Direction::Down => y.checked_sub(1).map(|py| (x, py)),
        }
    }

    /// Cell immediately after the last letter of a `len`-letter word, if it
    /// is on the grid.
    pub fn after(self, start: Coord, len: usize, size: usize) -> Option<Coord> {
        let next = self.advance(start, len);
        (self.along(next) < size).then_some(next)
    }

    /// The on-grid neighbours of `cell` perpendicular to this direction:
    /// above/below for across words, left/right for down words.
    pub fn perpendicular(self, (x, y): Coord, size: usize) -> impl Iterator<Item = Coord> {
        let (lower, upper) = match self {
            Direction::Across => (
                y.checked_sub(1).map(|py| (x, py)),
                (y + 1 < size).then_some((x, y + 1)),
            ),
            Direction::Down => (
                x.checked_sub(1).map(|px| (px, y)),
                (x + 1 < size).then_some((x + 1, y)),
            ),
        };
        lower.into_iter().chain(upper)
    }

    /// Every cell covered by a `len`-letter word starting at `start`.
    pub fn footprint(self, start: Coord, len: usize) -> impl Iterator<Item = Coord> {
        (0..len).map(move |offset| self.advance(start, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_respects_grid_edge() {
        assert!(Direction::Across.fits((0, 0), 3, 3));
        assert!(!Direction::Across.fits((1, 0), 3, 3));
        assert!(Direction::Down.fits((2, 0), 3, 3));
        assert!(!Direction::Down.fits((0, 2), 2, 3));
        assert!(!Direction::Across.fits((0, 3), 1, 3), "row outside the grid");
        assert!(!Direction::Across.fits((0, 0), 0, 3), "empty words never fit");
    }

    #[test]
    fn test_before_and_after_at_edges() {
        assert_eq!(Direction::Across.before((0, 1)), None);
        assert_eq!(Direction::Across.before((2, 1)), Some((1, 1)));
        assert_eq!(Direction::Down.before((2, 1)), Some((2, 0)));

        assert_eq!(Direction::Across.after((0, 0), 3, 4), Some((3, 0)));
        assert_eq!(Direction::Across.after((1, 0), 3, 4), None);
        assert_eq!(Direction::Down.after((0, 0), 2, 4), Some((0, 2)));
    }

    #[test]
    fn test_perpendicular_neighbours_clip_to_grid() {
        let across: Vec<_> = Direction::Across.perpendicular((1, 0), 3).collect();
        assert_eq!(across, vec![(1, 1)]);

        let down: Vec<_> = Direction::Down.perpendicular((1, 1), 3).collect();
        assert_eq!(down, vec![(0, 1), (2, 1)]);

        let corner: Vec<_> = Direction::Down.perpendicular((0, 0), 1).collect();
        assert!(corner.is_empty());
    }

    #[test]
    fn test_footprint_follows_direction() {
        let cells: Vec<_> = Direction::Down.footprint((2, 1), 3).collect();
        assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    }
}
