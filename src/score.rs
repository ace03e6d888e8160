//! Placement scoring.
//!
//! A score of `0` rejects a candidate outright. Any other score starts at `1`
//! for a legal placement and gains one point per letter shared with words
//! already on the grid.

use crate::grid::Grid;
use crate::placement::Candidate;

/// Lowest score the generator will commit: the base credit plus at least
/// one shared letter.
pub const MIN_ACCEPTED_SCORE: u32 = 2;

/// Scores `letters` placed at `candidate` against the current grid.
///
/// Rejects (returns `0`) when the word leaves the grid, runs into a letter
/// directly before its start or after its end, conflicts with a different
/// letter, or lays a new letter next to an occupied perpendicular neighbour.
pub fn score_placement(letters: &[char], candidate: &Candidate, grid: &Grid) -> u32 {
    let size = grid.size();
    let len = letters.len();
    let direction = candidate.direction;
    let start = candidate.start();

    if !direction.fits(start, len, size) {
        return 0;
    }

    let mut score = 1;
    for (offset, &letter) in letters.iter().enumerate() {
        let is_last = offset == len - 1;

        if offset == 0 {
            if let Some((x, y)) = direction.before(start) {
                if !grid.is_empty(x, y) {
                    return 0;
                }
            }
        }
        if is_last {
            if let Some((x, y)) = direction.after(start, len, size) {
                if !grid.is_empty(x, y) {
                    return 0;
                }
            }
        }

        let (x, y) = direction.advance(start, offset);
        match grid.letter(x, y) {
            Some(existing) if existing == letter => score += 1,
            Some(_) => return 0,
            None => {
                // fresh letter: nothing may touch it from the sides
                if direction
                    .perpendicular((x, y), size)
                    .any(|(nx, ny)| !grid.is_empty(nx, ny))
                {
                    return 0;
                }
            }
        }

        // the cell past the last letter, re-derived from the running offset
        if is_last {
            let next_along = direction.along(start) + offset + 1;
            if next_along < size {
                let (nx, ny) = direction.advance(start, offset + 1);
                if !grid.is_empty(nx, ny) {
                    return 0;
                }
            }
        }
    }

    score
}
