//! Candidate position search.
//!
//! Every candidate is anchored on an existing letter of the grid, so an empty
//! grid yields nothing; the first word of a run is placed separately.

use crate::geometry::Direction;
use crate::grid::Grid;
use crate::placement::Candidate;

/// Proposes every in-bounds placement of `letters` that crosses an existing
/// grid letter.
///
/// Iteration order is letter index, then row, then column, with the down
/// candidate emitted before the across candidate at each match. Duplicates
/// and overlapping conflicts are left for the scorer.
pub fn suggest_placements(letters: &[char], grid: &Grid) -> Vec<Candidate> {
    let size = grid.size();
    let len = letters.len();
    let mut candidates = Vec::new();

    for (char_idx, &letter) in letters.iter().enumerate() {
        // letters after the anchor must still fit before the far edge
        let tail = len - (char_idx + 1);
        for y in 0..size {
            for x in 0..size {
                if grid.letter(x, y) != Some(letter) {
                    continue;
                }
                if y >= char_idx && y + tail < size {
                    candidates.push(Candidate::new(x, y - char_idx, Direction::Down));
                }
                if x >= char_idx && x + tail < size {
                    candidates.push(Candidate::new(x - char_idx, y, Direction::Across));
                }
            }
        }
    }

    candidates
}
