//! Plain-text rendering of crosswords.
//!
//! Grid cells render as `#` when empty, the letter when visible and `?` when
//! hidden. A letter is visible when any placement covering it is solved or
//! hints the cell's stored letter index. [`RenderOptions`] can mark extra
//! placements as solved; that happens on a copy, never on the input.

use std::borrow::Cow;

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::crossword::Crossword;
use crate::geometry::Direction;

const EMPTY_CELL: char = '#';
const HIDDEN_CELL: char = '?';

/// Rendering switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Treat every placement as solved.
    pub solve_all: bool,
    /// Treat each placement as solved with probability 1/2, drawn from a
    /// generator seeded with this value.
    pub solve_random: Option<u64>,
}

/// The crossword as it should be displayed under `options`.
fn displayed<'a>(crossword: &'a Crossword, options: &RenderOptions) -> Cow<'a, Crossword> {
    if !options.solve_all && options.solve_random.is_none() {
        return Cow::Borrowed(crossword);
    }

    let mut shown = crossword.clone();
    if options.solve_all {
        shown.solve();
    }
    if let Some(seed) = options.solve_random {
        shown.solve_random(&mut Pcg64::seed_from_u64(seed));
    }
    Cow::Owned(shown)
}

/// Renders the grid, one line per row, each terminated by `\n`.
pub fn render_text(crossword: &Crossword, options: &RenderOptions) -> String {
    let crossword = displayed(crossword, options);
    let size = crossword.grid.size();
    let mut output = String::with_capacity(size * (size + 1));

    for (y, row) in crossword.grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let display_char = match cell.letter {
                None => EMPTY_CELL,
                Some(letter) if crossword.is_cell_visible(x, y) => letter,
                Some(_) => HIDDEN_CELL,
            };
            output.push(display_char);
        }
        output.push('\n');
    }

    output
}

/// Renders the clue list: a `DOWN` section then an `ACROSS` section, each in
/// placement order, with a `[x]` marker on solved entries.
pub fn render_clues(crossword: &Crossword, options: &RenderOptions) -> String {
    let crossword = displayed(crossword, options);
    let mut output = String::new();

    for (heading, direction) in [("DOWN", Direction::Down), ("ACROSS", Direction::Across)] {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(heading);
        output.push('\n');
        for placement in crossword
            .placements
            .iter()
            .filter(|placement| placement.direction == direction)
        {
            let marker = if placement.solved { 'x' } else { ' ' };
            output.push_str(&format!(
                "[{marker}] {}: {}\n",
                placement.clue_id(),
                placement.word.clue
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{Candidate, Placement};
    use crate::words::Word;

    fn place(cw: &mut Crossword, id: usize, word: Word, at: Candidate) {
        cw.grid.place(&word.letters(), at.start(), at.direction);
        cw.placements.push(Placement::new(id, word, at));
    }

    #[test]
    fn test_unsolved_word_is_hidden() {
        let mut cw = Crossword::empty(3);
        place(&mut cw, 1, Word::new("FOO", ""), Candidate::across(0, 0));
        assert_eq!(render_text(&cw, &RenderOptions::default()), "???\n###\n###\n");

        let all = RenderOptions {
            solve_all: true,
            ..RenderOptions::default()
        };
        assert_eq!(render_text(&cw, &all), "FOO\n###\n###\n");
        assert!(!cw.placements[0].solved, "rendering never mutates");
    }

    #[test]
    fn test_character_hints_are_shown() {
        let mut cw = Crossword::empty(4);
        let mut word = Word::new("FOOD", "");
        word.character_hints.extend([0, 3]);
        place(&mut cw, 1, word, Candidate::across(0, 0));
        assert_eq!(
            render_text(&cw, &RenderOptions::default()),
            "F??D\n####\n####\n####\n"
        );
    }

    #[test]
    fn test_crossing_solved_word_reveals_shared_cell() {
        let mut cw = Crossword::empty(4);
        place(&mut cw, 1, Word::new("FOOD", ""), Candidate::across(0, 0));
        place(&mut cw, 2, Word::new("FUD", ""), Candidate::down(0, 0));
        cw.placements[1].solved = true;
        assert_eq!(
            render_text(&cw, &RenderOptions::default()),
            "F???\nU###\nD###\n####\n"
        );
    }

    #[test]
    fn test_clue_list_groups_by_direction() {
        let mut cw = Crossword::empty(4);
        place(&mut cw, 1, Word::new("FOOD", "Something eaten"), Candidate::across(0, 0));
        place(&mut cw, 2, Word::new("FUD", "Fear and doubt"), Candidate::down(0, 0));
        cw.placements[0].solved = true;

        assert_eq!(
            render_clues(&cw, &RenderOptions::default()),
            "DOWN\n[ ] D2: Fear and doubt\n\nACROSS\n[x] A1: Something eaten\n"
        );
    }

    #[test]
    fn test_hint_on_crossing_word_follows_stored_index() {
        let mut cw = Crossword::empty(4);
        place(&mut cw, 1, Word::new("FOOD", ""), Candidate::across(0, 0));
        let mut dog = Word::new("DOG", "");
        dog.character_hints.insert(0);
        place(&mut cw, 2, dog, Candidate::down(3, 0));

        assert_eq!(
            render_text(&cw, &RenderOptions::default()),
            "????\n###?\n###?\n####\n"
        );
    }

    #[test]
    fn test_random_solving_is_seeded_and_leaves_input_alone() {
        let mut cw = Crossword::empty(6);
        place(&mut cw, 1, Word::new("FOOBAR", "a"), Candidate::across(0, 0));
        place(&mut cw, 2, Word::new("FUD", "b"), Candidate::down(0, 0));
        place(&mut cw, 3, Word::new("BUN", "c"), Candidate::down(3, 0));
        place(&mut cw, 4, Word::new("DEN", "d"), Candidate::across(0, 2));

        let render = |seed: u64| {
            let options = RenderOptions {
                solve_random: Some(seed),
                ..RenderOptions::default()
            };
            (render_text(&cw, &options), render_clues(&cw, &options))
        };

        assert_eq!(render(5), render(5));
        let distinct: std::collections::BTreeSet<_> = (0..64).map(render).collect();
        assert!(distinct.len() > 1);
        assert!(cw.placements.iter().all(|p| !p.solved));

        // grid and clue markers agree on which words were solved
        for seed in 0..16 {
            let (grid, clues) = render(seed);
            let first_row = grid.lines().next().unwrap();
            assert_eq!(first_row == "FOOBAR", clues.contains("[x] A1:"));
        }

        let both = RenderOptions {
            solve_all: true,
            solve_random: Some(9),
        };
        assert_eq!(
            render_text(&cw, &both),
            "FOOBAR\nU##U##\nDENN##\n######\n######\n######\n"
        );
    }
}
