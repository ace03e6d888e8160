//! Crossword Generator Library
//!
//! Lays an unordered list of `(word, clue)` pairs onto a square grid so that
//! words cross wherever they share letters, keeping the layout that places
//! the most words.

pub mod crossword;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod persistence;
pub mod placement;
pub mod render;
pub mod score;
pub mod search;
pub mod words;

pub use crossword::Crossword;
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorConfig};
pub use geometry::Direction;
pub use grid::{Cell, Grid};
pub use placement::{Candidate, Placement};
pub use render::{render_clues, render_text, RenderOptions};
pub use words::{Entry, Word};

/// Generates a crossword with default options apart from grid size and
/// attempt count.
pub fn generate(grid_size: usize, entries: &[Entry], attempts: usize) -> Result<Crossword> {
    let generator = Generator::new(GeneratorConfig {
        grid_size,
        attempts,
        ..GeneratorConfig::default()
    })?;
    Ok(generator.generate(entries))
}
