//! Greedy multi-attempt crossword generator.
//!
//! Each attempt orders the words, then tries every word as the seed placed
//! at the origin. From each seed the remaining words are added greedily: the
//! best-scoring candidate for a word is committed if it shares at least one
//! letter with the grid. The layout with the most words across all attempts
//! and seeds wins; the earliest one wins ties.
//!
//! Attempts are independent. Every sub-run owns a fresh grid, so attempts can
//! run on a rayon pool and be reduced afterwards with the same tie-break.

use std::cmp::Reverse;

use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::crossword::Crossword;
use crate::error::{Error, Result};
use crate::geometry::Direction;
use crate::grid::Grid;
use crate::placement::{Candidate, Placement};
use crate::score::{score_placement, MIN_ACCEPTED_SCORE};
use crate::search::suggest_placements;
use crate::words::{normalize, Entry, NormalizeOptions, Word};

/// Generator settings. See the field docs for defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Side length of the square grid. Default `25`.
    pub grid_size: usize,
    /// Number of orderings to try. Default `10`.
    pub attempts: usize,
    /// Keep punctuation and other non-alphanumeric characters. Default `false`.
    pub keep_special_characters: bool,
    /// Reveal the first letter of each space-separated component. Default `false`.
    pub reveal_first_letters: bool,
    /// Seed for the randomized orderings; drawn at random when `None`.
    pub seed: Option<u64>,
    /// Run attempts in parallel. Default `false`.
    pub parallel: bool,
    /// Keep running attempts after every word has been placed. Default `false`.
    pub all_attempts: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 25,
            attempts: 10,
            keep_special_characters: false,
            reveal_first_letters: false,
            seed: None,
            parallel: false,
            all_attempts: false,
        }
    }
}

impl GeneratorConfig {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            keep_special_characters: self.keep_special_characters,
            reveal_first_letters: self.reveal_first_letters,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid size must be at least 1".into()));
        }
        if self.attempts == 0 {
            return Err(Error::InvalidConfig("attempts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Builds crosswords from word lists.
#[derive(Clone, Debug)]
pub struct Generator {
    config: GeneratorConfig,
    seed: u64,
}

impl Generator {
    /// Validates `config` and fixes the ordering seed.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self { config, seed })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The seed used for randomized orderings.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the best crossword found for `entries`.
    ///
    /// Never fails: entries that normalize to nothing are skipped with a
    /// warning, and an empty word list yields an empty crossword.
    pub fn generate(&self, entries: &[Entry]) -> Crossword {
        let size = self.config.grid_size;
        let words = normalize_entries(entries, self.config.normalize_options());
        let target = distinct_count(&words);

        info!(
            "generating: {} words, grid {size}x{size}, {} attempts, seed {}",
            words.len(),
            self.config.attempts,
            self.seed
        );

        if words.is_empty() {
            return Crossword::empty(size);
        }

        let mut rng = Pcg64::seed_from_u64(self.seed);
        let orders = attempt_orders(words, self.config.attempts, &mut rng);

        let best = if self.config.parallel {
            best_parallel(&orders, size)
        } else {
            let stop_at = (!self.config.all_attempts).then_some(target);
            let (best, runs) = best_sequential(&orders, size, stop_at);
            debug!("{runs} sub-runs");
            best
        };

        let crossword = best.unwrap_or_else(|| Crossword::empty(size));
        info!(
            "placed {} of {target} words, total score {}",
            crossword.word_count(),
            crossword.total_score
        );
        crossword
    }
}

/// Normalizes entries, dropping (and logging) those that end up empty.
fn normalize_entries(entries: &[Entry], options: NormalizeOptions) -> Vec<Word> {
    entries
        .iter()
        .filter_map(|entry| match normalize(entry, options) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!("skipping entry: {err}");
                None
            }
        })
        .collect()
}

fn distinct_count(words: &[Word]) -> usize {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Longest words first, ties in lexicographic order.
fn sort_by_length(words: &mut [Word]) {
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.text.cmp(&b.text)));
}

/// Merge sort whose every comparison is an independent coin flip.
///
/// Not a uniform shuffle: the reachable orders are biased towards the input
/// order, which is the intended behaviour for later attempts.
fn coin_flip_sort<T, R: Rng>(items: Vec<T>, rng: &mut R) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = coin_flip_sort(left, rng);
    let right = coin_flip_sort(right, rng);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while left.peek().is_some() && right.peek().is_some() {
        let next = if rng.random_bool(0.5) {
            left.next()
        } else {
            right.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Word orders for every attempt. Attempt 0 is length-sorted; each later
/// attempt coin-flip sorts the previous attempt's order.
fn attempt_orders<R: Rng>(mut words: Vec<Word>, attempts: usize, rng: &mut R) -> Vec<Vec<Word>> {
    sort_by_length(&mut words);

    let mut orders = Vec::with_capacity(attempts);
    orders.push(words);
    for _ in 1..attempts {
        let previous = orders[orders.len() - 1].clone();
        orders.push(coin_flip_sort(previous, rng));
    }
    orders
}

/// Working state of one start-word sub-run.
struct Layout {
    grid: Grid,
    placements: Vec<Placement>,
    placed_texts: FxHashSet<String>,
    total_score: u32,
}

impl Layout {
    fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
            placed_texts: FxHashSet::default(),
            total_score: 0,
        }
    }

    fn len(&self) -> usize {
        self.placements.len()
    }

    fn contains(&self, word: &Word) -> bool {
        self.placed_texts.contains(&word.text)
    }

    fn commit(&mut self, word: &Word, letters: &[char], candidate: Candidate) {
        self.grid.place(letters, candidate.start(), candidate.direction);
        let id = self.placements.len() + 1;
        trace!(
            "placed {} as {}{id} at ({}, {})",
            word.text,
            candidate.direction.prefix(),
            candidate.x,
            candidate.y
        );
        self.placements.push(Placement::new(id, word.clone(), candidate));
        self.placed_texts.insert(word.text.clone());
    }

    fn into_crossword(self) -> Crossword {
        Crossword {
            grid: self.grid,
            placements: self.placements,
            total_score: self.total_score,
        }
    }
}

/// Highest-scoring candidate for `letters`, the first one on ties.
fn best_candidate(letters: &[char], grid: &Grid) -> Option<(Candidate, u32)> {
    let mut best: Option<(Candidate, u32)> = None;
    for candidate in suggest_placements(letters, grid) {
        let score = score_placement(letters, &candidate, grid);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }
    best
}

/// Places `words[start]` at the origin and greedily adds the rest.
///
/// Returns `None` when the seed word does not fit on the grid.
fn run_from_seed(words: &[Word], start: usize, size: usize) -> Option<Layout> {
    let seed = &words[start];
    let seed_letters = seed.letters();
    let origin = Candidate::new(0, 0, Direction::Across);
    if !origin.direction.fits(origin.start(), seed_letters.len(), size) {
        debug!("seed {} does not fit a {size}x{size} grid", seed.text);
        return None;
    }

    let mut layout = Layout::new(size);
    layout.commit(seed, &seed_letters, origin);

    for (index, word) in words.iter().enumerate() {
        if index == start || layout.contains(word) {
            continue;
        }
        let letters = word.letters();
        match best_candidate(&letters, &layout.grid) {
            Some((candidate, score)) if score >= MIN_ACCEPTED_SCORE => {
                layout.total_score += score;
                layout.commit(word, &letters, candidate);
            }
            _ => trace!("no placement for {}", word.text),
        }
    }

    Some(layout)
}

/// Best sub-run of a single attempt: the first start word reaching the
/// highest word count.
fn best_in_attempt(order: &[Word], size: usize) -> Option<(usize, Layout)> {
    let mut best: Option<(usize, Layout)> = None;
    for start in 0..order.len() {
        let Some(layout) = run_from_seed(order, start, size) else {
            continue;
        };
        if best.as_ref().map_or(true, |(_, b)| layout.len() > b.len()) {
            best = Some((start, layout));
        }
    }
    best
}

/// Runs attempts in order, returning the best layout and the number of
/// sub-runs performed. Stops as soon as a layout places `stop_at` words.
fn best_sequential(
    orders: &[Vec<Word>],
    size: usize,
    stop_at: Option<usize>,
) -> (Option<Crossword>, usize) {
    let mut best: Option<Layout> = None;
    let mut runs = 0;

    for (attempt, order) in orders.iter().enumerate() {
        for start in 0..order.len() {
            runs += 1;
            let Some(layout) = run_from_seed(order, start, size) else {
                continue;
            };
            debug!(
                "attempt {attempt}, seed {}: {} words, score {}",
                order[start].text,
                layout.len(),
                layout.total_score
            );

            if best.as_ref().map_or(true, |b| layout.len() > b.len()) {
                best = Some(layout);
            }
            if let Some(target) = stop_at {
                if best.as_ref().is_some_and(|b| b.len() == target) {
                    debug!("all {target} words placed, stopping after attempt {attempt}");
                    return (best.map(Layout::into_crossword), runs);
                }
            }
        }
    }

    (best.map(Layout::into_crossword), runs)
}

fn best_parallel(orders: &[Vec<Word>], size: usize) -> Option<Crossword> {
    orders
        .par_iter()
        .enumerate()
        .filter_map(|(attempt, order)| {
            best_in_attempt(order, size).map(|(start, layout)| {
                debug!(
                    "attempt {attempt}: best seed {} with {} words",
                    order[start].text,
                    layout.len()
                );
                (attempt, start, layout)
            })
        })
        // keys are unique, so the reduction is independent of scheduling
        .max_by_key(|(attempt, start, layout)| (layout.len(), Reverse((*attempt, *start))))
        .map(|(_, _, layout)| layout.into_crossword())
}
