//! Word records: raw input entries and their normalized form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A raw `(word, clue)` pair as supplied by a word list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(alias = "Word")]
    pub word: String,
    #[serde(default, alias = "Clue")]
    pub clue: String,
    /// Display label used instead of the generated `A{n}`/`D{n}` id.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "Label")]
    pub label: Option<String>,
    /// Letter indices revealed regardless of solved state.
    #[serde(default, skip_serializing_if = "Vec::is_empty", alias = "CharacterHints")]
    pub character_hints: Vec<usize>,
}

impl Entry {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
            ..Self::default()
        }
    }

    pub fn with_hints(mut self, hints: impl IntoIterator<Item = usize>) -> Self {
        self.character_hints = hints.into_iter().collect();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A normalized word ready for placement.
///
/// `text` is upper-case with all spaces removed. Hint indices refer to
/// positions in `text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub clue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub character_hints: BTreeSet<usize>,
}

impl Word {
    /// Builds a word from already-normalized text.
    pub fn new(text: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clue: clue.into(),
            label: None,
            character_hints: BTreeSet::new(),
        }
    }

    /// Number of letters (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The letters of the word, in order.
    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Returns `true` if the letter at `index` is pre-revealed.
    #[inline]
    pub fn is_hinted(&self, index: usize) -> bool {
        self.character_hints.contains(&index)
    }
}

/// Options controlling [`normalize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Keep characters other than ASCII letters, digits and whitespace.
    pub keep_special_characters: bool,
    /// Reveal the first letter of every space-separated component.
    pub reveal_first_letters: bool,
}

/// Normalizes a raw entry into a [`Word`].
///
/// Steps, in order: optional removal of everything except ASCII
/// alphanumerics and whitespace; collapsing whitespace runs to one space and
/// trimming; optional first-letter hints; upper-casing and dropping spaces.
/// Explicit hints on the entry are kept.
pub fn normalize(entry: &Entry, options: NormalizeOptions) -> Result<Word> {
    let stripped: String = if options.keep_special_characters {
        entry.word.clone()
    } else {
        entry
            .word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect()
    };

    // upper-casing can expand a character, so offsets are taken afterwards
    let components: Vec<String> = stripped
        .split_whitespace()
        .map(|component| component.chars().flat_map(char::to_uppercase).collect())
        .collect();

    let mut character_hints: BTreeSet<usize> = entry.character_hints.iter().copied().collect();
    if options.reveal_first_letters {
        let mut offset = 0;
        for component in &components {
            character_hints.insert(offset);
            offset += component.chars().count();
        }
    }

    let text = components.concat();

    if text.is_empty() {
        return Err(Error::EmptyWord {
            original: entry.word.clone(),
        });
    }

    Ok(Word {
        text,
        clue: entry.clue.trim().to_string(),
        label: entry.label.clone(),
        character_hints,
    })
}
