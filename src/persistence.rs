//! File I/O: word lists in, finished crosswords out.
//!
//! Word lists come in two formats:
//! - JSON: an array of `{"word": ..., "clue": ...}` objects (optional
//!   `label` and `character_hints`)
//! - text: one `word, clue` record per line; fields are trimmed, may be
//!   wrapped in double quotes (with `""` as an escaped quote, and line breaks
//!   kept inside quotes), blank lines are skipped
//!
//! Crosswords are saved as pretty-printed JSON.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::crossword::Crossword;
use crate::error::{Error, Result};
use crate::words::Entry;

/// Loads a word list, choosing the format from the file extension.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json_entries(&contents)
    } else {
        parse_word_list(&contents)
    }
}

/// Parses a JSON array of entries.
pub fn parse_json_entries(contents: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(contents)?)
}

/// Parses two-column `word, clue` text.
pub fn parse_word_list(contents: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (line, fields) in records(contents)? {
        let [word, clue] = <[String; 2]>::try_from(fields).map_err(|fields| Error::WordList {
            line,
            message: format!(
                "expected exactly 2 columns (word, clue), found {}",
                fields.len()
            ),
        })?;
        entries.push(Entry::new(word, clue));
    }

    Ok(entries)
}

/// Splits text into comma-separated records, each paired with the line it
/// starts on. Quoted fields may contain commas, `""` and line breaks. Blank
/// lines produce no record.
fn records(contents: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = contents.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            '\n' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
                finish_record(&mut records, record_line, std::mem::take(&mut fields));
                line += 1;
                record_line = line;
            }
            '\n' => {
                field.push(c);
                line += 1;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::WordList {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    fields.push(field.trim().to_string());
    finish_record(&mut records, record_line, fields);
    Ok(records)
}

fn finish_record(records: &mut Vec<(usize, Vec<String>)>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].is_empty();
    if !blank {
        records.push((line, fields));
    }
}

/// Saves a crossword as JSON.
pub fn save_crossword(path: impl AsRef<Path>, crossword: &Crossword) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, crossword)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Loads a crossword saved by [`save_crossword`].
pub fn load_crossword(path: impl AsRef<Path>) -> Result<Crossword> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Generator, GeneratorConfig};

    #[test]
    fn test_empty_text_gives_no_entries() {
        assert_eq!(parse_word_list("").unwrap(), Vec::<Entry>::new());
    }

    #[test]
    fn test_two_column_text() {
        let entries = parse_word_list("foo, foo clue\n\nbar, bar clue\n").unwrap();
        assert_eq!(
            entries,
            vec![Entry::new("foo", "foo clue"), Entry::new("bar", "bar clue")]
        );
    }

    #[test]
    fn test_quoted_clue_may_contain_commas() {
        let entries = parse_word_list(r#"paris, "capital of France, on the Seine""#).unwrap();
        assert_eq!(entries[0].clue, "capital of France, on the Seine");

        let entries = parse_word_list(r#""say", "a ""quoted"" word""#).unwrap();
        assert_eq!(entries[0].word, "say");
        assert_eq!(entries[0].clue, r#"a "quoted" word"#);
    }

    #[test]
    fn test_quoted_clue_may_span_lines() {
        let text = "paris, \"capital of France,\non the Seine\"\r\nrome, capital of Italy\n";
        let entries = parse_word_list(text).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new("paris", "capital of France,\non the Seine"),
                Entry::new("rome", "capital of Italy"),
            ]
        );

        let err = parse_word_list("a, \"first\nsecond\"\n\nbad\n").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 4, .. }), "got {err}");

        let err = parse_word_list("a, b\nc, \"open\nstill open").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 2, .. }), "got {err}");
    }

    #[test]
    fn test_wrong_column_count_names_the_line() {
        let err = parse_word_list("foo\nbar, bar clue").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 1, .. }), "got {err}");

        let err = parse_word_list("foo, clue\nbar, b, c").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 2, .. }), "got {err}");
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        let err = parse_word_list("\"foo, clue").unwrap_err();
        assert!(matches!(err, Error::WordList { line: 1, .. }));
    }

    #[test]
    fn test_json_entries_accept_both_key_styles() {
        let entries = parse_json_entries(
            r#"[
                {"word": "food", "clue": "eaten", "character_hints": [0]},
                {"Word": "fud", "Clue": "doubt", "label": "1D"}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries[0], Entry::new("food", "eaten").with_hints([0]));
        assert_eq!(entries[1], Entry::new("fud", "doubt").with_label("1D"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_json_entries("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_crossword_survives_save_and_load() {
        let generator = Generator::new(GeneratorConfig {
            grid_size: 4,
            attempts: 1,
            seed: Some(0),
            ..GeneratorConfig::default()
        })
        .unwrap();
        let crossword = generator.generate(&[Entry::new("food", "eaten"), Entry::new("fud", "")]);

        let path = std::env::temp_dir().join(format!(
            "crossword-persistence-{}.json",
            std::process::id()
        ));
        save_crossword(&path, &crossword).unwrap();
        let loaded = load_crossword(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, crossword);
    }

    #[test]
    fn test_load_entries_by_extension() {
        let dir = std::env::temp_dir();
        let json = dir.join(format!("crossword-words-{}.json", std::process::id()));
        let text = dir.join(format!("crossword-words-{}.csv", std::process::id()));
        fs::write(&json, r#"[{"word": "food", "clue": "eaten"}]"#).unwrap();
        fs::write(&text, "food, eaten\n").unwrap();

        let from_json = load_entries(&json).unwrap();
        let from_text = load_entries(&text).unwrap();
        fs::remove_file(&json).unwrap();
        fs::remove_file(&text).unwrap();

        assert_eq!(from_json, from_text);
        assert!(matches!(
            load_entries(dir.join("crossword-missing-words.csv")),
            Err(Error::Io(_))
        ));
    }
}
