//! Crossword Generator
//!
//! Builds a crossword from a word list (JSON array or `word, clue` lines),
//! prints it as text and optionally saves it as JSON for later display.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::Rng;

use crossword::{
    persistence, render_clues, render_text, Crossword, Generator, GeneratorConfig, RenderOptions,
};

/// Generates crossword puzzles from word lists.
#[derive(Parser)]
#[command(name = "crossword")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log generation progress (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a crossword from a word list.
    Generate(GenerateArgs),
    /// Display a saved crossword.
    Show {
        /// Crossword JSON written by `generate --save`.
        file: PathBuf,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Show the number of words in a saved crossword.
    Count {
        /// Crossword JSON written by `generate --save`.
        file: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Word list: `.json` array of {word, clue}, otherwise `word, clue` lines.
    words: PathBuf,

    /// Side length of the square grid.
    #[arg(long, env = "GRID_SIZE", default_value_t = 25)]
    grid_size: usize,

    /// Number of word orderings to try.
    #[arg(short, long, env = "ATTEMPTS", default_value_t = 10)]
    attempts: usize,

    /// Seed for the randomized orderings.
    #[arg(long)]
    seed: Option<u64>,

    /// Run attempts on all cores.
    #[arg(long)]
    parallel: bool,

    /// Run every attempt even after all words have been placed.
    #[arg(long)]
    all_attempts: bool,

    /// Keep punctuation and other non-alphanumeric characters in words.
    #[arg(long)]
    keep_special_characters: bool,

    /// Reveal the first letter of every word in multi-word entries.
    #[arg(long)]
    reveal_first_letters: bool,

    /// Write the crossword as JSON to this file.
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Clone, Copy)]
struct DisplayArgs {
    /// Reveal every word.
    #[arg(long, env = "SOLVE_ALL")]
    solved: bool,

    /// Reveal a random half of the words.
    #[arg(long)]
    random_solved: bool,

    /// Print the clue list under the grid.
    #[arg(long)]
    clues: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Show { file, display } => run_show(&file, display),
        Command::Count { file } => run_count(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Initializes `env_logger`: `RUST_LOG` when set, `warn` otherwise, and
/// `debug` when `--verbose` is passed.
fn init_logger(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Generates, prints and optionally saves a crossword.
fn run_generate(args: GenerateArgs) -> crossword::Result<()> {
    let entries = persistence::load_entries(&args.words)?;
    let generator = Generator::new(GeneratorConfig {
        grid_size: args.grid_size,
        attempts: args.attempts,
        keep_special_characters: args.keep_special_characters,
        reveal_first_letters: args.reveal_first_letters,
        seed: args.seed,
        parallel: args.parallel,
        all_attempts: args.all_attempts,
    })?;

    let crossword = generator.generate(&entries);

    if let Some(path) = &args.save {
        persistence::save_crossword(path, &crossword)?;
        eprintln!("Wrote {}", path.display());
    }

    print!("{}", format_report(&crossword, args.display, generator.seed()));
    println!("{}", summary_line(entries.len(), &crossword, generator.seed()));
    Ok(())
}

/// Loads and displays a saved crossword.
fn run_show(file: &Path, display: DisplayArgs) -> crossword::Result<()> {
    let crossword = persistence::load_crossword(file)?;
    let seed: u64 = rand::rng().random();
    print!("{}", format_report(&crossword, display, seed));
    println!(
        "WORDS: {} TOTAL SCORE: {}",
        crossword.word_count(),
        crossword.total_score
    );
    Ok(())
}

/// Prints the number of placed words in a saved crossword.
fn run_count(file: &Path) -> crossword::Result<()> {
    let crossword = persistence::load_crossword(file)?;
    println!("{} words", crossword.word_count());
    Ok(())
}

fn summary_line(input_words: usize, crossword: &Crossword, seed: u64) -> String {
    format!(
        "INPUT WORDS: {input_words} OUTPUT WORDS: {} TOTAL SCORE: {} SEED: {seed}",
        crossword.word_count(),
        crossword.total_score
    )
}

/// Renders the grid and, if requested, the clue list. `seed` drives
/// `--random-solved`.
fn format_report(crossword: &Crossword, display: DisplayArgs, seed: u64) -> String {
    let options = RenderOptions {
        solve_all: display.solved,
        solve_random: display.random_solved.then_some(seed),
    };

    let mut output = render_text(crossword, &options);
    if display.clues {
        output.push('\n');
        output.push_str(&render_clues(crossword, &options));
    }
    output
}
