//! Anagram Finder - CLI
//!
//! Anagram lookup with TUI and CLI modes over a JSON or embedded dictionary.

use anagram_finder::{
    commands::{
        BatchConfig, DEFAULT_BATCH_JOBS, FindConfig, find_anagrams, permute_word, read_word_file,
        report_to_json, run_batch, run_simple,
    },
    core::{DEFAULT_MAX_LENGTH, DictionaryEntry},
    dictionary::provider_for,
    output::{print_batch_result, print_lookup_report, print_permutations},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Find every dictionary word that is an anagram of a given word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default, built-in sample) or path to a JSON file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Longest accepted input word, in letters
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive lookups without TUI)
    Simple,

    /// Find the anagrams of one word
    Find {
        /// The word to look up
        word: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Only list the matching words, not their definitions
        #[arg(short, long)]
        words_only: bool,
    },

    /// Find the anagrams of many words in parallel
    Batch {
        /// File with one word per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Words to look up (in addition to the file)
        words: Vec<String>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,

        /// Lookups to run at once
        #[arg(short, long, default_value_t = DEFAULT_BATCH_JOBS)]
        jobs: usize,
    },

    /// Print the permutations of a word
    Permute {
        /// The word to permute
        word: String,

        /// Drop repeated permutations
        #[arg(short, long)]
        unique: bool,

        /// Show at most this many permutations
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<Vec<DictionaryEntry>> {
    let provider = provider_for(source);
    provider
        .load()
        .with_context(|| format!("Could not load dictionary from {}", provider.describe()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Permute {
            word,
            unique,
            limit,
        } => {
            let result = permute_word(&word, cli.max_length, unique, limit)?;
            print_permutations(&result);
            Ok(())
        }
        Commands::Play => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_play_command(&dictionary, cli.max_length)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_simple(&dictionary, cli.max_length).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Find {
            word,
            json,
            words_only,
        } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_find_command(word, json, words_only, cli.max_length, &dictionary)
        }
        Commands::Batch {
            file,
            words,
            quiet,
            jobs,
        } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let config = BatchConfig {
                max_length: cli.max_length,
                jobs,
                show_progress: !quiet,
            };
            run_batch_command(file, words, &config, &dictionary)
        }
    }
}

fn run_find_command(
    word: String,
    json: bool,
    words_only: bool,
    max_length: usize,
    dictionary: &[DictionaryEntry],
) -> Result<()> {
    let mut config = FindConfig::new(word);
    config.max_length = max_length;
    let report = find_anagrams(&config, dictionary)?;

    if json {
        println!("{}", report_to_json(&report)?);
    } else {
        print_lookup_report(&report, words_only);
    }
    Ok(())
}

fn run_batch_command(
    file: Option<PathBuf>,
    mut words: Vec<String>,
    config: &BatchConfig,
    dictionary: &[DictionaryEntry],
) -> Result<()> {
    if let Some(path) = file {
        let from_file = read_word_file(&path)
            .with_context(|| format!("Could not read word file {}", path.display()))?;
        words.extend(from_file);
    }

    if words.is_empty() {
        anyhow::bail!("No words to look up; pass words or --file");
    }

    println!("🔎 Looking up {} words...", words.len());
    let result = run_batch(&words, dictionary, config);
    print_batch_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &[DictionaryEntry], max_length: usize) -> Result<()> {
    use anagram_finder::interactive::{App, run_tui};

    let app = App::new(dictionary, max_length);
    run_tui(app)
}
