//! Batch lookup command
//!
//! Looks up many words at once. Lookups share the dictionary read-only, so they
//! run in parallel on a bounded pool: each one holds a full permutation set, so
//! peak memory grows with the number of concurrent lookups.

use crate::anagram::{LookupReport, lookup};
use crate::core::{DEFAULT_MAX_LENGTH, DictionaryEntry, InputError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Concurrent lookups when no `--jobs` value is given
pub const DEFAULT_BATCH_JOBS: usize = 2;

/// Configuration for a batch run
pub struct BatchConfig {
    pub max_length: usize,
    /// Worker threads; each holds one permutation set at a time
    pub jobs: usize,
    pub show_progress: bool,
}

impl BatchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            jobs: DEFAULT_BATCH_JOBS,
            show_progress: false,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup outcome for one batch word
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub raw: String,
    pub report: Result<LookupReport, InputError>,
}

/// Aggregate result of a batch run
#[derive(Debug)]
pub struct BatchResult {
    pub outcomes: Vec<BatchOutcome>,
    pub total: usize,
    pub found: usize,
    pub rejected: usize,
    pub duration: Duration,
}

/// Read one word per line, skipping blank lines and `#` comments
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(&path)?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        warn!(path = %path.as_ref().display(), "word file has no words");
    }
    Ok(words)
}

/// Look up every word in `words` against `dictionary`
///
/// Outcomes keep the order of `words`. At most `config.jobs` lookups run at once.
pub fn run_batch(
    words: &[String],
    dictionary: &[DictionaryEntry],
    config: &BatchConfig,
) -> BatchResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let look_up = |raw: &String| {
        let report = lookup(raw, dictionary, config.max_length);
        pb.inc(1);
        BatchOutcome {
            raw: raw.clone(),
            report,
        }
    };

    let outcomes: Vec<BatchOutcome> = match ThreadPoolBuilder::new()
        .num_threads(config.jobs.max(1))
        .build()
    {
        Ok(pool) => pool.install(|| words.par_iter().map(look_up).collect()),
        Err(e) => {
            warn!(error = %e, "could not start batch workers, looking up sequentially");
            words.iter().map(look_up).collect()
        }
    };

    pb.finish_with_message("Complete!");

    let found = outcomes
        .iter()
        .filter(|o| o.report.as_ref().is_ok_and(LookupReport::is_found))
        .count();
    let rejected = outcomes.iter().filter(|o| o.report.is_err()).count();
    let duration = start.elapsed();

    info!(
        words = words.len(),
        jobs = config.jobs,
        found,
        rejected,
        elapsed_ms = duration.as_millis() as u64,
        "batch lookup finished"
    );

    BatchResult {
        total: outcomes.len(),
        outcomes,
        found,
        rejected,
        duration,
    }
}
