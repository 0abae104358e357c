//! Command implementations

pub mod batch;
pub mod find;
pub mod permute;
pub mod simple;

pub use batch::{
    BatchConfig, BatchOutcome, BatchResult, DEFAULT_BATCH_JOBS, read_word_file, run_batch,
};
pub use find::{FindConfig, find_anagrams, report_to_json};
pub use permute::{PermuteResult, permute_word};
pub use simple::run_simple;
