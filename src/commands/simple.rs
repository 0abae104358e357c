//! Simple interactive CLI mode
//!
//! Line-based lookup loop without TUI

use crate::anagram::lookup;
use crate::core::DictionaryEntry;
use crate::output::print_lookup_report;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &[DictionaryEntry], max_length: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Anagram Finder - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a word to list its anagrams from the dictionary.");
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Word: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            // EOF
            println!();
            return Ok(());
        };
        let input = line.map_err(|e| e.to_string())?;

        if is_quit_command(&input) {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        }

        match lookup(&input, dictionary, max_length) {
            Ok(report) => print_lookup_report(&report, false),
            Err(e) => println!("{}", format!("❌ {e}").red()),
        }
        println!();
    }
}

fn is_quit_command(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "quit" | "q" | "exit")
}
