//! Build script to generate the embedded sample dictionary
//!
//! Reads a tab-separated word list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/sample_dictionary.tsv",
        &Path::new(&out_dir).join("sample_dictionary.rs"),
        "SAMPLE_ENTRIES",
        "Sample dictionary entries as (word, type, definition)",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/sample_dictionary.tsv");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<(&str, i64, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(number, line)| parse_row(input_path, number + 1, line))
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, i64, &str)] = &[").unwrap();

    for (word, kind, definition) in rows {
        // Debug formatting yields a valid, escaped string literal
        writeln!(output, "    ({word:?}, {kind}, {definition:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn parse_row<'a>(input_path: &str, number: usize, line: &'a str) -> (&'a str, i64, &'a str) {
    let mut fields = line.splitn(3, '\t');
    let (Some(word), Some(kind), Some(definition)) = (fields.next(), fields.next(), fields.next())
    else {
        panic!("{input_path}:{number}: expected word<TAB>type<TAB>definition");
    };
    let kind = kind
        .trim()
        .parse()
        .unwrap_or_else(|e| panic!("{input_path}:{number}: invalid type '{kind}': {e}"));

    (word, kind, definition.trim())
}
