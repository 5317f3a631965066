//! Build script to generate embedded word pools
//!
//! Reads the tiered word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LANGUAGES: [&str; 3] = ["en", "es", "fr"];
const TIERS: [&str; 3] = ["basic", "intermediate", "advanced"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("pools.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word pools").unwrap();
    writeln!(output).unwrap();

    for lang in LANGUAGES {
        for tier in TIERS {
            let input_path = format!("data/{lang}/{tier}.txt");
            let const_name = format!("{}_{}", lang.to_uppercase(), tier.to_uppercase());
            generate_word_list(&mut output, &input_path, &const_name, lang, tier);

            // Rebuild if word lists change
            println!("cargo:rerun-if-changed={input_path}");
        }
    }
}

fn generate_word_list(
    output: &mut fs::File,
    input_path: &str,
    const_name: &str,
    lang: &str,
    tier: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    writeln!(output, "/// `{lang}` words exclusive to the `{tier}` tier").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
