//! RV32 instruction-word classifier CLI.
//!
//! Reads a dump of 32-bit instruction words (whitespace-separated hex,
//! optional `0x` prefix) and prints one `ADDRESS: mnemonic` line per word.
//! Useful for spot-checking what a pipeline trace will call the contents
//! of a program image.
//!
//! ```text
//! $ pipetrace program.hex
//! 00000000: addi
//! 00000004: lw
//! 00000008: beq
//! ```

use clap::Parser;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;

use pipetrace_core::classify;

#[derive(Parser, Debug)]
#[command(
    name = "pipetrace",
    version,
    about = "Classify RV32 instruction words from a hex dump",
    long_about = "Reads whitespace-separated 32-bit hex instruction words (optional 0x prefix)\nand prints the canonical mnemonic for each, one per line, with a running\naddress.\n\nExamples:\n  pipetrace program.hex\n  pipetrace program.hex --base 0x80000000 -o program.dis"
)]
struct Cli {
    /// Input file of hex instruction words.
    file: PathBuf,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Address of the first word (hex with 0x prefix, or decimal).
    #[arg(long, default_value = "0", value_parser = parse_address)]
    base: u32,
}

/// Parses a CLI address argument: `0x`-prefixed hex or plain decimal.
fn parse_address(text: &str) -> Result<u32, String> {
    let parsed = text
        .strip_prefix("0x")
        .map_or_else(|| text.parse::<u32>(), |hex| u32::from_str_radix(hex, 16));
    parsed.map_err(|e| format!("invalid address '{text}': {e}"))
}

/// Parses one instruction-word token from the dump.
fn parse_word(token: &str) -> Result<u32, String> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid instruction word '{token}': {e}"))
}

/// Classifies every word in `contents` and writes one line per word.
fn classify_dump(contents: &str, base: u32, out: &mut impl Write) -> io::Result<()> {
    for (index, token) in contents.split_whitespace().enumerate() {
        let word = parse_word(token).unwrap_or_else(|msg| {
            eprintln!("[!] FATAL: {msg}");
            process::exit(1);
        });
        let addr = base.wrapping_add((index as u32) * 4);
        writeln!(out, "{addr:08X}: {}", classify(word))?;
    }
    out.flush()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Could not read file '{}': {e}", cli.file.display());
        process::exit(1);
    });
    debug!(file = %cli.file.display(), bytes = contents.len(), "dump loaded");

    let result = match cli.output {
        Some(path) => {
            let file = File::create(&path).unwrap_or_else(|e| {
                eprintln!(
                    "[!] FATAL: Could not create output file '{}': {e}",
                    path.display()
                );
                process::exit(1);
            });
            classify_dump(&contents, cli.base, &mut BufWriter::new(file))
        }
        None => classify_dump(&contents, cli.base, &mut io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("[!] FATAL: Could not write output: {e}");
        process::exit(1);
    }
}
