//! Command line front end for the codec
//!
//! `morse encode WORDS...` prints one line of space-separated codes per
//! argument; `morse decode CODES...` prints the decoded letters. The
//! round-trip self-test runs before any argument handling, so a corrupted
//! build refuses to translate anything.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::env;
use std::process::ExitCode;

use morse_codec::chart::{CodeChart, TREE_DIAGRAM};
use morse_codec::{decode, encode, self_test, MorseCode, MorseError, VERSION};

fn usage(program: &str) {
    eprintln!("Usage:   {program} encode|decode strings...");
    eprintln!();
    eprintln!("Table-driven Morse codec, version {VERSION}.");
    eprintln!("Exits zero on success and non-zero on failure. Errors go to");
    eprintln!("stderr and output to stdout. The codebook covers the uppercase");
    eprintln!("alphabet only.");
    eprintln!();
    eprintln!("Characters:");
    eprintln!();
    let mut chart = CodeChart::new();
    if chart.listing().is_ok() {
        eprint!("{}", chart.as_str());
    }
    eprintln!();
    eprintln!("Tree:");
    eprintln!();
    eprintln!("{TREE_DIAGRAM}");
}

fn letter_code(ch: char) -> Result<MorseCode, MorseError> {
    let byte = u8::try_from(ch).map_err(|_| MorseError::InvalidSymbol)?;
    encode(byte.to_ascii_uppercase())
}

fn encode_args(args: &[String]) -> ExitCode {
    for arg in args {
        let mut line = String::new();
        for ch in arg.chars() {
            let code = match letter_code(ch) {
                Ok(code) => code,
                Err(_) => {
                    eprintln!("no Morse code for '{ch}'");
                    return ExitCode::FAILURE;
                }
            };
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(code.as_str());
        }
        println!("{line}");
    }
    ExitCode::SUCCESS
}

fn decode_args(args: &[String]) -> ExitCode {
    let mut line = String::new();
    for arg in args {
        // One Morse character per whitespace-separated word; the codec
        // deliberately refuses to split longer runs itself.
        for code in arg.split_whitespace() {
            match decode(code.as_bytes()) {
                Ok(letter) => line.push(letter as char),
                Err(error) => {
                    eprintln!("cannot decode '{code}': {error}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    println!("{line}");
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    if let Err(failure) = self_test() {
        eprintln!("codec self-test failed: {failure}");
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("morse", String::as_str);
    match args.get(1).map(String::as_str) {
        Some("encode") => encode_args(&args[2..]),
        Some("decode") => decode_args(&args[2..]),
        _ => {
            usage(program);
            ExitCode::FAILURE
        }
    }
}
