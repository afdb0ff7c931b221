//! Table-driven Morse code codec
//!
//! Encodes single uppercase ASCII letters to dot/dash sequences and decodes
//! them back, driven by one 32-byte table that doubles as a binary tree
//! stored breadth-first:
//!
//! ```text
//!         DIT or '.' <-- * --> DAH or '-'
//!                 /             \
//!                E               T
//!              /   \           /   \
//!            I       A       N       M
//!           / \     / \     / \     / \
//!          S   U   R   W   D   K   G   O
//!         / \ / \ / \ / \ / \ / \ / \ / \
//!         H V F ? L ? P J B X C Y Z Q ? ?
//! ```
//!
//! The root lives at index 1; a dot steps to index `2n`, a dash to
//! `2n + 1`, so a letter's code is its table index written in binary with
//! the leading bit dropped. Both directions reduce to a handful of shifts
//! over the table in [`config::CODEBOOK`].
//!
//! # Design
//!
//! - Builds without `std`; the default `std` feature adds
//!   `std::error::Error` impls and the `morse` command line binary
//! - No allocation: codes live in fixed buffers and chart rendering goes
//!   through a `heapless` string
//! - The optional `defmt` feature derives wire formatting for embedded
//!   logging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Text renderings of the codebook
pub mod chart;
/// Codebook table and implicit-tree arithmetic
pub mod codebook;
/// Letter encoding, decoding, and the round-trip self-test
pub mod codec;
/// Codec constants and the codebook itself
pub mod config;
/// Symbols, codes, and error types
pub mod types;

pub use codec::{decode, encode, self_test};
pub use types::{MorseCode, MorseError, SelfTestFailure, Symbol};

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
