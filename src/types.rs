//! Shared types for the Morse codec
//!
//! Domain types that carry the codec's invariants: the dot/dash symbol
//! alphabet, the fixed-capacity code buffer, and the error kinds. All types
//! are small `Copy` values suitable for constrained targets.

use core::fmt;

use crate::config;

/// One Morse signal: a dot or a dash.
///
/// This is the notation-level alphabet. Element timing (dit/dah durations,
/// inter-element gaps) is a transmission concern and out of scope here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short signal, rendered `.`
    Dot,
    /// Long signal, rendered `-`
    Dash,
}

impl Symbol {
    /// Parse an encoded symbol byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            config::DOT => Some(Self::Dot),
            config::DASH => Some(Self::Dash),
            _ => None,
        }
    }

    /// Encoded byte for this symbol.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Dot => config::DOT,
            Self::Dash => config::DASH,
        }
    }

    /// The symbol as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Symbol {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Dot => defmt::write!(f, "."),
            Self::Dash => defmt::write!(f, "-"),
        }
    }
}

/// An encoded Morse code: up to [`config::MAX_SYMBOLS`] symbols in a fixed
/// buffer.
///
/// The buffer holds the symbol bytes as a prefix; every slot from the first
/// [`config::TERMINATOR`] onward is a terminator, and the final slot always
/// is one, so the raw buffer doubles as a NUL-terminated C string. The whole
/// buffer is zero-initialized before any symbol is written, which is what
/// makes the tail guarantee hold.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MorseCode {
    buffer: [u8; config::CODE_BUFFER_LEN],
}

impl MorseCode {
    /// Maximum number of symbols a code can hold.
    pub const MAX_SYMBOLS: usize = config::MAX_SYMBOLS;

    /// The empty code: every slot a terminator.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buffer: [config::TERMINATOR; config::CODE_BUFFER_LEN],
        }
    }

    /// Wrap a raw buffer. The caller guarantees the prefix/tail invariant.
    pub(crate) const fn from_raw(buffer: [u8; config::CODE_BUFFER_LEN]) -> Self {
        Self { buffer }
    }

    /// Number of symbols in the code.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer
            .iter()
            .position(|&byte| byte == config::TERMINATOR)
            .unwrap_or(config::MAX_SYMBOLS)
    }

    /// Check whether the code holds no symbols.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer[0] == config::TERMINATOR
    }

    /// Dot/dash text of the code, without the terminator tail.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // The prefix is '.'/'-' bytes only, so this cannot fail.
        core::str::from_utf8(&self.buffer[..self.len()]).unwrap_or("")
    }

    /// The raw code buffer, including the zero-filled terminator tail.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; config::CODE_BUFFER_LEN] {
        &self.buffer
    }

    /// Iterate the symbols of the code in transmission order.
    #[must_use]
    pub fn symbols(&self) -> Symbols<'_> {
        Symbols { rest: &self.buffer }
    }
}

impl Default for MorseCode {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MorseCode({})", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MorseCode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Iterator over the symbols of a [`MorseCode`].
#[derive(Clone, Debug)]
pub struct Symbols<'a> {
    rest: &'a [u8],
}

impl Iterator for Symbols<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        let (&first, rest) = self.rest.split_first()?;
        let symbol = Symbol::from_byte(first)?;
        self.rest = rest;
        Some(symbol)
    }
}

/// Codec failure kinds.
///
/// These are the only two failures the codec produces. A decode result of
/// [`config::GAP_MARKER`] is not one of them; see [`crate::codec::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorseError {
    /// The encode input has no assigned Morse code: it is absent from the
    /// codebook, or is one of the `*`/`?` markers.
    InvalidSymbol,
    /// The decode input contains a byte that is neither dot, dash, nor
    /// terminator.
    InvalidCharacter,
}

impl fmt::Display for MorseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol => f.write_str("character has no assigned Morse code"),
            Self::InvalidCharacter => f.write_str("input is not a dot/dash sequence"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MorseError {}

#[cfg(feature = "defmt")]
impl defmt::Format for MorseError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidSymbol => defmt::write!(f, "InvalidSymbol"),
            Self::InvalidCharacter => defmt::write!(f, "InvalidCharacter"),
        }
    }
}

/// Failure detail reported by [`crate::codec::self_test`].
///
/// Carries the letter under test and the stage that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelfTestFailure {
    /// The letter failed to encode.
    Encode(u8),
    /// The encoded letter failed to decode.
    Decode(u8),
    /// Decoding returned a different letter than was encoded.
    Mismatch {
        /// Letter fed to the encoder.
        expected: u8,
        /// Letter the decoder returned.
        decoded: u8,
    },
}

impl fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(letter) => write!(f, "'{}' failed to encode", *letter as char),
            Self::Decode(letter) => {
                write!(f, "code for '{}' failed to decode", *letter as char)
            }
            Self::Mismatch { expected, decoded } => write!(
                f,
                "'{}' round-tripped to '{}'",
                *expected as char, *decoded as char
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SelfTestFailure {}

#[cfg(feature = "defmt")]
impl defmt::Format for SelfTestFailure {
    fn format(&self, f: defmt::Formatter) {
        match *self {
            Self::Encode(letter) => defmt::write!(f, "Encode({=u8})", letter),
            Self::Decode(letter) => defmt::write!(f, "Decode({=u8})", letter),
            Self::Mismatch { expected, decoded } => {
                defmt::write!(f, "Mismatch({=u8} -> {=u8})", expected, decoded);
            }
        }
    }
}
