//! Encode and decode single letters
//!
//! Both directions are walks over the implicit codebook tree. Encoding walks
//! from a letter's node up to the root and reverses the collected branches;
//! decoding starts at the root and follows one branch per input symbol.
//! Neither direction allocates or searches beyond the one `position` scan at
//! the start of an encode.

use crate::codebook;
use crate::config;
use crate::types::{MorseCode, MorseError, SelfTestFailure, Symbol};

/// Encode one uppercase ASCII letter as Morse code.
///
/// # Errors
///
/// Returns [`MorseError::InvalidSymbol`] when the letter is not in the
/// codebook. Lowercase letters, digits, and the `*`/`?` marker bytes all
/// fall in that category; callers wanting case folding do it themselves.
///
/// # Examples
///
/// ```
/// use morse_codec::encode;
///
/// let code = encode(b'A')?;
/// assert_eq!(code.as_str(), ".-");
/// # Ok::<(), morse_codec::MorseError>(())
/// ```
pub fn encode(letter: u8) -> Result<MorseCode, MorseError> {
    let mut pos = codebook::position(letter).ok_or(MorseError::InvalidSymbol)?;
    let mut buffer = [config::TERMINATOR; config::CODE_BUFFER_LEN];
    let mut written = 0;
    // Walk leaf to root; each step emits the branch just climbed, so the
    // symbols come out in reverse transmission order.
    while codebook::parent(pos) != 0 {
        buffer[written] = codebook::branch(pos).as_byte();
        written += 1;
        pos = codebook::parent(pos);
    }
    buffer[..written].reverse();
    Ok(MorseCode::from_raw(buffer))
}

/// Decode one dot/dash sequence to its letter.
///
/// The walk stops at the first [`config::TERMINATOR`] byte or at the end of
/// the slice, whichever comes first, so both terminated buffers (including
/// the raw buffer of a [`MorseCode`]) and exact slices decode directly.
///
/// A walk that runs off the table returns `Ok` of [`config::GAP_MARKER`]
/// rather than an error: the input was well formed, it just names no letter.
/// Once the walk has left the table the remaining input is not examined.
/// Empty input returns [`config::ROOT_MARKER`], the entry under the root.
///
/// # Errors
///
/// Returns [`MorseError::InvalidCharacter`] when a byte is neither dot,
/// dash, nor terminator.
///
/// # Examples
///
/// ```
/// use morse_codec::{decode, encode};
///
/// assert_eq!(decode(b".-"), Ok(b'A'));
/// assert_eq!(decode(b"----"), Ok(b'?'));
///
/// let code = encode(b'Q')?;
/// assert_eq!(decode(code.as_bytes()), Ok(b'Q'));
/// # Ok::<(), morse_codec::MorseError>(())
/// ```
pub fn decode(input: &[u8]) -> Result<u8, MorseError> {
    let mut index = 1;
    for &byte in input {
        if index >= config::CODEBOOK_LEN {
            // Path left the table; nothing that follows can bring it back.
            break;
        }
        if byte == config::TERMINATOR {
            break;
        }
        match Symbol::from_byte(byte) {
            Some(symbol) => index = codebook::child(index, symbol),
            None => return Err(MorseError::InvalidCharacter),
        }
    }
    match codebook::entry(index) {
        Some(letter) => Ok(letter),
        None => Ok(config::GAP_MARKER),
    }
}

/// Round-trip every letter A through Z and verify each comes back intact.
///
/// Intended as a power-on check; the binary runs it before touching its
/// arguments.
///
/// # Errors
///
/// Returns the first [`SelfTestFailure`] encountered, naming the letter and
/// the stage that failed.
pub fn self_test() -> Result<(), SelfTestFailure> {
    for letter in b'A'..=b'Z' {
        let code = encode(letter).map_err(|_| SelfTestFailure::Encode(letter))?;
        let decoded = decode(code.as_bytes()).map_err(|_| SelfTestFailure::Decode(letter))?;
        if decoded != letter {
            return Err(SelfTestFailure::Mismatch {
                expected: letter,
                decoded,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_letters() {
        assert_eq!(encode(b'E').unwrap().as_str(), ".");
        assert_eq!(encode(b'T').unwrap().as_str(), "-");
        assert_eq!(encode(b'S').unwrap().as_str(), "...");
        assert_eq!(encode(b'O').unwrap().as_str(), "---");
    }

    #[test]
    fn decode_follows_tree() {
        assert_eq!(decode(b"."), Ok(b'E'));
        assert_eq!(decode(b"-"), Ok(b'T'));
        assert_eq!(decode(b".-"), Ok(b'A'));
        assert_eq!(decode(b"--.."), Ok(b'Z'));
    }

    #[test]
    fn round_trip_alphabet() {
        assert_eq!(self_test(), Ok(()));
    }

    #[test]
    fn rejects_unmapped_bytes() {
        assert_eq!(encode(b'1'), Err(MorseError::InvalidSymbol));
        assert_eq!(encode(b'a'), Err(MorseError::InvalidSymbol));
        assert_eq!(encode(config::ROOT_MARKER), Err(MorseError::InvalidSymbol));
        assert_eq!(encode(config::GAP_MARKER), Err(MorseError::InvalidSymbol));
    }

    #[test]
    fn rejects_foreign_symbols() {
        assert_eq!(decode(b".x."), Err(MorseError::InvalidCharacter));
        assert_eq!(decode(b" .-"), Err(MorseError::InvalidCharacter));
    }
}
