//! Codec configuration and compile-time constants
//!
//! The symbol alphabet, the codebook, and the buffer sizing are centralized
//! here. They are compile-time constants rather than runtime settings: the
//! codebook bytes are an interoperability contract, and the alphabet defaults
//! match every existing encoded output.

/// Encoded dot symbol.
pub const DOT: u8 = b'.';

/// Encoded dash symbol.
pub const DASH: u8 = b'-';

/// Code terminator, also the zero-fill value for unused buffer slots.
pub const TERMINATOR: u8 = 0;

/// Codebook entry with no assigned letter.
///
/// Also the decode result for a well-formed code that lands on such an entry
/// or runs past the table. A `?` result is a value, not a failure.
pub const GAP_MARKER: u8 = b'?';

/// Codebook entry at the root positions (indices 0 and 1).
///
/// Never an encode target; decoding the empty code lands on index 1 and
/// yields this byte.
pub const ROOT_MARKER: u8 = b'*';

/// The codebook: a breadth-first layout of the Morse binary tree.
///
/// The root sits at index 1 and the children of index `n` at `2n` and
/// `2n + 1`, so the entry at index `n` is the letter whose code is the binary
/// representation of `n` with the leading 1 stripped (0 = dot, 1 = dash).
/// These 32 bytes must never change; they are what existing encoded outputs
/// were produced against.
pub const CODEBOOK: &[u8; 32] = b"**ETIANMSURWDKGOHVF?L?PJBXCYZQ??";

/// Number of codebook entries, and the decode accumulator bound.
pub const CODEBOOK_LEN: usize = CODEBOOK.len();

/// Symbol slots reserved per code.
///
/// The deepest assigned entries sit four levels below the root; the buffer
/// format reserves five slots.
pub const MAX_SYMBOLS: usize = 5;

/// Code buffer length: [`MAX_SYMBOLS`] symbol slots plus one terminator slot.
pub const CODE_BUFFER_LEN: usize = MAX_SYMBOLS + 1;
