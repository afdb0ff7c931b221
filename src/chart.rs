//! Human-readable views of the codebook
//!
//! Renders the codebook as text for help output and diagnostics. Rendering
//! goes through a fixed-capacity buffer and computes every code with the
//! encoder, so the chart can never drift from the table it describes.

use core::fmt;

use crate::codec;
use crate::types::MorseError;

/// Capacity of the chart render buffer, sized for the full two-column
/// listing.
pub const CHART_BUFFER_LEN: usize = 256;

/// The codebook tree drawn as text, dot branches left and dash branches
/// right. The `?` leaves are table slots with no assigned letter.
pub const TREE_DIAGRAM: &str = r"        DIT or '.' <-- * --> DAH or '-'
                /             \
               E               T
             /   \           /   \
           I       A       N       M
          / \     / \     / \     / \
         S   U   R   W   D   K   G   O
        / \ / \ / \ / \ / \ / \ / \ / \
        H V F ? L ? P J B X C Y Z Q ? ?
";

/// Fixed-capacity renderer for codebook text.
pub struct CodeChart {
    buffer: heapless::String<CHART_BUFFER_LEN>,
}

impl CodeChart {
    /// Create an empty chart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: heapless::String::new(),
        }
    }

    /// Render a single `letter code` row, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::InvalidSymbol`] when the letter has no code;
    /// the buffer is left empty in that case.
    pub fn row(&mut self, letter: u8) -> Result<(), MorseError> {
        self.buffer.clear();
        let code = codec::encode(letter)?;
        let _ = fmt::write(
            &mut self.buffer,
            format_args!("{} {}", letter as char, code.as_str()),
        );
        Ok(())
    }

    /// Render the alphabet as two columns, A through M beside N through Z.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::InvalidSymbol`] if any letter fails to encode,
    /// which the round-trip self-test rules out on an intact codebook.
    pub fn listing(&mut self) -> Result<(), MorseError> {
        self.buffer.clear();
        for left in b'A'..=b'M' {
            let right = left + 13;
            let left_code = codec::encode(left)?;
            let right_code = codec::encode(right)?;
            let _ = fmt::write(
                &mut self.buffer,
                format_args!(
                    "\t\t{} {:>5} {} {:>5}\n",
                    left as char,
                    left_code.as_str(),
                    right as char,
                    right_code.as_str()
                ),
            );
        }
        Ok(())
    }

    /// Rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Discard the rendered text.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for CodeChart {
    fn default() -> Self {
        Self::new()
    }
}
