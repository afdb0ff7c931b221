//! Codebook table and implicit-tree arithmetic
//!
//! The codebook is a binary tree stored breadth-first in a flat byte table,
//! heap style: the root sits at index 1, and the children of node `n` sit at
//! `2n` (dot) and `2n + 1` (dash). A letter's code is therefore the binary
//! numeral of its index with the leading 1 bit dropped, read 0 as dot and
//! 1 as dash. The arithmetic here is the whole trick; the codec on top of it
//! never searches.

use crate::config;
use crate::types::Symbol;

/// Look up the codebook entry at a tree index.
///
/// Returns `None` when the index lies outside the table, which is how a
/// decode walk discovers it has left the tree.
#[must_use]
pub const fn entry(index: usize) -> Option<u8> {
    if index < config::CODEBOOK_LEN {
        Some(config::CODEBOOK[index])
    } else {
        None
    }
}

/// Find the tree index of a letter.
///
/// Marker bytes (`*` and `?`) occupy table slots but name no letter, so they
/// have no position. Every real letter appears exactly once.
#[must_use]
pub fn position(letter: u8) -> Option<usize> {
    if is_marker(letter) {
        return None;
    }
    config::CODEBOOK.iter().position(|&entry| entry == letter)
}

/// Check whether a byte is one of the codebook's marker entries.
#[must_use]
pub const fn is_marker(byte: u8) -> bool {
    byte == config::GAP_MARKER || byte == config::ROOT_MARKER
}

/// Parent of a tree node. The root's parent is the out-of-tree index 0.
#[must_use]
pub const fn parent(index: usize) -> usize {
    index >> 1
}

/// Child of a tree node along a dot or dash branch.
#[must_use]
pub const fn child(index: usize, symbol: Symbol) -> usize {
    match symbol {
        Symbol::Dot => index << 1,
        Symbol::Dash => (index << 1) | 1,
    }
}

/// The branch that leads from a node's parent down to the node itself.
///
/// Odd indices are dash children, even indices dot children.
#[must_use]
pub const fn branch(index: usize) -> Symbol {
    if index & 1 == 1 {
        Symbol::Dash
    } else {
        Symbol::Dot
    }
}

/// Number of branches between the root and a node, which is the symbol count
/// of the node's code.
#[must_use]
pub const fn path_len(index: usize) -> usize {
    if index == 0 {
        0
    } else {
        (usize::BITS - 1 - index.leading_zeros()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_arithmetic_round_trips() {
        for index in 1..config::CODEBOOK_LEN {
            let up = parent(index);
            assert_eq!(child(up, branch(index)), index);
        }
    }

    #[test]
    fn path_len_matches_tree_rows() {
        assert_eq!(path_len(1), 0);
        assert_eq!(path_len(2), 1);
        assert_eq!(path_len(3), 1);
        assert_eq!(path_len(4), 2);
        assert_eq!(path_len(7), 2);
        assert_eq!(path_len(8), 3);
        assert_eq!(path_len(16), 4);
        assert_eq!(path_len(31), 4);
    }

    #[test]
    fn markers_are_not_positions() {
        assert_eq!(position(config::ROOT_MARKER), None);
        assert_eq!(position(config::GAP_MARKER), None);
        assert_eq!(position(b'E'), Some(2));
        assert_eq!(position(b'T'), Some(3));
    }
}
