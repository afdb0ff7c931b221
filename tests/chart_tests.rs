//! Chart Tests
//!
//! Rendering of the codebook listing and the tree diagram.
//! Run with: cargo test --test chart_tests

use morse_codec::chart::{CodeChart, CHART_BUFFER_LEN, TREE_DIAGRAM};
use morse_codec::MorseError;

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_listing_pairs_the_columns() {
    let mut chart = CodeChart::new();
    chart.listing().unwrap();
    let text = chart.as_str();

    // Codes are right-justified in a five column field.
    assert!(text.contains("A    .- N    -."), "got:\n{text}");
    assert!(text.contains("M    -- Z  --.."), "got:\n{text}");
    assert!(text.contains("E     . R   .-."), "got:\n{text}");
}

#[test]
fn test_listing_has_thirteen_rows() {
    let mut chart = CodeChart::new();
    chart.listing().unwrap();
    assert_eq!(chart.as_str().lines().count(), 13);
    assert!(chart.as_str().lines().all(|line| line.starts_with("\t\t")));
}

#[test]
fn test_listing_fits_the_buffer() {
    let mut chart = CodeChart::new();
    chart.listing().unwrap();
    // A truncated render would lose trailing rows.
    assert!(chart.as_str().ends_with('\n'));
    assert!(chart.as_str().len() <= CHART_BUFFER_LEN);
}

// =============================================================================
// Row Tests
// =============================================================================

#[test]
fn test_row_renders_letter_and_code() {
    let mut chart = CodeChart::new();
    chart.row(b'A').unwrap();
    assert_eq!(chart.as_str(), "A .-");

    chart.row(b'Q').unwrap();
    assert_eq!(chart.as_str(), "Q --.-");
}

#[test]
fn test_row_rejects_unmapped_letters() {
    let mut chart = CodeChart::new();
    assert_eq!(chart.row(b'1'), Err(MorseError::InvalidSymbol));
    assert_eq!(chart.as_str(), "");
}

#[test]
fn test_chart_clear() {
    let mut chart = CodeChart::new();
    chart.row(b'E').unwrap();
    chart.clear();
    assert_eq!(chart.as_str(), "");
}

#[test]
fn test_chart_default_is_empty() {
    assert_eq!(CodeChart::default().as_str(), "");
}

// =============================================================================
// Tree Diagram Tests
// =============================================================================

#[test]
fn test_tree_diagram_names_the_branches() {
    assert!(TREE_DIAGRAM.contains("DIT or '.'"));
    assert!(TREE_DIAGRAM.contains("DAH or '-'"));
}

#[test]
fn test_tree_diagram_bottom_row() {
    assert!(TREE_DIAGRAM.contains("H V F ? L ? P J B X C Y Z Q ? ?"));
}
