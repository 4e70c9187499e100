//! # Tests for Config Constants
//!
//! Sanity checks on the relationships between the geometry constants.

use crate::constants::*;

// =============================================================================
// CELL TESTS
// =============================================================================

#[test]
fn test_large_cell_is_larger() {
    assert!(LARGE_CELL_DIAMETER > SMALL_CELL_DIAMETER);
    assert!(LARGE_CELL_HEIGHT > SMALL_CELL_HEIGHT);
}

#[test]
fn test_pitch_clears_every_cell() {
    assert!(CELL_PITCH > SMALL_CELL_DIAMETER);
    assert!(CELL_PITCH > LARGE_CELL_DIAMETER);
}

// =============================================================================
// GRID TESTS
// =============================================================================

#[test]
fn test_hex_row_factor_approximates_sin_60() {
    let exact = (60.0_f64).to_radians().sin();
    assert!((HEX_ROW_FACTOR - exact).abs() < 1e-3);
}

#[test]
fn test_padding_is_positive() {
    assert!(BODY_PADDING > 0.0);
}

// =============================================================================
// BODY TESTS
// =============================================================================

#[test]
fn test_corner_radius_fits_plate_of_one_cell() {
    // Smallest possible body: one 18650 cavity plus padding.
    let narrowest = SMALL_CELL_DIAMETER + 2.0 * BODY_PADDING;
    assert!(2.0 * CORNER_RADIUS <= narrowest);
}

#[test]
fn test_cavity_cut_clears_both_faces() {
    let top = SPACER_THICKNESS + CAVITY_EXTRA_HEIGHT + CAVITY_Z_OFFSET;
    assert!(CAVITY_Z_OFFSET < 0.0);
    assert!(top > SPACER_THICKNESS);
}

// =============================================================================
// INSULATOR TESTS
// =============================================================================

#[test]
fn test_insulator_is_annulus() {
    assert!(INSULATOR_INNER_DIAMETER < INSULATOR_OUTER_DIAMETER);
    assert!(INSULATOR_INNER_DIAMETER > 0.0);
}

#[test]
fn test_insulator_is_flush() {
    assert_eq!(INSULATOR_DEPTH, 0.0);
}

#[test]
fn test_insulator_fits_within_pitch() {
    assert!(INSULATOR_OUTER_DIAMETER <= CELL_PITCH);
}

// =============================================================================
// OUTPUT TESTS
// =============================================================================

#[test]
fn test_output_precision() {
    assert_eq!(DECIMAL_PLACES, 3);
}

#[test]
fn test_default_paths_have_expected_extensions() {
    assert!(DEFAULT_DOCUMENT_PATH.ends_with(".scad"));
    assert!(DEFAULT_MESH_PATH.ends_with(".stl"));
}
