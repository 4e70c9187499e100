//! # Error Types
//!
//! Errors raised while resolving a spacer layout. Every variant is fatal to
//! the request: planning is deterministic, so retrying with the same input
//! cannot succeed.

use config::constants::{ConfigError, MAX_CELLS};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while planning a layout.
///
/// ## Example
///
/// ```rust
/// use spacer_layout::{plan, CellType, LayoutError, ParameterRecord};
///
/// let params = ParameterRecord::new(CellType::Small, 0.0, 0, 3, false);
/// match plan(&params) {
///     Err(LayoutError::InvalidGridSize { series, .. }) => assert_eq!(series, 0),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The cell type selector is not in the cell table.
    #[error("Invalid cell type '{selector}': expected 18650 or 21700")]
    InvalidCellType {
        /// Selector as supplied by the caller
        selector: String,
    },

    /// Row or column count below one, or too many cells in total.
    #[error("Invalid grid size {series}S{parallel}P: counts must be at least 1 and the grid at most {} cells", MAX_CELLS)]
    InvalidGridSize {
        /// Requested column count
        series: i64,
        /// Requested row count
        parallel: i64,
    },

    /// Adjusted cell diameter is zero or negative.
    #[error("Invalid cell diameter {diameter} mm (nominal {nominal} mm, adjustment {adjustment} mm)")]
    InvalidDiameter {
        /// Effective diameter after adjustment
        diameter: f64,
        /// Nominal diameter of the cell type
        nominal: f64,
        /// Requested adjustment
        adjustment: f64,
    },

    /// Diameter adjustment is NaN or infinite.
    #[error("Diameter adjustment must be finite: {0}")]
    NonFiniteAdjustment(f64),

    /// The geometry constants snapshot is unusable.
    #[error("Invalid spacer configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for layout planning.
pub type LayoutResult<T> = Result<T, LayoutError>;
