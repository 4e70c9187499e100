//! Caller-supplied parameters for one generation request.

use crate::cell::CellType;
use crate::error::{LayoutError, LayoutResult};
use config::constants::MAX_CELLS;
use serde::{Deserialize, Serialize};

/// Input record for [`plan`](crate::plan).
///
/// Counts are signed so that zero or negative values coming from a form or a
/// JSON file reach validation and fail as [`LayoutError::InvalidGridSize`].
/// Missing JSON fields fall back to [`ParameterRecord::default`].
///
/// # Examples
/// ```
/// use spacer_layout::{CellType, ParameterRecord};
/// let params = ParameterRecord::default();
/// assert_eq!(params.cell_type, CellType::Large);
/// assert_eq!((params.series_cells, params.parallel_cells), (4, 5));
/// assert!(params.slanted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterRecord {
    /// Cell format selecting the nominal diameter and height.
    pub cell_type: CellType,
    /// Clearance added to the nominal diameter, in millimetres.
    pub diameter_adjustment: f64,
    /// Grid columns.
    pub series_cells: i64,
    /// Grid rows.
    pub parallel_cells: i64,
    /// Offset alternate rows by half a pitch.
    pub slanted: bool,
}

impl ParameterRecord {
    /// Builds a record from its five fields.
    pub fn new(
        cell_type: CellType,
        diameter_adjustment: f64,
        series_cells: i64,
        parallel_cells: i64,
        slanted: bool,
    ) -> Self {
        Self {
            cell_type,
            diameter_adjustment,
            series_cells,
            parallel_cells,
            slanted,
        }
    }

    /// Validated `(columns, rows)`.
    ///
    /// Both counts must be at least one and their product at most
    /// [`MAX_CELLS`].
    pub fn grid_size(&self) -> LayoutResult<(usize, usize)> {
        let invalid = || LayoutError::InvalidGridSize {
            series: self.series_cells,
            parallel: self.parallel_cells,
        };
        if self.series_cells < 1 || self.parallel_cells < 1 {
            return Err(invalid());
        }
        let series = usize::try_from(self.series_cells).map_err(|_| invalid())?;
        let parallel = usize::try_from(self.parallel_cells).map_err(|_| invalid())?;
        match series.checked_mul(parallel) {
            Some(cells) if cells <= MAX_CELLS => Ok((series, parallel)),
            _ => Err(invalid()),
        }
    }

    /// Effective cell diameter: nominal plus adjustment.
    pub fn cell_diameter(&self) -> LayoutResult<f64> {
        if !self.diameter_adjustment.is_finite() {
            return Err(LayoutError::NonFiniteAdjustment(self.diameter_adjustment));
        }
        let nominal = self.cell_type.dimensions().diameter;
        let diameter = nominal + self.diameter_adjustment;
        if diameter <= 0.0 {
            return Err(LayoutError::InvalidDiameter {
                diameter,
                nominal,
                adjustment: self.diameter_adjustment,
            });
        }
        Ok(diameter)
    }
}

impl Default for ParameterRecord {
    fn default() -> Self {
        Self {
            cell_type: CellType::Large,
            diameter_adjustment: 0.2,
            series_cells: 4,
            parallel_cells: 5,
            slanted: true,
        }
    }
}
