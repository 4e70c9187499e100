//! Cavity grid planning.
//!
//! [`plan`] turns a [`ParameterRecord`] into a [`ResolvedLayout`]: the body
//! bounding box plus one cavity center and one insulator placement per cell,
//! both in row-major order (row outer, column inner).

use crate::cell::CellType;
use crate::error::LayoutResult;
use crate::params::ParameterRecord;
use config::constants::SpacerConfig;
use glam::{DVec2, DVec3};
use serde::Serialize;
use tracing::debug;

/// Fully resolved spacer geometry, immutable once planned.
///
/// # Examples
/// ```
/// use spacer_layout::{plan, CellType, ParameterRecord};
/// let layout = plan(&ParameterRecord::new(CellType::Small, 0.0, 3, 2, true)).unwrap();
/// assert_eq!(layout.cell_count(), 6);
/// assert_eq!(layout.grid_position(4), (1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLayout {
    cell_type: CellType,
    series_cells: usize,
    parallel_cells: usize,
    slanted: bool,
    cell_diameter: f64,
    cell_height: f64,
    row_height: f64,
    col_offset: f64,
    body_width: f64,
    body_height: f64,
    cavities: Vec<DVec2>,
    insulator_rings: Vec<DVec3>,
    config: SpacerConfig,
}

impl ResolvedLayout {
    /// Cell format the layout was planned for.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Grid columns.
    pub fn series_cells(&self) -> usize {
        self.series_cells
    }

    /// Grid rows.
    pub fn parallel_cells(&self) -> usize {
        self.parallel_cells
    }

    /// Whether alternate rows are offset.
    pub fn slanted(&self) -> bool {
        self.slanted
    }

    /// Cavity bore diameter (nominal plus adjustment).
    pub fn cell_diameter(&self) -> f64 {
        self.cell_diameter
    }

    /// Cavity bore radius.
    pub fn radius(&self) -> f64 {
        self.cell_diameter / 2.0
    }

    /// Nominal height of the selected cell.
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Distance between consecutive row centers.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Extra body width reserved for offset rows.
    pub fn col_offset(&self) -> f64 {
        self.col_offset
    }

    /// Body bounding width.
    pub fn body_width(&self) -> f64 {
        self.body_width
    }

    /// Body bounding height.
    pub fn body_height(&self) -> f64 {
        self.body_height
    }

    /// Cavity centers in row-major order.
    pub fn cavities(&self) -> &[DVec2] {
        &self.cavities
    }

    /// Insulator ring placements, index-aligned with [`Self::cavities`].
    pub fn insulator_rings(&self) -> &[DVec3] {
        &self.insulator_rings
    }

    /// Geometry constants the layout was planned with.
    pub fn config(&self) -> &SpacerConfig {
        &self.config
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.cavities.len()
    }

    /// `(row, column)` of the cavity at `index`.
    pub fn grid_position(&self, index: usize) -> (usize, usize) {
        (index / self.series_cells, index % self.series_cells)
    }

    /// Cavity center at a grid position, if it exists.
    pub fn cavity_at(&self, row: usize, col: usize) -> Option<DVec2> {
        if row >= self.parallel_cells || col >= self.series_cells {
            return None;
        }
        self.cavities.get(row * self.series_cells + col).copied()
    }
}

/// Plans a layout with the default geometry constants.
///
/// # Errors
///
/// - [`LayoutError::InvalidGridSize`](crate::LayoutError::InvalidGridSize) when
///   either count is below one
/// - [`LayoutError::InvalidDiameter`](crate::LayoutError::InvalidDiameter) when
///   the adjusted diameter is not positive
/// - [`LayoutError::NonFiniteAdjustment`](crate::LayoutError::NonFiniteAdjustment)
///   for a NaN or infinite adjustment
pub fn plan(params: &ParameterRecord) -> LayoutResult<ResolvedLayout> {
    plan_with(params, &SpacerConfig::default())
}

/// Plans a layout with an explicit constants snapshot.
pub fn plan_with(params: &ParameterRecord, config: &SpacerConfig) -> LayoutResult<ResolvedLayout> {
    config.validate()?;
    let (series, parallel) = params.grid_size()?;
    let diameter = params.cell_diameter()?;
    let radius = diameter / 2.0;
    let pitch = config.pitch;
    let padding = config.padding;
    let slanted = params.slanted;

    let row_height = if slanted {
        pitch * config.hex_row_factor
    } else {
        pitch
    };
    let col_offset = if slanted && parallel > 1 {
        pitch / 2.0
    } else {
        0.0
    };

    let body_width = (series - 1) as f64 * pitch + diameter + col_offset + 2.0 * padding;
    let body_height = (parallel - 1) as f64 * row_height + diameter + 2.0 * padding;

    let mut cavities = Vec::with_capacity(series * parallel);
    for row in 0..parallel {
        let row_offset = if slanted && row % 2 == 1 {
            pitch / 2.0
        } else {
            0.0
        };
        let y = row as f64 * row_height + radius + padding;
        for col in 0..series {
            let x = col as f64 * pitch + row_offset + radius + padding;
            cavities.push(DVec2::new(x, y));
        }
    }

    // Rings share the cavity sequence so both emission passes see identical coordinates.
    let insulator_rings = cavities
        .iter()
        .map(|center| center.extend(-config.insulator_depth))
        .collect();

    debug!(
        cell = %params.cell_type,
        series,
        parallel,
        slanted,
        diameter,
        body_width,
        body_height,
        "planned spacer layout"
    );

    Ok(ResolvedLayout {
        cell_type: params.cell_type,
        series_cells: series,
        parallel_cells: parallel,
        slanted,
        cell_diameter: diameter,
        cell_height: params.cell_type.dimensions().height,
        row_height,
        col_offset,
        body_width,
        body_height,
        cavities,
        insulator_rings,
        config: *config,
    })
}
