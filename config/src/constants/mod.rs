//! Geometry constants shared by the layout planner and the document emitter.
//!
//! The free constants are the single source of truth; [`SpacerConfig`] is an
//! immutable snapshot of them that travels with a computed layout so the
//! emitter never has to reach back into this module.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CELL CONSTANTS
// =============================================================================

/// Nominal diameter of an 18650 cell in millimetres.
pub const SMALL_CELL_DIAMETER: f64 = 18.6;

/// Nominal height of an 18650 cell in millimetres.
pub const SMALL_CELL_HEIGHT: f64 = 65.0;

/// Nominal diameter of a 21700 cell in millimetres.
pub const LARGE_CELL_DIAMETER: f64 = 21.3;

/// Nominal height of a 21700 cell in millimetres.
pub const LARGE_CELL_HEIGHT: f64 = 70.0;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Center-to-center spacing between neighbouring cells in one row.
///
/// # Examples
/// ```
/// use config::constants::{CELL_PITCH, LARGE_CELL_DIAMETER};
/// assert!(CELL_PITCH > LARGE_CELL_DIAMETER);
/// ```
pub const CELL_PITCH: f64 = 22.4;

/// Row spacing factor for the slanted (hexagonal) layout.
///
/// Approximates `sin(60°)`; rows sit `CELL_PITCH * HEX_ROW_FACTOR` apart.
pub const HEX_ROW_FACTOR: f64 = 0.866;

/// Margin between the outermost cavity wall and the body edge.
pub const BODY_PADDING: f64 = 4.0;

// =============================================================================
// BODY CONSTANTS
// =============================================================================

/// Thickness of the extruded spacer plate.
pub const SPACER_THICKNESS: f64 = 12.0;

/// Radius of the rounded body corners.
pub const CORNER_RADIUS: f64 = 8.0;

/// Extra cavity height so the cut clears both faces of the plate.
pub const CAVITY_EXTRA_HEIGHT: f64 = 2.0;

/// Z offset applied to every cavity cut.
///
/// # Examples
/// ```
/// use config::constants::{CAVITY_EXTRA_HEIGHT, CAVITY_Z_OFFSET};
/// // The cut starts below the bottom face and ends above the top face.
/// assert!(CAVITY_Z_OFFSET < 0.0);
/// assert!(CAVITY_EXTRA_HEIGHT + CAVITY_Z_OFFSET > 0.0);
/// ```
pub const CAVITY_Z_OFFSET: f64 = -1.0;

// =============================================================================
// INSULATOR CONSTANTS
// =============================================================================

/// Thickness of an insulator ring.
pub const INSULATOR_THICKNESS: f64 = 0.4;

/// Depth the insulator ring is sunk below the bottom face. Zero is flush.
pub const INSULATOR_DEPTH: f64 = 0.0;

/// Outer diameter of an insulator ring.
pub const INSULATOR_OUTER_DIAMETER: f64 = 22.0;

/// Inner diameter of an insulator ring.
pub const INSULATOR_INNER_DIAMETER: f64 = 12.9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of cells in one spacer.
///
/// Larger grids are rejected before any coordinates are allocated.
///
/// # Examples
/// ```
/// use config::constants::MAX_CELLS;
/// assert!(MAX_CELLS >= 1_000);
/// ```
pub const MAX_CELLS: usize = 1_000_000;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// `$fn` used for every emitted cylinder.
pub const CIRCLE_FRAGMENTS: u32 = 100;

/// Number of decimals every emitted number is rendered with.
pub const DECIMAL_PLACES: usize = 3;

/// Default path of the emitted OpenSCAD document.
pub const DEFAULT_DOCUMENT_PATH: &str = "battery_spacer.scad";

/// Default path of the rendered mesh.
pub const DEFAULT_MESH_PATH: &str = "battery_spacer.stl";

/// Executable name of the external renderer looked up on `PATH`.
///
/// # Examples
/// ```
/// use config::constants::RENDERER_EXECUTABLE;
/// assert!(RENDERER_EXECUTABLE.starts_with("openscad"));
/// ```
pub const RENDERER_EXECUTABLE: &str = if cfg!(windows) {
    "openscad.exe"
} else {
    "openscad"
};

/// Immutable snapshot of the geometry constants used for one layout.
///
/// # Examples
/// ```
/// use config::constants::SpacerConfig;
/// let config = SpacerConfig::default();
/// assert!(config.validate().is_ok());
/// assert!(config.insulator_inner_diameter < config.insulator_outer_diameter);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacerConfig {
    /// Cell pitch within a row.
    pub pitch: f64,
    /// Row spacing factor applied in slanted layouts.
    pub hex_row_factor: f64,
    /// Margin around the cavity grid.
    pub padding: f64,
    /// Plate thickness.
    pub thickness: f64,
    /// Body corner radius.
    pub corner_radius: f64,
    /// Extra height added to each cavity cylinder.
    pub cavity_extra_height: f64,
    /// Z offset of each cavity cut.
    pub cavity_z_offset: f64,
    /// Insulator ring thickness.
    pub insulator_thickness: f64,
    /// Insulator ring depth below the bottom face.
    pub insulator_depth: f64,
    /// Insulator ring outer diameter.
    pub insulator_outer_diameter: f64,
    /// Insulator ring inner diameter.
    pub insulator_inner_diameter: f64,
    /// `$fn` for emitted cylinders.
    pub circle_fragments: u32,
}

impl SpacerConfig {
    /// Checks the snapshot describes a buildable spacer.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, SpacerConfig};
    /// let cfg = SpacerConfig { pitch: 0.0, ..SpacerConfig::default() };
    /// assert_eq!(cfg.validate(), Err(ConfigError::NonPositive { name: "pitch", value: 0.0 }));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("pitch", self.pitch),
            ("hex_row_factor", self.hex_row_factor),
            ("thickness", self.thickness),
            ("insulator_thickness", self.insulator_thickness),
            ("insulator_outer_diameter", self.insulator_outer_diameter),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let non_negative = [
            ("padding", self.padding),
            ("corner_radius", self.corner_radius),
            ("cavity_extra_height", self.cavity_extra_height),
            ("insulator_depth", self.insulator_depth),
            ("insulator_inner_diameter", self.insulator_inner_diameter),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.insulator_inner_diameter >= self.insulator_outer_diameter {
            return Err(ConfigError::InsulatorBore {
                inner: self.insulator_inner_diameter,
                outer: self.insulator_outer_diameter,
            });
        }
        if self.circle_fragments < 3 {
            return Err(ConfigError::InvalidFragments(self.circle_fragments));
        }
        Ok(())
    }
}

impl Default for SpacerConfig {
    fn default() -> Self {
        Self {
            pitch: CELL_PITCH,
            hex_row_factor: HEX_ROW_FACTOR,
            padding: BODY_PADDING,
            thickness: SPACER_THICKNESS,
            corner_radius: CORNER_RADIUS,
            cavity_extra_height: CAVITY_EXTRA_HEIGHT,
            cavity_z_offset: CAVITY_Z_OFFSET,
            insulator_thickness: INSULATOR_THICKNESS,
            insulator_depth: INSULATOR_DEPTH,
            insulator_outer_diameter: INSULATOR_OUTER_DIAMETER,
            insulator_inner_diameter: INSULATOR_INNER_DIAMETER,
            circle_fragments: CIRCLE_FRAGMENTS,
        }
    }
}

/// Error returned when a [`SpacerConfig`] cannot describe a spacer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension that must be strictly positive is zero, negative or not finite.
    NonPositive { name: &'static str, value: f64 },
    /// A dimension that may be zero is negative or not finite.
    Negative { name: &'static str, value: f64 },
    /// The insulator bore does not fit inside its outer diameter.
    InsulatorBore { inner: f64, outer: f64 },
    /// Too few fragments to form a polygon.
    InvalidFragments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be positive: {value}")
            }
            ConfigError::Negative { name, value } => {
                write!(f, "{name} must not be negative: {value}")
            }
            ConfigError::InsulatorBore { inner, outer } => {
                write!(f, "insulator inner diameter {inner} must be below outer diameter {outer}")
            }
            ConfigError::InvalidFragments(value) => {
                write!(f, "circle_fragments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
