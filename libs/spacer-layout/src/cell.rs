//! Supported cell formats and their nominal dimensions.

use crate::error::LayoutError;
use config::constants::{
    LARGE_CELL_DIAMETER, LARGE_CELL_HEIGHT, SMALL_CELL_DIAMETER, SMALL_CELL_HEIGHT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nominal size of a cylindrical cell in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDimensions {
    /// Nominal diameter.
    pub diameter: f64,
    /// Nominal height.
    pub height: f64,
}

/// Closed set of supported cell formats.
///
/// Parsing accepts the format code (`"18650"`, `"21700"`) or the size word
/// (`"small"`, `"large"`). Anything else is [`LayoutError::InvalidCellType`].
///
/// # Examples
/// ```
/// use spacer_layout::CellType;
/// let cell: CellType = "21700".parse().unwrap();
/// assert_eq!(cell, CellType::Large);
/// assert_eq!(cell.dimensions().diameter, 21.3);
/// assert!("unknown".parse::<CellType>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CellType {
    /// 18650 cell.
    Small,
    /// 21700 cell.
    #[default]
    Large,
}

impl CellType {
    /// Every supported cell type, smallest first.
    pub const ALL: [CellType; 2] = [CellType::Small, CellType::Large];

    /// Nominal dimensions from the static cell table.
    pub const fn dimensions(self) -> CellDimensions {
        match self {
            CellType::Small => CellDimensions {
                diameter: SMALL_CELL_DIAMETER,
                height: SMALL_CELL_HEIGHT,
            },
            CellType::Large => CellDimensions {
                diameter: LARGE_CELL_DIAMETER,
                height: LARGE_CELL_HEIGHT,
            },
        }
    }

    /// Industry format code.
    pub const fn code(self) -> &'static str {
        match self {
            CellType::Small => "18650",
            CellType::Large => "21700",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CellType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "18650" | "small" => Ok(CellType::Small),
            "21700" | "large" => Ok(CellType::Large),
            _ => Err(LayoutError::InvalidCellType {
                selector: trimmed.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CellType {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CellType> for &'static str {
    fn from(cell: CellType) -> Self {
        cell.code()
    }
}
