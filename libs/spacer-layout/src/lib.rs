//! # Spacer Layout
//!
//! Pure geometry planning for a battery spacer: a rounded-rectangle plate
//! with one cylindrical cavity per cell, laid out either as an orthogonal
//! grid or with alternate rows shifted by half a pitch.
//!
//! ## Architecture
//!
//! ```text
//! ParameterRecord → plan() → ResolvedLayout → (spacer-scad) emit()
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spacer_layout::{plan, CellType, ParameterRecord};
//!
//! let params = ParameterRecord::new(CellType::Large, 0.2, 2, 1, false);
//! let layout = plan(&params).unwrap();
//! assert_eq!(layout.cavities().len(), 2);
//! assert!((layout.body_width() - 51.9).abs() < 1e-9);
//! ```
//!
//! ## Design Principles
//!
//! - **No I/O**: planning is a pure function of its input
//! - **Deterministic**: identical records give bit-identical layouts
//! - **Explicit errors**: degenerate grids and diameters are rejected

pub mod cell;
pub mod error;
pub mod layout;
pub mod params;

pub use cell::{CellDimensions, CellType};
pub use error::{LayoutError, LayoutResult};
pub use layout::{plan, plan_with, ResolvedLayout};
pub use params::ParameterRecord;
