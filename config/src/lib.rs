//! # Config Crate
//!
//! Centralized geometry constants for the battery spacer generator.
//! Every dimension the planner and the emitter rely on is defined here so the
//! values can be tuned in one place without touching either algorithm.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CELL_PITCH, HEX_ROW_FACTOR, SpacerConfig};
//!
//! let row_height = CELL_PITCH * HEX_ROW_FACTOR;
//! assert!(row_height < CELL_PITCH);
//!
//! let cfg = SpacerConfig::default();
//! assert_eq!(cfg.pitch, CELL_PITCH);
//! ```
//!
//! ## Categories
//!
//! - **Cells**: nominal diameter and height of each supported cell format
//! - **Grid**: pitch, hexagonal row factor and body padding
//! - **Body**: plate thickness, corner radius and cavity cut allowances
//! - **Insulator**: ring diameters, thickness and seating depth
//! - **Output**: numeric precision, fragment count and default file names

pub mod constants;

#[cfg(test)]
mod tests;
