//! # Spacer SCAD
//!
//! Turns a [`ResolvedLayout`](spacer_layout::ResolvedLayout) into an OpenSCAD
//! document, writes it, and optionally asks an external `openscad` binary to
//! export a mesh.
//!
//! ## Architecture
//!
//! ```text
//! ResolvedLayout → emit() → lines → write_document() → .scad
//!                                                     ↓
//!                                   MeshRenderer::render() → .stl
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spacer_layout::{plan, CellType, ParameterRecord};
//! use spacer_scad::emit;
//!
//! let layout = plan(&ParameterRecord::new(CellType::Large, 0.2, 2, 1, false)).unwrap();
//! let lines = emit(&layout);
//! assert_eq!(lines[0], "// Battery Spacer with Flush Insulator Rings");
//! assert!(lines.contains(&"    translate([37.150, 14.750, -1.000]) cell_hole();".to_string()));
//! ```
//!
//! ## Error Policy
//!
//! - Emission never fails
//! - Layout and write failures abort the request before any render
//! - Render failures are warnings: the document on disk stays valid

pub mod emitter;
pub mod error;
pub mod format;
pub mod generate;
pub mod render;
pub mod writer;

pub use emitter::{emit, render_document};
pub use error::{GenerateError, GenerateResult, RenderError};
pub use generate::{generate, GenerationReport, GenerationRequest};
pub use render::{MeshRenderer, OpenScadRenderer};
pub use writer::write_document;
