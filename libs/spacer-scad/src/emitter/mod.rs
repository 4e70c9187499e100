//! OpenSCAD emission for a resolved spacer layout.
//!
//! The document is laid out as:
//!
//! 1. a header comment
//! 2. the `cell_hole`, `cell_insulator` and `rounded_spacer_body` modules
//! 3. a `difference()` block cutting one `cell_hole` per cavity out of the
//!    extruded body
//! 4. one additive `cell_insulator` per ring, after the block closes
//!
//! Passes 3 and 4 walk the same planned coordinate sequence, in the same order.

use crate::format::{number, vec2, vec3};
use glam::DVec2;
use spacer_layout::ResolvedLayout;

/// First line of every document.
pub const HEADER: &str = "// Battery Spacer with Flush Insulator Rings";

const INDENT: &str = "    ";

/// Emits the document as individual lines, without trailing newlines.
pub fn emit(layout: &ResolvedLayout) -> Vec<String> {
    let mut lines = Vec::with_capacity(layout.cell_count() * 2 + 24);
    lines.push(HEADER.to_string());
    emit_modules(layout, &mut lines);
    emit_body(layout, &mut lines);
    emit_insulators(layout, &mut lines);
    lines
}

/// Emits the document joined with `\n`.
pub fn render_document(layout: &ResolvedLayout) -> String {
    emit(layout).join("\n")
}

fn emit_modules(layout: &ResolvedLayout, lines: &mut Vec<String>) {
    let cfg = layout.config();
    let fragments = cfg.circle_fragments;
    let corner = number(cfg.corner_radius);

    lines.push("module cell_hole() {".into());
    lines.push(format!(
        "{INDENT}cylinder(h={}, d={}, $fn={fragments});",
        number(cfg.thickness + cfg.cavity_extra_height),
        number(layout.cell_diameter()),
    ));
    lines.push("}".into());
    lines.push(String::new());

    let ring_height = number(cfg.insulator_thickness);
    lines.push("module cell_insulator() {".into());
    lines.push(format!("{INDENT}difference() {{"));
    lines.push(format!(
        "{INDENT}{INDENT}cylinder(h={ring_height}, d={}, $fn={fragments});",
        number(cfg.insulator_outer_diameter),
    ));
    lines.push(format!(
        "{INDENT}{INDENT}cylinder(h={ring_height}, d={}, $fn={fragments});",
        number(cfg.insulator_inner_diameter),
    ));
    lines.push(format!("{INDENT}}}"));
    lines.push("}".into());
    lines.push(String::new());

    // Shrink then grow by the same radius to round the square's corners.
    lines.push("module rounded_spacer_body() {".into());
    lines.push(format!("{INDENT}offset(r={corner})"));
    lines.push(format!("{INDENT}{INDENT}offset(delta=-{corner})"));
    lines.push(format!(
        "{INDENT}{INDENT}{INDENT}square({}, center=false);",
        vec2(DVec2::new(layout.body_width(), layout.body_height())),
    ));
    lines.push("}".into());
}

fn emit_body(layout: &ResolvedLayout, lines: &mut Vec<String>) {
    let cfg = layout.config();
    lines.push("difference() {".into());
    lines.push(format!(
        "{INDENT}linear_extrude(height={}) rounded_spacer_body();",
        number(cfg.thickness)
    ));
    for cavity in layout.cavities() {
        lines.push(format!(
            "{INDENT}translate({}) cell_hole();",
            vec3(cavity.extend(cfg.cavity_z_offset))
        ));
    }
    lines.push("}".into());
}

fn emit_insulators(layout: &ResolvedLayout, lines: &mut Vec<String>) {
    lines.extend(
        layout
            .insulator_rings()
            .iter()
            .map(|ring| format!("translate({}) cell_insulator();", vec3(*ring))),
    );
}

#[cfg(test)]
mod tests;
