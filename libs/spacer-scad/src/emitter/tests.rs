//! Emitter tests: exact output for a small grid plus structural checks.

use super::*;
use spacer_layout::{plan, CellType, ParameterRecord};

fn layout(series: i64, parallel: i64, slanted: bool) -> ResolvedLayout {
    plan(&ParameterRecord::new(
        CellType::Large,
        0.2,
        series,
        parallel,
        slanted,
    ))
    .unwrap()
}

/// 21700, +0.2 mm, 2S1P, straight: full document.
#[test]
fn straight_two_by_one_document() {
    let expected = "\
// Battery Spacer with Flush Insulator Rings
module cell_hole() {
    cylinder(h=14.000, d=21.500, $fn=100);
}

module cell_insulator() {
    difference() {
        cylinder(h=0.400, d=22.000, $fn=100);
        cylinder(h=0.400, d=12.900, $fn=100);
    }
}

module rounded_spacer_body() {
    offset(r=8.000)
        offset(delta=-8.000)
            square([51.900, 29.500], center=false);
}
difference() {
    linear_extrude(height=12.000) rounded_spacer_body();
    translate([14.750, 14.750, -1.000]) cell_hole();
    translate([37.150, 14.750, -1.000]) cell_hole();
}
translate([14.750, 14.750, 0.000]) cell_insulator();
translate([37.150, 14.750, 0.000]) cell_insulator();";

    assert_eq!(render_document(&layout(2, 1, false)), expected);
}

#[test]
fn slanted_rows_are_shifted_in_output() {
    let lines = emit(&layout(2, 2, true));
    assert!(lines.contains(&"            square([63.100, 48.898], center=false);".to_string()));
    assert!(lines.contains(&"    translate([25.950, 34.148, -1.000]) cell_hole();".to_string()));
    assert!(lines.contains(&"translate([48.350, 34.148, 0.000]) cell_insulator();".to_string()));
}

#[test]
fn one_cut_and_one_ring_per_cell() {
    let lines = emit(&layout(4, 5, true));
    let cuts = lines.iter().filter(|l| l.ends_with("cell_hole();")).count();
    let rings = lines.iter().filter(|l| l.ends_with("cell_insulator();")).count();
    assert_eq!(cuts, 20);
    assert_eq!(rings, 20);
}

#[test]
fn rings_follow_closed_difference_block_in_cavity_order() {
    let layout = layout(3, 3, true);
    let lines = emit(&layout);

    let block_start = lines.iter().position(|l| l == "difference() {").unwrap();
    let block_end = block_start + lines[block_start..].iter().position(|l| l == "}").unwrap();

    let cuts: Vec<&String> = lines[block_start..block_end]
        .iter()
        .filter(|l| l.ends_with("cell_hole();"))
        .collect();
    let rings: Vec<&String> = lines[block_end..]
        .iter()
        .filter(|l| l.ends_with("cell_insulator();"))
        .collect();
    assert_eq!(rings.len(), lines[block_end + 1..].len());

    for (index, (cut, ring)) in cuts.iter().zip(&rings).enumerate() {
        let cavity = layout.cavities()[index];
        let xy = format!("[{}, {}, ", number(cavity.x), number(cavity.y));
        assert!(cut.contains(&xy), "cut {index} out of order: {cut}");
        assert!(ring.starts_with(&format!("translate({xy}")), "ring {index}: {ring}");
    }
}

/// Every bracket opened is closed and every statement line is terminated.
#[test]
fn document_is_structurally_balanced() {
    let text = render_document(&layout(5, 4, true));
    let mut braces = 0i32;
    let mut brackets = 0i32;
    let mut parens = 0i32;
    for ch in text.chars() {
        match ch {
            '{' => braces += 1,
            '}' => braces -= 1,
            '[' => brackets += 1,
            ']' => brackets -= 1,
            '(' => parens += 1,
            ')' => parens -= 1,
            _ => {}
        }
        assert!(braces >= 0 && brackets >= 0 && parens >= 0);
    }
    assert_eq!((braces, brackets, parens), (0, 0, 0));

    for line in text.lines().skip(1) {
        let line = line.trim();
        let terminated = line.is_empty()
            || line.ends_with(';')
            || line.ends_with('{')
            || line.ends_with('}')
            || line.starts_with("offset(");
        assert!(terminated, "unterminated statement: {line}");
    }
}

#[test]
fn every_number_has_three_decimals() {
    let text = render_document(&layout(3, 2, true));
    for token in text.split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-')) {
        if let Some((_, decimals)) = token.split_once('.') {
            assert_eq!(decimals.len(), 3, "bad number {token}");
        }
    }
}

#[test]
fn emission_is_deterministic() {
    let a = emit(&layout(6, 3, true));
    let b = emit(&layout(6, 3, true));
    assert_eq!(a, b);
}

#[test]
fn cavity_bore_tracks_adjustment() {
    let tight = plan(&ParameterRecord::new(CellType::Small, -0.1, 1, 1, false)).unwrap();
    let lines = emit(&tight);
    assert_eq!(lines[2], "    cylinder(h=14.000, d=18.500, $fn=100);");
}
