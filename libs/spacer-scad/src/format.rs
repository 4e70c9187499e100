//! Fixed-precision number formatting for emitted OpenSCAD.

use config::constants::DECIMAL_PLACES;
use glam::{DVec2, DVec3};

/// Formats a number with [`DECIMAL_PLACES`] decimals.
///
/// Values that round to zero are printed unsigned so `-0.0` never leaks into
/// the document.
///
/// # Examples
/// ```
/// use spacer_scad::format::number;
/// assert_eq!(number(14.75), "14.750");
/// assert_eq!(number(-0.0), "0.000");
/// assert_eq!(number(-1.0), "-1.000");
/// ```
pub fn number(value: f64) -> String {
    let text = format!("{value:.prec$}", prec = DECIMAL_PLACES);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// `[x, y]`
pub fn vec2(value: DVec2) -> String {
    format!("[{}, {}]", number(value.x), number(value.y))
}

/// `[x, y, z]`
pub fn vec3(value: DVec3) -> String {
    format!(
        "[{}, {}, {}]",
        number(value.x),
        number(value.y),
        number(value.z)
    )
}
