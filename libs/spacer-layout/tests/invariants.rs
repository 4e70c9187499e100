//! Property-based tests for layout invariants using the `proptest` crate.

use proptest::prelude::*;

use spacer_layout::{plan, CellType, ParameterRecord};

const PITCH: f64 = 22.4;
const PADDING: f64 = 4.0;
const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_cell() -> impl Strategy<Value = CellType> {
    prop_oneof![Just(CellType::Small), Just(CellType::Large)]
}

/// Valid parameter records: small grids, adjustments either side of nominal.
fn arb_params() -> impl Strategy<Value = ParameterRecord> {
    (arb_cell(), -2.0f64..2.0, 1i64..12, 1i64..12, any::<bool>()).prop_map(
        |(cell, adjust, series, parallel, slanted)| {
            ParameterRecord::new(cell, adjust, series, parallel, slanted)
        },
    )
}

proptest! {
    #[test]
    fn planning_is_deterministic(params in arb_params()) {
        let first = plan(&params).unwrap();
        let second = plan(&params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_cavity_and_ring_per_cell(params in arb_params()) {
        let layout = plan(&params).unwrap();
        let expected = (params.series_cells * params.parallel_cells) as usize;
        prop_assert_eq!(layout.cavities().len(), expected);
        prop_assert_eq!(layout.insulator_rings().len(), expected);
    }

    #[test]
    fn cavities_are_row_major(params in arb_params()) {
        let layout = plan(&params).unwrap();
        let series = params.series_cells as usize;
        for (index, cavity) in layout.cavities().iter().enumerate() {
            let row = index / series;
            let col = index % series;
            let offset = if params.slanted && row % 2 == 1 { PITCH / 2.0 } else { 0.0 };
            let x = col as f64 * PITCH + offset + layout.radius() + PADDING;
            let y = row as f64 * layout.row_height() + layout.radius() + PADDING;
            prop_assert!((cavity.x - x).abs() < TOL);
            prop_assert!((cavity.y - y).abs() < TOL);
        }
    }

    #[test]
    fn straight_grid_uses_full_pitch(params in arb_params()) {
        let params = ParameterRecord { slanted: false, ..params };
        let layout = plan(&params).unwrap();
        let series = layout.series_cells();
        for (index, pair) in layout.cavities().windows(2).enumerate() {
            if (index + 1) % series != 0 {
                prop_assert!((pair[1].x - pair[0].x - PITCH).abs() < TOL);
                prop_assert_eq!(pair[1].y, pair[0].y);
            }
        }
        for row in 1..layout.parallel_cells() {
            let above = layout.cavity_at(row - 1, 0).unwrap();
            let below = layout.cavity_at(row, 0).unwrap();
            prop_assert!((below.y - above.y - PITCH).abs() < TOL);
        }
    }

    #[test]
    fn slanted_odd_rows_shift_half_pitch(params in arb_params()) {
        let params = ParameterRecord { slanted: true, ..params };
        let layout = plan(&params).unwrap();
        for row in (1..layout.parallel_cells()).step_by(2) {
            for col in 0..layout.series_cells() {
                let even = layout.cavity_at(row - 1, col).unwrap();
                let odd = layout.cavity_at(row, col).unwrap();
                prop_assert!((odd.x - even.x - PITCH / 2.0).abs() < TOL);
            }
        }
    }

    #[test]
    fn cavities_stay_inside_body(params in arb_params()) {
        let layout = plan(&params).unwrap();
        let inset = layout.radius() + PADDING;
        for cavity in layout.cavities() {
            prop_assert!(cavity.x >= inset - TOL);
            prop_assert!(cavity.x <= layout.body_width() - inset + TOL);
            prop_assert!(cavity.y >= inset - TOL);
            prop_assert!(cavity.y <= layout.body_height() - inset + TOL);
        }
    }

    #[test]
    fn non_positive_counts_never_plan(
        params in arb_params(),
        bad in -5i64..=0,
        pick_series in any::<bool>(),
    ) {
        let params = if pick_series {
            ParameterRecord { series_cells: bad, ..params }
        } else {
            ParameterRecord { parallel_cells: bad, ..params }
        };
        prop_assert!(plan(&params).is_err());
    }
}
