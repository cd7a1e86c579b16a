use capsweep_lib::constants::{SWEEP_END_BITS, SWEEP_START_BITS};
use capsweep_lib::{compute_table, linspace, CapacityRow, SweepConfig};

fn relative_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= expected.abs() * 1e-9
}

#[test]
fn sweep_has_expected_cardinality_and_bounds() {
    let config = SweepConfig::default();
    let sweep = linspace(config.start_bits, config.end_bits, config.samples);

    assert_eq!(sweep.len(), 400);
    assert!(relative_eq(sweep.points()[0], SWEEP_START_BITS));
    assert!(relative_eq(sweep.points()[399], SWEEP_END_BITS));
}

#[test]
fn table_has_origin_plus_one_row_per_point() {
    let table = compute_table(&SweepConfig::default());
    assert_eq!(table.len(), 401);
    assert_eq!(table.rows()[0], CapacityRow::ORIGIN);
}

#[test]
fn parameter_column_strictly_increases() {
    let table = compute_table(&SweepConfig::default());
    for pair in table.sweep_rows().windows(2) {
        assert!(pair[1].p_kb > pair[0].p_kb);
    }
}

#[test]
fn parameter_column_is_bits_over_8192() {
    let config = SweepConfig::default();
    let sweep = linspace(config.start_bits, config.end_bits, config.samples);
    let table = compute_table(&config);

    for (row, bits) in table.sweep_rows().iter().zip(sweep.iter()) {
        assert!(relative_eq(row.p_kb, bits / 8192.0));
    }
    assert_eq!(table.sweep_rows()[0].p_kb, 1.0);
    assert_eq!(table.sweep_rows()[399].p_kb, 64.0);
}

#[test]
fn first_point_matches_golden_values() {
    let table = compute_table(&SweepConfig::default());
    let first = table.sweep_rows()[0];

    // q = 64: floor(log2(e) + 64 * (6 - log2(e))) = 293, minus 56 = 237, scaled by 2^29 / 2^33.
    assert!(relative_eq(first.y_b1, 14.8125));
    // q = 32: floor term 115, minus 56 = 59.
    assert!(relative_eq(first.y_b2, 3.6875));
}

#[test]
fn last_point_matches_golden_values() {
    let table = compute_table(&SweepConfig::default());
    let last = table.sweep_rows()[399];

    assert!(relative_eq(last.y_b1, 43188.0 / 1024.0));
    assert!(relative_eq(last.y_b2, 19518.0 / 1024.0));
}

#[test]
fn larger_block_size_yields_smaller_capacity() {
    let table = compute_table(&SweepConfig::default());
    for row in table.sweep_rows() {
        assert!(row.y_b2 < row.y_b1);
    }
}

#[test]
fn offset_shifts_every_point() {
    let base = compute_table(&SweepConfig::default());
    let shifted = compute_table(&SweepConfig {
        offset: 0.0,
        ..SweepConfig::default()
    });

    let config = SweepConfig::default();
    let sweep = linspace(config.start_bits, config.end_bits, config.samples);
    for ((a, b), p_bits) in base
        .sweep_rows()
        .iter()
        .zip(shifted.sweep_rows())
        .zip(sweep.iter())
    {
        let delta = 56.0 * (config.total_capacity_bits / p_bits) / (8.0 * 1024.0_f64.powi(3));
        assert!(relative_eq(b.y_b1 - a.y_b1, delta));
    }
}
