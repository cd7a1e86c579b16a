//! Fixed constants for the capacity sweep.
//!
//! [`crate::SweepConfig::default`] is built from these values, so the default
//! export reproduces the published dataset exactly.

/// Total device capacity in bits (512 GiB).
pub const TOTAL_CAPACITY_BITS: f64 = 1.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0 * 8.0 / 2.0;

/// First block-size divisor in bits.
pub const BLOCK_SIZE_1_BITS: f64 = 128.0;
/// Second block-size divisor in bits.
pub const BLOCK_SIZE_2_BITS: f64 = 256.0;

/// Integer offset subtracted from the floored log term.
///
/// The physical meaning of this value is not documented; keep it exact.
pub const CAPACITY_OFFSET: f64 = 56.0;

/// Bits in one kilobyte (1024 bytes).
pub const BITS_PER_KB: f64 = 8.0 * 1024.0;
/// Bits in one gigabyte (1024^3 bytes).
pub const BITS_PER_GB: f64 = 8.0 * 1024.0 * 1024.0 * 1024.0;

/// Sweep lower bound in bits (1 KB).
pub const SWEEP_START_BITS: f64 = 1024.0 * 8.0;
/// Sweep upper bound in bits (64 KB), inclusive.
pub const SWEEP_END_BITS: f64 = 64.0 * 1024.0 * 8.0;
/// Number of sample points in the sweep.
pub const SWEEP_SAMPLES: usize = 400;

/// Location of the exported table, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "results/new_cap_data.csv";

/// Column names written as the first line of the exported table.
pub const CSV_HEADER: [&str; 3] = ["P_KB", "Y_b1", "Y_b2"];
