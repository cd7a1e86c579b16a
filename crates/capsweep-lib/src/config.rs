//! Sweep configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BLOCK_SIZE_1_BITS, BLOCK_SIZE_2_BITS, CAPACITY_OFFSET, SWEEP_END_BITS, SWEEP_SAMPLES,
    SWEEP_START_BITS, TOTAL_CAPACITY_BITS,
};

/// Parameters of a capacity sweep.
///
/// No validation is applied. Values outside the formula's domain (zero or
/// negative sizes) produce NaN or infinite entries in the resulting table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First sample point in bits (inclusive).
    pub start_bits: f64,
    /// Last sample point in bits (inclusive).
    pub end_bits: f64,
    /// Number of evenly spaced sample points.
    pub samples: usize,
    /// Total capacity `C` in bits.
    pub total_capacity_bits: f64,
    /// Block sizes in bits, one per output column.
    pub block_sizes_bits: [f64; 2],
    /// Offset `M` subtracted from the floored log term.
    pub offset: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_bits: SWEEP_START_BITS,
            end_bits: SWEEP_END_BITS,
            samples: SWEEP_SAMPLES,
            total_capacity_bits: TOTAL_CAPACITY_BITS,
            block_sizes_bits: [BLOCK_SIZE_1_BITS, BLOCK_SIZE_2_BITS],
            offset: CAPACITY_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_published_constants() {
        let config = SweepConfig::default();
        assert_eq!(config.start_bits, 8192.0);
        assert_eq!(config.end_bits, 524_288.0);
        assert_eq!(config.samples, 400);
        assert_eq!(config.total_capacity_bits, 4_398_046_511_104.0);
        assert_eq!(config.block_sizes_bits, [128.0, 256.0]);
        assert_eq!(config.offset, 56.0);
    }
}
