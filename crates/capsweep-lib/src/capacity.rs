//! Closed-form capacity formula.
//!
//! For a parameter `P` (bits) and block size `b` (bits):
//!
//! ```text
//! q = P / b
//! Y = (C / P) * (floor(L + q * (log2(q) - L)) - M) / (8 * 1024^3)
//! ```
//!
//! where `L = log2(e)`, `C` is the total capacity in bits and `M` the fixed
//! offset. `Y` is reported in GB.
//!
//! None of these functions validate their inputs. Non-positive sizes yield NaN
//! or infinite values, which callers write through unchanged.

use std::f64::consts::LOG2_E;

use crate::constants::{BITS_PER_GB, BITS_PER_KB};

/// Convert bits to kilobytes.
pub fn bits_to_kb(bits: f64) -> f64 {
    bits * (1.0 / BITS_PER_KB)
}

/// Convert bits to gigabytes.
pub fn bits_to_gb(bits: f64) -> f64 {
    bits * (1.0 / BITS_PER_GB)
}

/// Ratio `q` of the swept parameter to a block size.
pub fn block_ratio(p_bits: f64, block_bits: f64) -> f64 {
    p_bits / block_bits
}

/// `floor(log2(e) + q * (log2(q) - log2(e)))`.
///
/// Rounds toward negative infinity, not toward zero.
pub fn floored_log_term(q: f64) -> f64 {
    (LOG2_E + q * (q.log2() - LOG2_E)).floor()
}

/// Evaluate the capacity formula at one sample point, in GB.
///
/// The ratio `C / P` always uses the swept parameter, never the block size.
///
/// # Examples
/// ```
/// use capsweep_lib::capacity::capacity_gb;
/// use capsweep_lib::constants::{CAPACITY_OFFSET, TOTAL_CAPACITY_BITS};
///
/// // 1 KB with 128-bit blocks: q = 64, floor(...) = 293, 293 - 56 = 237.
/// let y = capacity_gb(8192.0, 128.0, TOTAL_CAPACITY_BITS, CAPACITY_OFFSET);
/// assert_eq!(y, 237.0 / 16.0);
/// ```
pub fn capacity_gb(p_bits: f64, block_bits: f64, total_capacity_bits: f64, offset: f64) -> f64 {
    let q = block_ratio(p_bits, block_bits);
    let scale = total_capacity_bits / p_bits;
    bits_to_gb(scale * (floored_log_term(q) - offset))
}

/// Evaluate [`capacity_gb`] for every point of a sweep.
pub fn capacity_series<'a>(
    points: &'a [f64],
    block_bits: f64,
    total_capacity_bits: f64,
    offset: f64,
) -> impl Iterator<Item = f64> + 'a {
    points
        .iter()
        .map(move |&p| capacity_gb(p, block_bits, total_capacity_bits, offset))
}
