//! Parameter grid generation.

use tracing::debug;

/// Ordered, immutable sequence of sample points in bits.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    points: Vec<f64>,
}

impl Sweep {
    /// Sample points in ascending index order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

/// Generate `samples` evenly spaced points over the closed interval `[start, end]`.
///
/// Points are computed as `start + i * step` with the last point pinned to
/// `end`, so both endpoints are exact. `samples == 0` yields an empty sweep
/// and `samples == 1` yields `[start]`.
///
/// # Examples
/// ```
/// use capsweep_lib::linspace;
///
/// let sweep = linspace(0.0, 1.0, 5);
/// assert_eq!(sweep.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, samples: usize) -> Sweep {
    let points = match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = end;
            points
        }
    };

    debug!(samples, start, end, "generated sweep");
    Sweep { points }
}
