//! Remainder direction sequences for the lower and upper prototile boundaries.

use serde::{Deserialize, Serialize};

/// Lower/upper boundary direction indices for parameters `(m, k)`.
///
/// Full period:
/// - lower: `(j * m) % k` for `j` in `0..k`, then the terminal `k`
/// - upper: `k`, then `(j * m) % k` for `j` in `1..k`, then the terminal `0`
///
/// When a non-initial term hits zero before the period completes, the
/// sequence stops there (the terminal is still appended) and
/// `has_short_period` is raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSequences {
    pub lower: Vec<i64>,
    pub upper: Vec<i64>,
    pub has_short_period: bool,
}

impl DirectionSequences {
    /// Build both sequences. `k` must be at least 1.
    pub fn build(m: i64, k: i64) -> Self {
        debug_assert!(k >= 1, "modulus must be positive");
        let step = i128::from(m % k);
        let modulus = i128::from(k);
        // |j * step % k| < k, so narrowing back is lossless
        let term = |j: i64| (i128::from(j) * step % modulus) as i64;
        let mut has_short_period = false;

        let mut lower = Vec::new();
        for j in 0..k {
            let d = term(j);
            if j > 0 && d == 0 {
                has_short_period = true;
                break;
            }
            lower.push(d);
        }
        lower.push(k);

        let mut upper = Vec::new();
        upper.push(k);
        for j in 1..k {
            let d = term(j);
            if d == 0 {
                has_short_period = true;
                break;
            }
            upper.push(d);
        }
        upper.push(0);

        Self {
            lower,
            upper,
            has_short_period,
        }
    }

    /// Lower boundary steps without the terminal entry.
    pub fn lower_steps(&self) -> &[i64] {
        &self.lower[..self.lower.len() - 1]
    }

    /// Upper boundary steps without the terminal entry.
    pub fn upper_steps(&self) -> &[i64] {
        &self.upper[..self.upper.len() - 1]
    }
}
