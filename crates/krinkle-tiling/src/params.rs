//! User-facing parameters and derivation of the symmetry order `n`.

use krinkle_core::constants::MAX_SYMMETRY_ORDER;
use krinkle_core::{GenerationError, TilingMode};
use serde::{Deserialize, Serialize};

/// Parameters as entered by the user.
///
/// `n` is not entered directly: it is derived from `k`, `m` and the
/// multiplier `t` (see [`TilingParams::symmetry_order`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilingParams {
    /// Modulus
    pub k: i64,
    /// Step
    pub m: i64,
    /// Symmetry multiplier
    pub t: i64,
    /// Wedge depth (wedge and tiling modes)
    pub rows: usize,
    /// Half-turn generation completed by point reflection
    pub offset: bool,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            k: 5,
            m: 2,
            t: 1,
            rows: 4,
            offset: false,
        }
    }
}

impl TilingParams {
    pub fn new(k: i64, m: i64, t: i64) -> Self {
        Self {
            k,
            m,
            t,
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_offset(mut self, offset: bool) -> Self {
        self.offset = offset;
        self
    }

    /// `k * t` normally, `2 * (t * k - m)` in offset mode.
    ///
    /// Fails with [`GenerationError::SymmetryOverflow`] when the product
    /// does not fit in an `i64`.
    pub fn symmetry_order(&self) -> Result<i64, GenerationError> {
        let kt = self.k.checked_mul(self.t);
        let n = if self.offset {
            kt.and_then(|kt| kt.checked_sub(self.m))
                .and_then(|d| d.checked_mul(2))
        } else {
            kt
        };
        n.ok_or(GenerationError::SymmetryOverflow {
            k: self.k,
            m: self.m,
            t: self.t,
        })
    }

    /// Check the parameters for `mode` and return the derived `n`.
    ///
    /// Only structurally impossible requests are rejected here; degenerate
    /// sequences (short periods, closure gaps) are left to the generator.
    pub fn validate(&self, mode: TilingMode) -> Result<i64, GenerationError> {
        if self.k < 1 {
            return Err(GenerationError::InvalidModulus { k: self.k });
        }
        if mode != TilingMode::Prototile && self.rows < 1 {
            return Err(GenerationError::InvalidRows {
                rows: self.rows as i64,
            });
        }
        let n = self.symmetry_order()?;
        if n < self.k {
            return Err(GenerationError::SymmetryTooSmall { n, k: self.k });
        }
        if n > MAX_SYMMETRY_ORDER {
            return Err(GenerationError::SymmetryTooLarge {
                n,
                max: MAX_SYMMETRY_ORDER,
            });
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetry_order_normal_mode() {
        assert_eq!(TilingParams::new(5, 2, 3).symmetry_order(), Ok(15));
    }

    #[test]
    fn test_symmetry_order_offset_mode() {
        let params = TilingParams::new(5, 2, 1).with_offset(true);
        assert_eq!(params.symmetry_order(), Ok(6));
    }

    #[test]
    fn test_validate_rejects_small_n() {
        let params = TilingParams::new(4, 2, 0);
        assert_eq!(
            params.validate(TilingMode::Prototile),
            Err(GenerationError::SymmetryTooSmall { n: 0, k: 4 })
        );

        let offset = TilingParams::new(5, 4, 1).with_offset(true);
        assert_eq!(
            offset.validate(TilingMode::Tiling),
            Err(GenerationError::SymmetryTooSmall { n: 2, k: 5 })
        );
    }

    #[test]
    fn test_validate_rows_only_outside_prototile() {
        let params = TilingParams::new(4, 1, 1).with_rows(0);
        assert_eq!(params.validate(TilingMode::Prototile), Ok(4));
        assert_eq!(
            params.validate(TilingMode::Wedge),
            Err(GenerationError::InvalidRows { rows: 0 })
        );
    }

    #[test]
    fn test_validate_modulus() {
        assert_eq!(
            TilingParams::new(0, 1, 1).validate(TilingMode::Prototile),
            Err(GenerationError::InvalidModulus { k: 0 })
        );
    }

    #[test]
    fn test_huge_multiplier_is_rejected_not_wrapped() {
        let params = TilingParams::new(3, 1, i64::MAX);
        assert_eq!(
            params.validate(TilingMode::Prototile),
            Err(GenerationError::SymmetryOverflow {
                k: 3,
                m: 1,
                t: i64::MAX
            })
        );

        // t*k fits, doubling does not
        let offset = TilingParams::new(2, 1, i64::MAX / 2).with_offset(true);
        assert!(matches!(
            offset.validate(TilingMode::Tiling),
            Err(GenerationError::SymmetryOverflow { .. })
        ));

        let negative = TilingParams::new(2, 1, i64::MIN);
        assert!(negative.symmetry_order().is_err());
    }

    #[test]
    fn test_symmetry_order_ceiling() {
        let at_limit = TilingParams::new(MAX_SYMMETRY_ORDER, 1, 1);
        assert_eq!(at_limit.validate(TilingMode::Prototile), Ok(MAX_SYMMETRY_ORDER));

        let huge_k = TilingParams::new(i64::MAX / 2, 1, 1);
        assert_eq!(
            huge_k.validate(TilingMode::Prototile),
            Err(GenerationError::SymmetryTooLarge {
                n: i64::MAX / 2,
                max: MAX_SYMMETRY_ORDER
            })
        );
    }
}
