//! Error handling for Krinkle
//!
//! Provides error types for the layers that can actually fail:
//! - Generation errors (parameter combinations rejected before generation)
//! - Mode errors (unrecognized mode names from callers or configuration)
//!
//! Numerically degenerate geometry is *not* an error. Short periods and
//! closure gaps travel as polygon metadata instead.
//!
//! Both types use `thiserror`; callers wrap them with `anyhow` context.

use thiserror::Error;

/// Generation error type
///
/// Raised by parameter validation in front of the generator. The generator
/// functions themselves never fail for well-typed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Derived symmetry order is smaller than the modulus
    #[error("Error: n (k*t) must be >= k (n = {n}, k = {k})")]
    SymmetryTooSmall {
        /// The derived symmetry order.
        n: i64,
        /// The modulus.
        k: i64,
    },

    /// Modulus must be at least one
    #[error("Invalid modulus k = {k}: must be >= 1")]
    InvalidModulus {
        /// The rejected modulus.
        k: i64,
    },

    /// `k * t` (or `2 * (t*k - m)`) does not fit in an `i64`
    #[error("Symmetry order overflows for k = {k}, m = {m}, t = {t}")]
    SymmetryOverflow {
        /// The modulus.
        k: i64,
        /// The step.
        m: i64,
        /// The multiplier.
        t: i64,
    },

    /// Derived symmetry order is past what the generator will lay out
    #[error("Symmetry order n = {n} exceeds the supported maximum {max}")]
    SymmetryTooLarge {
        /// The derived symmetry order.
        n: i64,
        /// The configured ceiling.
        max: i64,
    },

    /// Wedge depth must be at least one
    #[error("Invalid wedge depth rows = {rows}: must be >= 1")]
    InvalidRows {
        /// The rejected row count.
        rows: i64,
    },
}

/// Mode error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// The mode name is not one of `prototile`, `wedge`, `tiling`
    #[error("Unsupported mode: {mode}")]
    Unsupported {
        /// The rejected mode name.
        mode: String,
    },
}
