//! Prototile (wedge 0 base tile) construction.

use krinkle_core::constants::UNIT_LENGTH;
use tracing::{debug, error, warn};

use crate::geometry::{direction_vector, Point};
use crate::palette::{PROTOTILE_FILL, PROTOTILE_STROKE};
use crate::polygon::{TileMeta, TilePolygon};
use crate::sequence::DirectionSequences;

/// A constructed prototile together with the data later stages reuse.
#[derive(Debug, Clone)]
pub struct Prototile {
    pub m: i64,
    pub k: i64,
    pub n: i64,
    pub sequences: DirectionSequences,
    pub polygon: TilePolygon,
}

impl Prototile {
    /// Build the prototile for `(m, k, n)`.
    ///
    /// The path starts at the origin, walks every lower-boundary direction
    /// (terminal `k` included) to the tip, then subtracts the upper-boundary
    /// directions in reverse. Both sequences hold the same directions, so the
    /// final point returns to the origin and is kept: a full period gives
    /// `2k + 3` points.
    ///
    /// Returns `None` only when the input is degenerate before any point can
    /// be placed (`k <= 0` or `n <= 0`). `n < k` is reported but the
    /// construction still runs; the resulting geometry is the diagnostic.
    pub fn build(m: i64, k: i64, n: i64) -> Option<Self> {
        if k <= 0 || n <= 0 {
            warn!("Degenerate prototile parameters (m={}, k={}, n={})", m, k, n);
            return None;
        }
        if n < k {
            error!("Parameter Error: n must be >= k (n={}, k={})", n, k);
        }

        let sequences = DirectionSequences::build(m, k);

        let mut path = Vec::with_capacity(sequences.lower.len() + sequences.upper.len());
        let mut current = Point::ORIGIN;
        path.push(current);

        // Forward along the lower boundary to the tip
        for &d in &sequences.lower {
            current += direction_vector(d, n, UNIT_LENGTH);
            path.push(current);
        }

        // Back along the upper boundary from the tip toward the origin
        for &d in sequences.upper.iter().rev() {
            current -= direction_vector(d, n, UNIT_LENGTH);
            path.push(current);
        }

        let closure_error = current.length();
        debug!(
            "Prototile (m={}, k={}, n={}): {} points, closure error {:.4}, short period {}",
            m,
            k,
            n,
            path.len(),
            closure_error,
            sequences.has_short_period
        );

        let polygon = TilePolygon::new(
            path,
            PROTOTILE_FILL,
            Some(PROTOTILE_STROKE),
            TileMeta {
                closure_error: Some(closure_error),
                has_short_period: sequences.has_short_period,
                ..TileMeta::default()
            },
        );

        Some(Self {
            m,
            k,
            n,
            sequences,
            polygon,
        })
    }

    pub fn direction(&self, d: i64) -> Point {
        direction_vector(d, self.n, UNIT_LENGTH)
    }

    pub fn closure_error(&self) -> f64 {
        self.polygon.meta.closure_error.unwrap_or(0.0)
    }

    pub fn has_short_period(&self) -> bool {
        self.sequences.has_short_period
    }

    /// Lattice basis `(d0, d1)` used to stack prototiles inside a wedge.
    ///
    /// `d0` is the net displacement of the lower boundary (terminal entry
    /// excluded); `d1` is `vector(k) - vector(0)`.
    pub fn lattice_basis(&self) -> (Point, Point) {
        let d0 = self
            .sequences
            .lower_steps()
            .iter()
            .fold(Point::ORIGIN, |acc, &d| acc + self.direction(d));
        let d1 = self.direction(self.k) - self.direction(0);
        (d0, d1)
    }
}

/// Generate the single prototile polygon for `(m, k, n)`; empty when degenerate.
pub fn generate_prototile(m: i64, k: i64, n: i64) -> Vec<TilePolygon> {
    Prototile::build(m, k, n)
        .map(|proto| vec![proto.polygon])
        .unwrap_or_default()
}
