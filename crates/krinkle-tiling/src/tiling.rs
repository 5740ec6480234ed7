//! Radial tiling by front-tracking wedge placement.
//!
//! Wedge 0 sits at the origin. Every further wedge `i` attaches where the
//! current front first exposes direction `i`, rotated by `i * 2π / n`; the
//! front entry it covers is replaced by `i + k`. In offset mode only half the
//! wedges are placed directly and the rest come from a 180° point reflection.

use krinkle_core::constants::{COPY_WEDGE_OFFSET, UNIT_LENGTH};
use std::f64::consts::TAU;
use tracing::{debug, warn};

use crate::geometry::{direction_vector, Point};
use crate::polygon::TilePolygon;
use crate::prototile::Prototile;
use crate::wedge::layout_wedge;

/// Boundary directions currently exposed for attaching the next wedge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Front {
    directions: Vec<i64>,
}

impl Front {
    /// Initial front: the upper boundary without its terminal entry.
    pub fn from_prototile(proto: &Prototile) -> Self {
        Self {
            directions: proto.sequences.upper_steps().to_vec(),
        }
    }

    pub fn directions(&self) -> &[i64] {
        &self.directions
    }

    /// First position exposing direction `i`.
    pub fn find(&self, i: i64) -> Option<usize> {
        self.directions.iter().position(|&d| d == i)
    }

    /// World position of front entry `index`: the sum of the direction
    /// vectors of all earlier entries.
    pub fn attachment_point(&self, index: usize, n: i64) -> Point {
        self.directions[..index]
            .iter()
            .fold(Point::ORIGIN, |acc, &d| acc + direction_vector(d, n, UNIT_LENGTH))
    }

    /// Cover entry `index` with the boundary exposed by wedge `i`.
    pub fn advance(&mut self, index: usize, i: i64, k: i64) {
        self.directions[index] = i + k;
    }
}

/// Number of wedges placed directly: `n`, or `n / 2` in offset mode.
pub fn wedge_limit(n: i64, is_offset: bool) -> i64 {
    if is_offset {
        n / 2
    } else {
        n
    }
}

/// Pivot for the offset-mode reflection: midpoint of wedge 0's first edge.
pub fn reflection_pivot(n: i64) -> Point {
    Point::ORIGIN.midpoint(&direction_vector(0, n, UNIT_LENGTH))
}

/// Place wedges around the center for a prebuilt prototile.
pub fn layout_tiling(proto: &Prototile, rows: usize, is_offset: bool) -> Vec<TilePolygon> {
    let base = layout_wedge(proto, rows);
    if base.is_empty() {
        return base;
    }

    let n = proto.n;
    let w_limit = wedge_limit(n, is_offset);
    let angle_step = TAU / n as f64;
    let mut front = Front::from_prototile(proto);

    let mut polygons: Vec<TilePolygon> = base
        .iter()
        .map(|tile| {
            let mut tile = tile.clone();
            tile.meta.wedge_index = Some(0);
            tile
        })
        .collect();

    let mut skipped = 0usize;
    for i in 1..w_limit {
        let Some(j) = front.find(i) else {
            warn!(
                "No front edge with direction {} for wedge {}; leaving a gap",
                i, i
            );
            skipped += 1;
            continue;
        };

        let attach = front.attachment_point(j, n);
        let angle = i as f64 * angle_step;
        polygons.extend(base.iter().map(|tile| {
            let mut placed = tile.map_points(|p| p.rotated(angle) + attach);
            placed.meta.wedge_index = Some(i);
            placed
        }));
        front.advance(j, i, proto.k);
    }

    if is_offset {
        let pivot = reflection_pivot(n);
        let copies: Vec<TilePolygon> = polygons
            .iter()
            .map(|tile| {
                let mut copy = tile.map_points(|p| p.reflected_through(&pivot));
                copy.meta.wedge_index = tile.meta.wedge_index.map(|w| w + COPY_WEDGE_OFFSET);
                copy.meta.is_copy = true;
                copy
            })
            .collect();
        polygons.extend(copies);
    }

    debug!(
        "Tiling (m={}, k={}, n={}, rows={}, offset={}): {} wedges placed, {} skipped, {} polygons",
        proto.m,
        proto.k,
        n,
        rows,
        is_offset,
        w_limit.max(1) as usize - skipped,
        skipped,
        polygons.len()
    );
    polygons
}

/// Generate the full radial tiling for `(m, k, n)`.
pub fn generate_tiling(m: i64, k: i64, n: i64, rows: usize, is_offset: bool) -> Vec<TilePolygon> {
    match Prototile::build(m, k, n) {
        Some(proto) => layout_tiling(&proto, rows, is_offset),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wedge::wedge_tile_count;

    #[test]
    fn test_front_tracking_square() {
        let proto = Prototile::build(1, 4, 4).unwrap();
        let mut front = Front::from_prototile(&proto);
        assert_eq!(front.directions(), &[4, 1, 2, 3]);

        let j = front.find(1).unwrap();
        assert_eq!(j, 1);
        let attach = front.attachment_point(j, 4);
        assert!(attach.distance_to(&Point::new(100.0, 0.0)) < 1e-9);

        front.advance(j, 1, 4);
        assert_eq!(front.directions(), &[4, 5, 2, 3]);
        assert_eq!(front.find(1), None);
    }

    #[test]
    fn test_all_wedges_tagged() {
        let polys = generate_tiling(1, 4, 4, 2, false);
        let per_wedge = wedge_tile_count(2);
        assert_eq!(polys.len(), 4 * per_wedge);
        for (i, chunk) in polys.chunks(per_wedge).enumerate() {
            assert!(chunk.iter().all(|t| t.meta.wedge_index == Some(i as i64)));
            assert!(chunk.iter().all(|t| !t.meta.is_copy));
        }
    }

    #[test]
    fn test_wedge_rotation_applied() {
        let polys = generate_tiling(1, 4, 4, 1, false);
        // wedge 1 = prototile rotated a quarter turn, attached at (100, 0)
        let w1 = &polys[1];
        let expected = Point::new(100.0, 0.0) + Point::new(100.0, 0.0).rotated(TAU / 4.0);
        assert!(w1.path[1].distance_to(&expected) < 1e-9);
    }

    #[test]
    fn test_missing_front_entry_leaves_gap() {
        // short period: the front [4, 2] never exposes 1 or 3
        let polys = generate_tiling(2, 4, 4, 1, false);
        let wedges: std::collections::BTreeSet<_> =
            polys.iter().filter_map(|t| t.meta.wedge_index).collect();
        assert_eq!(wedges.into_iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_offset_mode_doubles_with_reflected_copies() {
        let polys = generate_tiling(1, 4, 8, 2, true);
        assert_eq!(polys.len() % 2, 0);
        let half = polys.len() / 2;
        let pivot = reflection_pivot(8);
        for (orig, copy) in polys[..half].iter().zip(&polys[half..]) {
            assert!(copy.meta.is_copy);
            assert_eq!(
                copy.meta.wedge_index,
                orig.meta.wedge_index.map(|w| w + COPY_WEDGE_OFFSET)
            );
            for (a, b) in orig.path.iter().zip(&copy.path) {
                assert!(a.reflected_through(&pivot).distance_to(b) < 1e-9);
            }
        }
    }

    #[test]
    fn test_wedge_limit() {
        assert_eq!(wedge_limit(12, false), 12);
        assert_eq!(wedge_limit(12, true), 6);
        assert_eq!(wedge_limit(7, true), 3);
    }

    #[test]
    fn test_degenerate_input_is_empty() {
        assert!(generate_tiling(1, 4, 0, 2, false).is_empty());
        assert!(generate_tiling(1, 4, 4, 0, false).is_empty());
    }
}
