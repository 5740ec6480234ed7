//! Triangular wedge of prototiles.

use tracing::debug;

use crate::palette::{wedge_fill, WEDGE_STROKE};
use crate::polygon::{TileMeta, TilePolygon};
use crate::prototile::Prototile;

/// Number of tiles in a wedge of `rows` rows: `rows * (rows + 1) / 2`.
pub fn wedge_tile_count(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

/// Lay out `rows` rows of copies of `proto`; row `r` holds columns `0..=r`.
///
/// Tile `(r, c)` is the prototile translated by `r * d0 + c * d1`.
/// `tile_index` counts tiles in row-major order.
pub fn layout_wedge(proto: &Prototile, rows: usize) -> Vec<TilePolygon> {
    if proto.polygon.is_empty() {
        return Vec::new();
    }

    let (d0, d1) = proto.lattice_basis();
    let has_short_period = proto.has_short_period();
    let mut tiles = Vec::with_capacity(wedge_tile_count(rows));

    for r in 0..rows {
        for c in 0..=r {
            let offset = d0 * r as f64 + d1 * c as f64;
            let mut tile = proto.polygon.translated(offset);
            tile.fill = wedge_fill(r, c);
            tile.stroke = Some(WEDGE_STROKE);
            tile.meta = TileMeta {
                has_short_period,
                row: Some(r),
                col: Some(c),
                tile_index: Some(tiles.len()),
                ..TileMeta::default()
            };
            tiles.push(tile);
        }
    }

    debug!(
        "Wedge (m={}, k={}, n={}, rows={}): {} tiles",
        proto.m,
        proto.k,
        proto.n,
        rows,
        tiles.len()
    );
    tiles
}

/// Generate a wedge for `(m, k, n)`; degenerate prototiles yield the
/// (empty) prototile result unchanged.
pub fn generate_wedge(m: i64, k: i64, n: i64, rows: usize) -> Vec<TilePolygon> {
    match Prototile::build(m, k, n) {
        Some(proto) => layout_wedge(&proto, rows),
        None => Vec::new(),
    }
}
