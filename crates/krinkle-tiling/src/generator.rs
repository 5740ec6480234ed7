//! Mode dispatch over the three generators.

use krinkle_core::{GenerationError, TilingMode};
use serde::Serialize;
use tracing::info;

use crate::params::TilingParams;
use crate::polygon::TilePolygon;
use crate::prototile::Prototile;
use crate::tiling::layout_tiling;
use crate::wedge::layout_wedge;

/// Output of one generation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTiling {
    pub mode: TilingMode,
    pub params: TilingParams,
    /// Derived symmetry order
    pub n: i64,
    /// Closure error of the underlying prototile, `None` when degenerate
    pub closure_error: Option<f64>,
    pub polygons: Vec<TilePolygon>,
}

impl GeneratedTiling {
    pub fn has_short_period(&self) -> bool {
        self.polygons.iter().any(|p| p.meta.has_short_period)
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Validate `params` for `mode` and run the matching generator.
///
/// The prototile is built once and shared by the wedge and tiling stages.
pub fn generate(
    mode: TilingMode,
    params: &TilingParams,
) -> Result<GeneratedTiling, GenerationError> {
    let n = params.validate(mode)?;
    let proto = Prototile::build(params.m, params.k, n);

    let polygons = match (&proto, mode) {
        (None, _) => Vec::new(),
        (Some(proto), TilingMode::Prototile) => vec![proto.polygon.clone()],
        (Some(proto), TilingMode::Wedge) => layout_wedge(proto, params.rows),
        (Some(proto), TilingMode::Tiling) => layout_tiling(proto, params.rows, params.offset),
    };

    info!(
        "Generated {} (m={}, k={}, n={}): {} polygons",
        mode,
        params.m,
        params.k,
        n,
        polygons.len()
    );

    Ok(GeneratedTiling {
        mode,
        params: *params,
        n,
        closure_error: proto.as_ref().map(Prototile::closure_error),
        polygons,
    })
}
