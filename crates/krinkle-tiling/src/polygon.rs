//! Generated polygon records and their metadata.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rgba};

/// Diagnostic and identity data attached to each generated polygon.
///
/// Which fields are populated depends on the generating mode: prototiles
/// carry `closure_error`, wedge tiles carry `r`/`c`/`tile_index`, and tiling
/// tiles additionally carry `wedge_index` (and `is_copy` for mirrored copies).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure_error: Option<f64>,
    pub has_short_period: bool,
    /// Row (depth) within the wedge
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Column within the row, `0..=row`
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wedge_index: Option<i64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_copy: bool,
}

/// A closed polygon: the path's last point implicitly connects to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePolygon {
    pub path: Vec<Point>,
    pub fill: Rgba,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgba>,
    pub meta: TileMeta,
}

impl TilePolygon {
    pub fn new(path: Vec<Point>, fill: Rgba, stroke: Option<Rgba>, meta: TileMeta) -> Self {
        Self {
            path,
            fill,
            stroke,
            meta,
        }
    }

    /// Polygons with an empty path are treated as absent.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Copy with every point mapped through `f`; fill, stroke and metadata are kept.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> TilePolygon {
        TilePolygon {
            path: self.path.iter().copied().map(f).collect(),
            fill: self.fill,
            stroke: self.stroke,
            meta: self.meta.clone(),
        }
    }

    pub fn translated(&self, offset: Point) -> TilePolygon {
        self.map_points(|p| p + offset)
    }

    /// Mean of the path's vertices.
    pub fn centroid(&self) -> Option<Point> {
        if self.path.is_empty() {
            return None;
        }
        let sum = self
            .path
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc + *p);
        Some(sum * (1.0 / self.path.len() as f64))
    }

    /// Consecutive path segments `(index, start, end)`, excluding the implicit
    /// closing segment.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        self.path
            .windows(2)
            .enumerate()
            .map(|(i, w)| (i, w[0], w[1]))
    }

    /// Ray-casting point-in-polygon test.
    pub fn contains_point(&self, p: Point) -> bool {
        let n = self.path.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.path[i];
            let pj = self.path[j];
            if (pi.y > p.y) != (pj.y > p.y)
                && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
