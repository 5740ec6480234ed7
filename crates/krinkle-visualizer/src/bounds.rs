//! Axis-aligned bounds accumulation over polygon paths.

use krinkle_tiling::{Point, TilePolygon};

/// Bounding box accumulator used while framing generated polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn update(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Bounds of every non-empty path in `polygons`.
    pub fn from_polygons<'a>(polygons: impl IntoIterator<Item = &'a TilePolygon>) -> Self {
        let mut bounds = Self::new();
        for poly in polygons {
            for &p in &poly.path {
                bounds.update(p);
            }
        }
        bounds
    }

    /// False until at least one finite point has been added.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krinkle_tiling::{Rgba, TileMeta};

    #[test]
    fn test_empty_bounds_invalid() {
        assert!(!Bounds::new().is_valid());
        let empty = TilePolygon::new(vec![], Rgba::opaque(0, 0, 0), None, TileMeta::default());
        assert!(!Bounds::from_polygons([&empty]).is_valid());
    }

    #[test]
    fn test_accumulates_across_polygons() {
        let a = TilePolygon::new(
            vec![Point::new(-10.0, 0.0), Point::new(5.0, 20.0)],
            Rgba::opaque(0, 0, 0),
            None,
            TileMeta::default(),
        );
        let b = a.translated(Point::new(100.0, -50.0));
        let bounds = Bounds::from_polygons([&a, &b]);
        assert!(bounds.is_valid());
        assert_eq!(bounds.width(), 115.0);
        assert_eq!(bounds.height(), 70.0);
        assert_eq!(bounds.center(), Point::new(47.5, -15.0));
    }

    #[test]
    fn test_single_point_is_valid() {
        let mut bounds = Bounds::new();
        bounds.update(Point::new(3.0, 4.0));
        assert!(bounds.is_valid());
        assert_eq!(bounds.width(), 0.0);
    }
}
