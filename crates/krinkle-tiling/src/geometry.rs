//! Plane geometry primitives: points and colors.

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A point (or displacement) in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean length when the point is read as a vector from the origin.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotate about the origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Point {
        let v = Rotation2::new(angle) * Vector2::new(self.x, self.y);
        Point::new(v.x, v.y)
    }

    /// 180° point reflection about `pivot`.
    pub fn reflected_through(&self, pivot: &Point) -> Point {
        Point::new(2.0 * pivot.x - self.x, 2.0 * pivot.y - self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// 8-bit RGBA color, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with alpha taken from a 0.0-1.0 opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// CSS-style hex string (`#rrggbb` or `#rrggbbaa` when translucent).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Unit step for direction index `d` at symmetry order `n`, scaled to `length`.
pub fn direction_vector(d: i64, n: i64, length: f64) -> Point {
    let angle = (d as f64) * std::f64::consts::TAU / (n as f64);
    Point::new(angle.cos() * length, angle.sin() * length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_point_arithmetic() {
        let mut p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        p -= Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(3.0, 5.0));
        assert_eq!(p * 2.0, Point::new(6.0, 10.0));
        assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let p = Point::new(100.0, 0.0).rotated(FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_reflection() {
        let pivot = Point::new(50.0, 0.0);
        assert_eq!(Point::new(0.0, 0.0).reflected_through(&pivot), Point::new(100.0, 0.0));
        assert_eq!(Point::new(60.0, 10.0).reflected_through(&pivot), Point::new(40.0, -10.0));
    }

    #[test]
    fn test_direction_vector_wraps_full_turn() {
        let a = direction_vector(0, 4, 100.0);
        let b = direction_vector(4, 4, 100.0);
        assert!(a.distance_to(&b) < 1e-9);
        let up = direction_vector(1, 4, 100.0);
        assert!((up.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Rgba::opaque(88, 166, 255).to_hex(), "#58a6ff");
        assert_eq!(Rgba::opaque(88, 166, 255).with_opacity(0.4).a, 102);
    }
}
