//! Fill and stroke colors assigned at generation time.

use crate::geometry::Rgba;

pub const PROTOTILE_FILL: Rgba = Rgba::new(88, 166, 255, 102);
pub const PROTOTILE_STROKE: Rgba = Rgba::opaque(88, 166, 255);

/// Cyclic wedge colors, indexed by `(r + c) % 3`.
pub const WEDGE_FILLS: [Rgba; 3] = [
    Rgba::new(88, 166, 255, 115),
    Rgba::new(63, 185, 80, 115),
    Rgba::new(210, 153, 34, 115),
];

pub const WEDGE_STROKE: Rgba = Rgba::opaque(201, 209, 217);

pub fn wedge_fill(row: usize, col: usize) -> Rgba {
    WEDGE_FILLS[(row + col) % WEDGE_FILLS.len()]
}
