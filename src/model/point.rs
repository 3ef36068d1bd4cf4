use std::fmt;

/// A single bead position on the cubic lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LatticePoint {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Topological neighbors share a lattice edge (Manhattan distance 1).
    pub fn is_adjacent(&self, other: &LatticePoint) -> bool {
        let d = (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs();
        d == 1
    }

    pub fn as_f64(&self) -> (f64, f64, f64) {
        (self.x as f64, self.y as f64, self.z as f64)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
