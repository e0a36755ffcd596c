use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use serde::{
    Deserialize,
    Serialize
};

/// Absolute tolerance used when comparing coordinates.
pub const EPSILON: f64 = 1e-10;

/// A single sample `(x, y)` of a tabulated function.
///
/// Points are plain values: every accessor of a tabulated function hands out
/// a copy, so a caller can never alias the stored sample.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FunctionPoint {
    x: f64,
    y: f64
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn slope(lhs_pt: &FunctionPoint, rhs_pt: &FunctionPoint) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }

    /// Linear interpolation on the segment `[lhs_pt, rhs_pt]`.
    pub fn interpolate(lhs_pt: &FunctionPoint, rhs_pt: &FunctionPoint, x: f64) -> f64 {
        lhs_pt.y + (rhs_pt.y - lhs_pt.y) * (x - lhs_pt.x) / (rhs_pt.x - lhs_pt.x)
    }

    pub fn same_x(&self, x: f64) -> bool {
        (self.x - x).abs() < EPSILON
    }
}

/// Tolerance-based equality: both coordinates within [`EPSILON`].
///
/// This relation is not transitive, hence no `Eq` implementation.
impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

/// Folds the raw bits of both coordinates. Points that are equal only up to
/// the tolerance may hash differently.
impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x_bits = self.x.to_bits();
        let y_bits = self.y.to_bits();
        let folded = (x_bits as u32) ^ ((x_bits >> 32) as u32) ^ (y_bits as u32) ^ ((y_bits >> 32) as u32);
        folded.hash(state);
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}; {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        FunctionPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_display() {
        assert_eq!(FunctionPoint::new(1.0, -2.5).to_string(), "(1.0; -2.5)");
    }

    #[test]
    fn test_equality_within_tolerance() {
        let p = FunctionPoint::new(1.0, 2.0);
        assert_eq!(p, FunctionPoint::new(1.0 + 1e-11, 2.0 - 1e-11));
        assert_ne!(p, FunctionPoint::new(1.0 + 1e-9, 2.0));
        assert_ne!(p, FunctionPoint::new(1.0, 2.0 + 1e-9));
    }

    #[test]
    fn test_copy_does_not_alias() {
        let p = FunctionPoint::new(1.0, 2.0);
        let mut q = p;
        q.set_x(5.0);
        q.set_y(6.0);
        assert_relative_eq!(p.x(), 1.0);
        assert_relative_eq!(p.y(), 2.0);
        assert_relative_eq!(q.x(), 5.0);
    }

    #[test]
    fn test_interpolate() {
        let lhs = FunctionPoint::new(0.0, 0.0);
        let rhs = FunctionPoint::new(5.0, 25.0);
        assert_relative_eq!(FunctionPoint::interpolate(&lhs, &rhs, 2.5), 12.5);
        assert_relative_eq!(FunctionPoint::slope(&lhs, &rhs), 5.0);
    }

    #[test]
    fn test_hash_matches_for_identical_points() {
        use std::collections::hash_map::DefaultHasher;
        let hash = |p: &FunctionPoint| {
            let mut hasher = DefaultHasher::new();
            p.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&FunctionPoint::new(3.0, 4.0)), hash(&FunctionPoint::new(3.0, 4.0)));
    }
}
