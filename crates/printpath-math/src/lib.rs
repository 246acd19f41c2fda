#![warn(missing_docs)]

//! Math types for printpath.
//!
//! Thin wrappers around nalgebra providing the point type used by the
//! toolpath engine, plus the epsilon comparisons that decide whether two
//! coordinates are "the same" for G-code emission purposes.

/// A point in 3D machine space (mm).
pub type Point3 = nalgebra::Point3<f64>;

/// Default linear tolerance for coordinate comparisons (mm).
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Tolerance for comparing machine coordinates.
///
/// Comparisons are per-coordinate and inclusive: two values are equal when
/// `|a - b| <= linear`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Linear tolerance in mm.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-4 mm).
    pub const DEFAULT: Self = Self {
        linear: DEFAULT_EPSILON,
    };

    /// Tolerance with an explicit epsilon.
    pub const fn new(linear: f64) -> Self {
        Self { linear }
    }

    /// Check if two scalars are equal within tolerance.
    pub fn scalars_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if two points are equal within tolerance on every axis.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        self.scalars_equal(a.x, b.x) && self.scalars_equal(a.y, b.y) && self.scalars_equal(a.z, b.z)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `|a - b| <= 1e-4`.
pub fn scalars_equal(a: f64, b: f64) -> bool {
    Tolerance::DEFAULT.scalars_equal(a, b)
}

/// Every coordinate pair of `a` and `b` satisfies [`scalars_equal`].
pub fn points_equal(a: &Point3, b: &Point3) -> bool {
    Tolerance::DEFAULT.points_equal(a, b)
}

/// Euclidean distance between two points.
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}
