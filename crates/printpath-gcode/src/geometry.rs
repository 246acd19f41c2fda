//! Geometry providers.
//!
//! The generator does not care where segments come from, only that each one
//! can report a start point, an end point and a length. Providers return
//! `None` for data they do not have; the generator turns that into
//! [`GcodeError::MissingGeometryData`](crate::GcodeError::MissingGeometryData).

use printpath_math::{distance, Point3};
use serde::{Deserialize, Serialize};

/// Something that can be printed as a single straight segment.
pub trait GeometryProvider {
    /// Start point of the segment.
    fn start_point(&self) -> Option<Point3>;
    /// End point of the segment.
    fn end_point(&self) -> Option<Point3>;
    /// Length of the segment (mm).
    fn length(&self) -> Option<f64>;
}

impl<T: GeometryProvider + ?Sized> GeometryProvider for &T {
    fn start_point(&self) -> Option<Point3> {
        (**self).start_point()
    }

    fn end_point(&self) -> Option<Point3> {
        (**self).end_point()
    }

    fn length(&self) -> Option<f64> {
        (**self).length()
    }
}

/// A fully specified segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
    /// Length along the curve (mm).
    pub length: f64,
}

impl Segment {
    /// Create a segment with an explicit length.
    pub fn new(start: Point3, end: Point3, length: f64) -> Self {
        Self { start, end, length }
    }

    /// Straight segment whose length is the distance between its endpoints.
    pub fn straight(start: Point3, end: Point3) -> Self {
        Self::new(start, end, distance(&start, &end))
    }
}

impl GeometryProvider for Segment {
    fn start_point(&self) -> Option<Point3> {
        Some(self.start)
    }

    fn end_point(&self) -> Option<Point3> {
        Some(self.end)
    }

    fn length(&self) -> Option<f64> {
        Some(self.length)
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Line {
    /// Create a line.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

impl GeometryProvider for Line {
    fn start_point(&self) -> Option<Point3> {
        Some(self.start)
    }

    fn end_point(&self) -> Option<Point3> {
        Some(self.end)
    }

    fn length(&self) -> Option<f64> {
        Some(distance(&self.start, &self.end))
    }
}

/// Segment as read from external input, where any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSegment {
    /// Start point `[x, y, z]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[f64; 3]>,
    /// End point `[x, y, z]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<[f64; 3]>,
    /// Length (mm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl GeometryProvider for RawSegment {
    fn start_point(&self) -> Option<Point3> {
        self.start.map(Point3::from)
    }

    fn end_point(&self) -> Option<Point3> {
        self.end.map(Point3::from)
    }

    fn length(&self) -> Option<f64> {
        self.length
    }
}

impl From<Segment> for RawSegment {
    fn from(segment: Segment) -> Self {
        Self {
            start: Some(segment.start.coords.into()),
            end: Some(segment.end.coords.into()),
            length: Some(segment.length),
        }
    }
}
