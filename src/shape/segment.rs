//! Definition of the segment shape.

use crate::math::{AffineMatrix, Point, Real, Vector};
use crate::utils;

/// A segment shape.
///
/// Points of the segment are parametrized by `t ∈ [0, 1]`, `t = 0` being `a` and `t = 1`
/// being `b`.
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The middle point of this segment.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// Applies the affine transformation `m` to the vertices of this segment and returns the
    /// resulting segment.
    pub fn transformed(&self, m: &AffineMatrix<Real>) -> Self {
        Segment::new(
            utils::transform_point(m, &self.a),
            utils::transform_point(m, &self.b),
        )
    }

    /// Computes the point at the parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// The parameter of the point of this segment closest to `pt`.
    ///
    /// Returns `0.0` if the segment is degenerate.
    pub fn project_point_parameter(&self, pt: &Point<Real>) -> Real {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            0.0
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            1.0
        } else {
            // Voronoï region of the segment interior.
            ab_ap / sqnab
        }
    }

    /// The point of this segment closest to `pt`.
    #[inline]
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.point_at(self.project_point_parameter(pt))
    }

    /// The squared distance between `pt` and this segment.
    #[inline]
    pub fn squared_distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance_squared(&self.closest_point(pt), pt)
    }
}
