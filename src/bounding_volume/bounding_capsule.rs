//! Bounding capsule.

use crate::bounding_volume::{BoundingVolume, TypedVolume, VolumeType};
use crate::math::{AffineMatrix, Point, Real, Vector};
use crate::shape::Segment;
use crate::utils;

/// A bounding capsule, defined as a round segment.
///
/// The initial segment is expressed in the local frame of the bounded object. Updating the
/// capsule transforms both endpoints and scales the radius like a
/// [`BoundingSphere`](crate::bounding_volume::BoundingSphere). A capsule with a zero-length
/// segment behaves as a sphere.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingCapsule {
    initial_segment: Segment,
    initial_radius: Real,
    segment: Segment,
    radius: Real,
}

impl BoundingCapsule {
    /// Creates a new capsule aligned with the `x` axis and with the given half-height an radius.
    pub fn new_x(half_height: Real, radius: Real) -> Self {
        let b = Point::from(Vector::x() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule aligned with the `y` axis and with the given half-height an radius.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        let b = Point::from(Vector::y() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule aligned with the `z` axis and with the given half-height an radius.
    pub fn new_z(half_height: Real, radius: Real) -> Self {
        let b = Point::from(Vector::z() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let segment = Segment::new(a, b);
        Self {
            initial_segment: segment,
            initial_radius: radius,
            segment,
            radius,
        }
    }

    /// The world-space segment of this capsule.
    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// The world-space radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The segment this capsule was created with.
    #[inline]
    pub fn initial_segment(&self) -> &Segment {
        &self.initial_segment
    }

    /// The radius this capsule was created with.
    #[inline]
    pub fn initial_radius(&self) -> Real {
        self.initial_radius
    }

    /// The height of this capsule.
    pub fn height(&self) -> Real {
        self.segment.length()
    }

    /// The half-height of this capsule.
    pub fn half_height(&self) -> Real {
        self.height() / 2.0
    }

    /// The center of this capsule, i.e., the midpoint of its world-space segment.
    pub fn center(&self) -> Point<Real> {
        self.segment.center()
    }

    /// Does this capsule contain `pt`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.segment.squared_distance_to_point(pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingCapsule {
    fn update(&mut self, transform: &AffineMatrix<Real>) {
        self.segment = self.initial_segment.transformed(transform);
        self.radius = self.initial_radius * utils::max_column_norm(transform);
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn volume_type(&self) -> VolumeType {
        VolumeType::Capsule
    }

    #[inline]
    fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
        Some(TypedVolume::Capsule(self))
    }
}
