//! Bounding sphere.

use crate::bounding_volume::{BoundingVolume, TypedVolume, VolumeType};
use crate::math::{AffineMatrix, Point, Real};
use crate::utils;

/// A Bounding Sphere.
///
/// Updating the sphere moves its center to the translation of the transform and scales its
/// initial radius by the largest column length of the transform's linear block, so the sphere
/// stays conservative under non-uniform scaling.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    initial_radius: Real,
    radius: Real,
    center: Point<Real>,
}

impl BoundingSphere {
    /// Creates a new bounding sphere centered at the origin.
    pub fn new(initial_radius: Real) -> BoundingSphere {
        BoundingSphere::from_center(Point::origin(), initial_radius)
    }

    /// Creates a new bounding sphere with the given center.
    pub fn from_center(center: Point<Real>, initial_radius: Real) -> BoundingSphere {
        BoundingSphere {
            initial_radius,
            radius: initial_radius,
            center,
        }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The radius this sphere was created with.
    #[inline]
    pub fn initial_radius(&self) -> Real {
        self.initial_radius
    }

    /// Does this sphere contain `pt`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    fn update(&mut self, transform: &AffineMatrix<Real>) {
        self.radius = self.initial_radius * utils::max_column_norm(transform);
        self.center = Point::from(utils::translation_part(transform));
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn volume_type(&self) -> VolumeType {
        VolumeType::Sphere
    }

    #[inline]
    fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
        Some(TypedVolume::Sphere(self))
    }
}
