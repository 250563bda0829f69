//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingVolume, Obb, TypedVolume, VolumeType};
use crate::math::{AffineMatrix, Point, Real, Vector, DIM};
use crate::utils;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is a box whose edges are always parallel to the world axes. It is defined by the
/// half-extents of the box it bounds, expressed in that box's local frame (the *initial*
/// half-extents), and by the transform last given to [`BoundingVolume::update`].
///
/// Rotating the bounded box makes the AABB grow so that it still encloses every corner of the
/// rotated box. The fit is conservative: the AABB may be larger than necessary, never smaller.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bounding3d::bounding_volume::{Aabb, BoundingVolume};
/// use bounding3d::na::{Matrix4, Vector3};
/// use core::f32::consts::FRAC_PI_4;
///
/// let mut aabb = Aabb::new(Vector3::new(1.0, 1.0, 1.0));
///
/// // A 45 degrees rotation around `z` widens the box along `x` and `y`.
/// aabb.update(&Matrix4::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4));
/// assert!((aabb.half_extents().x - 2.0f32.sqrt()).abs() < 1.0e-5);
/// assert_eq!(aabb.half_extents().z, 1.0);
///
/// // The initial half-extents never change.
/// assert_eq!(*aabb.initial_half_extents(), Vector3::new(1.0, 1.0, 1.0));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    initial_half_extents: Vector<Real>,
    half_extents: Vector<Real>,
    transform: AffineMatrix<Real>,
}

impl Aabb {
    /// Creates a new AABB centered at the origin, bounding a box with the given half-extents.
    #[inline]
    pub fn new(initial_half_extents: Vector<Real>) -> Aabb {
        Aabb {
            initial_half_extents,
            half_extents: initial_half_extents,
            transform: AffineMatrix::identity(),
        }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        let mut res = Aabb::new(half_extents);
        res.transform = AffineMatrix::new_translation(&center.coords);
        res
    }

    /// The half-extents of the box bounded by this AABB, in that box's local frame.
    #[inline]
    pub fn initial_half_extents(&self) -> &Vector<Real> {
        &self.initial_half_extents
    }

    /// The current world-aligned half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// Overwrites both the initial and the current half-extents of this AABB.
    ///
    /// The stored transform is left untouched and is not reapplied until the next update.
    #[inline]
    pub fn set_half_extents(&mut self, half_extents: Vector<Real>) {
        self.initial_half_extents = half_extents;
        self.half_extents = half_extents;
    }

    /// The transform this AABB was last updated with.
    ///
    /// Only its linear block and its translation are kept.
    #[inline]
    pub fn transform(&self) -> &AffineMatrix<Real> {
        &self.transform
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from(utils::translation_part(&self.transform))
    }

    /// The corner of this AABB with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.center() - self.half_extents
    }

    /// The corner of this AABB with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.center() + self.half_extents
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mins = self.mins();
        let maxs = self.maxs();
        [
            Point::new(mins.x, mins.y, mins.z),
            Point::new(maxs.x, mins.y, mins.z),
            Point::new(maxs.x, maxs.y, mins.z),
            Point::new(mins.x, maxs.y, mins.z),
            Point::new(mins.x, mins.y, maxs.z),
            Point::new(maxs.x, mins.y, maxs.z),
            Point::new(maxs.x, maxs.y, maxs.z),
            Point::new(mins.x, maxs.y, maxs.z),
        ]
    }

    /// The squared distance between `pt` and this AABB.
    ///
    /// Each axis where `pt` lies outside of `[center - half_extents, center + half_extents]`
    /// contributes its squared excess. Returns zero if `pt` is inside.
    pub fn squared_distance_to_point(&self, pt: &Point<Real>) -> Real {
        let mins = self.mins();
        let maxs = self.maxs();
        let mut sq_dist = 0.0;

        for i in 0..DIM {
            let v = pt[i];
            if v < mins[i] {
                sq_dist += (mins[i] - v) * (mins[i] - v);
            }
            if v > maxs[i] {
                sq_dist += (v - maxs[i]) * (v - maxs[i]);
            }
        }

        sq_dist
    }

    /// The point of this AABB closest to `pt`.
    ///
    /// Returns `pt` itself if it is inside.
    #[inline]
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let mins = self.mins();
        let maxs = self.maxs();
        Point::from(Vector::from_fn(|i, _| na::clamp(pt[i], mins[i], maxs[i])))
    }

    /// Does this AABB contain `pt`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::partial_le(&self.mins(), pt) && na::partial_ge(&self.maxs(), pt)
    }

    /// The oriented box covering exactly the same space as this AABB.
    pub fn to_obb(&self) -> Obb {
        let axes = [Vector::x_axis(), Vector::y_axis(), Vector::z_axis()];
        Obb::from_parts(self.center(), self.half_extents, axes)
    }
}

impl BoundingVolume for Aabb {
    fn update(&mut self, transform: &AffineMatrix<Real>) {
        let linear = utils::linear_part(transform);
        let translation = utils::translation_part(transform);

        // Each world axis receives the projection of every local axis of the bounded box.
        for i in 0..DIM {
            self.half_extents[i] = 0.0;
            for j in 0..DIM {
                self.half_extents[i] += (linear[(i, j)] * self.initial_half_extents[j]).abs();
            }
        }

        self.transform = utils::affine_from_parts(&linear, &translation);
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn volume_type(&self) -> VolumeType {
        VolumeType::Aabb
    }

    #[inline]
    fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
        Some(TypedVolume::Aabb(self))
    }
}
