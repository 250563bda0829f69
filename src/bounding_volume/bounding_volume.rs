use crate::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb};
use crate::math::{AffineMatrix, Isometry, Point, Real};
use crate::query::{self, Containment, Unsupported};

/// Enum representing the type of a bounding volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VolumeType {
    /// An axis-aligned bounding box.
    Aabb,
    /// An oriented bounding box.
    Obb,
    /// A bounding sphere.
    Sphere,
    /// A bounding capsule.
    Capsule,
    /// A user-defined bounding volume.
    Custom,
}

/// Enum representing a borrowed bounding volume with its actual type.
///
/// Every query between two `TypedVolume` is resolved by an exhaustive match over the pair of
/// variants, so these queries cannot fail.
#[derive(Copy, Clone, Debug)]
pub enum TypedVolume<'a> {
    /// An axis-aligned bounding box.
    Aabb(&'a Aabb),
    /// An oriented bounding box.
    Obb(&'a Obb),
    /// A bounding sphere.
    Sphere(&'a BoundingSphere),
    /// A bounding capsule.
    Capsule(&'a BoundingCapsule),
}

impl TypedVolume<'_> {
    /// The type of the referenced volume.
    pub fn volume_type(&self) -> VolumeType {
        match self {
            TypedVolume::Aabb(_) => VolumeType::Aabb,
            TypedVolume::Obb(_) => VolumeType::Obb,
            TypedVolume::Sphere(_) => VolumeType::Sphere,
            TypedVolume::Capsule(_) => VolumeType::Capsule,
        }
    }

    /// The world-space center of the referenced volume.
    pub fn center(&self) -> Point<Real> {
        match self {
            TypedVolume::Aabb(v) => v.center(),
            TypedVolume::Obb(v) => v.center(),
            TypedVolume::Sphere(v) => v.center(),
            TypedVolume::Capsule(v) => v.center(),
        }
    }

    /// Tests whether this volume and `other` overlap. Touching volumes intersect.
    #[inline]
    pub fn intersects(&self, other: &TypedVolume<'_>) -> bool {
        query::details::intersection_test_typed(*self, *other)
    }

    /// Tests whether this volume fully contains `other`.
    #[inline]
    pub fn encloses(&self, other: &TypedVolume<'_>) -> bool {
        query::details::enclosure_test_typed(*self, *other)
    }

    /// Tests whether this volume is fully contained by `other`.
    #[inline]
    pub fn is_enclosed_by(&self, other: &TypedVolume<'_>) -> bool {
        query::details::enclosure_test_typed(*other, *self)
    }

    /// Classifies how `other` is placed relative to this volume.
    #[inline]
    pub fn containment(&self, other: &TypedVolume<'_>) -> Containment {
        query::details::containment_test_typed(*self, *other)
    }
}

impl<'a> From<&'a Aabb> for TypedVolume<'a> {
    fn from(v: &'a Aabb) -> Self {
        TypedVolume::Aabb(v)
    }
}

impl<'a> From<&'a Obb> for TypedVolume<'a> {
    fn from(v: &'a Obb) -> Self {
        TypedVolume::Obb(v)
    }
}

impl<'a> From<&'a BoundingSphere> for TypedVolume<'a> {
    fn from(v: &'a BoundingSphere) -> Self {
        TypedVolume::Sphere(v)
    }
}

impl<'a> From<&'a BoundingCapsule> for TypedVolume<'a> {
    fn from(v: &'a BoundingCapsule) -> Self {
        TypedVolume::Capsule(v)
    }
}

/// Trait of bounding volumes.
///
/// A bounding volume keeps the dimensions it was created with (its *initial* dimensions) and
/// derives its current world-space geometry from them each time [`BoundingVolume::update`] is
/// called. The derived geometry depends only on the initial dimensions and the last transform,
/// so updating twice with the same transform is a no-op.
pub trait BoundingVolume: Send + Sync {
    /// Recomputes the world-space geometry of this volume from its initial dimensions and
    /// `transform`.
    ///
    /// The upper-left 3x3 block of `transform` holds rotation and scale, its last column holds
    /// the translation. The projective row is ignored.
    fn update(&mut self, transform: &AffineMatrix<Real>);

    /// Recomputes the world-space geometry of this volume from a rigid-body position.
    fn update_with_isometry(&mut self, pos: &Isometry<Real>) {
        self.update(&pos.to_homogeneous())
    }

    /// The world-space center of this volume.
    ///
    /// For boxes and spheres, this is the translation of the last transform applied. For a
    /// capsule, this is the midpoint of its world-space segment, which only matches the
    /// translation if the initial segment is centered at the origin.
    fn center(&self) -> Point<Real>;

    /// The type of this volume.
    fn volume_type(&self) -> VolumeType;

    /// Converts this volume to one of the built-in volume types.
    ///
    /// Returns `None` for user-defined volumes. Queries involving them are only resolved by a
    /// [`QueryDispatcher`](crate::query::QueryDispatcher) that knows about them.
    fn as_typed_volume(&self) -> Option<TypedVolume<'_>>;

    /// Tests whether this volume and `other` overlap.
    ///
    /// The result does not depend on the order of the two volumes. Returns `Err(Unsupported)`
    /// if one of them is not a built-in volume.
    fn intersects(&self, other: &dyn BoundingVolume) -> Result<bool, Unsupported> {
        query::details::resolve_typed(self, other, query::details::intersection_test_typed)
    }

    /// Tests whether this volume fully contains `other`.
    fn encloses(&self, other: &dyn BoundingVolume) -> Result<bool, Unsupported> {
        query::details::resolve_typed(self, other, query::details::enclosure_test_typed)
    }

    /// Tests whether this volume is fully contained by `other`.
    fn is_enclosed_by(&self, other: &dyn BoundingVolume) -> Result<bool, Unsupported> {
        query::details::resolve_typed(self, other, |v1, v2| {
            query::details::enclosure_test_typed(v2, v1)
        })
    }
}
