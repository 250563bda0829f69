use crate::bounding_volume::{
    Aabb, BoundingCapsule, BoundingSphere, BoundingVolume, Obb, TypedVolume, VolumeType,
};
use crate::math::{AffineMatrix, Point, Real};

/// An owned bounding volume of any built-in kind.
///
/// This is the value-typed counterpart of [`TypedVolume`]. It lets heterogeneous volumes be
/// stored side by side, e.g., in a `Vec<Volume>`, without boxing.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Volume {
    /// An axis-aligned bounding box.
    Aabb(Aabb),
    /// An oriented bounding box.
    Obb(Obb),
    /// A bounding sphere.
    Sphere(BoundingSphere),
    /// A bounding capsule.
    Capsule(BoundingCapsule),
}

impl Volume {
    /// Borrows this volume as a [`TypedVolume`].
    #[inline]
    pub fn as_typed(&self) -> TypedVolume<'_> {
        match self {
            Volume::Aabb(v) => TypedVolume::Aabb(v),
            Volume::Obb(v) => TypedVolume::Obb(v),
            Volume::Sphere(v) => TypedVolume::Sphere(v),
            Volume::Capsule(v) => TypedVolume::Capsule(v),
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn BoundingVolume {
        match self {
            Volume::Aabb(v) => v,
            Volume::Obb(v) => v,
            Volume::Sphere(v) => v,
            Volume::Capsule(v) => v,
        }
    }
}

impl BoundingVolume for Volume {
    #[inline]
    fn update(&mut self, transform: &AffineMatrix<Real>) {
        self.as_dyn_mut().update(transform)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.as_typed().center()
    }

    #[inline]
    fn volume_type(&self) -> VolumeType {
        self.as_typed().volume_type()
    }

    #[inline]
    fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
        Some(self.as_typed())
    }
}

impl From<Aabb> for Volume {
    fn from(v: Aabb) -> Self {
        Volume::Aabb(v)
    }
}

impl From<Obb> for Volume {
    fn from(v: Obb) -> Self {
        Volume::Obb(v)
    }
}

impl From<BoundingSphere> for Volume {
    fn from(v: BoundingSphere) -> Self {
        Volume::Sphere(v)
    }
}

impl From<BoundingCapsule> for Volume {
    fn from(v: BoundingCapsule) -> Self {
        Volume::Capsule(v)
    }
}
