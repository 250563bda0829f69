//! Bounding volumes.
//!
//! Four bounding volumes are provided: [`Aabb`], [`Obb`], [`BoundingSphere`] and
//! [`BoundingCapsule`]. Each one is built from the dimensions of the object it bounds, expressed
//! in that object's local frame, and refreshed with [`BoundingVolume::update`] whenever the
//! object moves.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_capsule::BoundingCapsule;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::{BoundingVolume, TypedVolume, VolumeType};
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;
#[doc(inline)]
pub use crate::bounding_volume::volume::Volume;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_capsule;
#[doc(hidden)]
pub mod bounding_sphere;
#[doc(hidden)]
pub mod obb;
mod volume;
