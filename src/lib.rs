/*!
bounding3d
==========

**bounding3d** is a 3-dimensional bounding-volume library written with
the rust programming language.

It provides four bounding volumes (axis-aligned boxes, oriented boxes, spheres and capsules)
that refresh their world-space geometry from an affine transform and answer pairwise
intersection and enclosure queries against each other.

```rust
# #[cfg(feature = "f32")] {
use bounding3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use bounding3d::na::{Matrix4, Vector3};

let mut aabb = Aabb::new(Vector3::new(1.0, 1.0, 1.0));
let mut ball = BoundingSphere::new(1.0);

aabb.update(&Matrix4::identity());
ball.update(&Matrix4::new_translation(&Vector3::new(1.5, 0.0, 0.0)));

assert_eq!(aabb.intersects(&ball), Ok(true));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Matrix4, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The homogeneous affine transformation matrix type.
    ///
    /// The upper-left 3x3 block holds rotation and scale, the last column holds the translation.
    pub use Matrix4 as AffineMatrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
