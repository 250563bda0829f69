//! Application of the Separating Axis Theorem (SAT) to oriented boxes.
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. For two boxes, only 15 candidate axes need to be tested: the
//! three face normals of each box, and the nine cross products of one edge direction of each box.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use bounding3d::bounding_volume::Obb;
//! use bounding3d::na::{Point3, Vector3};
//! use bounding3d::query::sat::{obb_obb_find_separating_axis, SeparatingAxis};
//!
//! let axes = [Vector3::x_axis(), Vector3::y_axis(), Vector3::z_axis()];
//! let obb1 = Obb::from_parts(Point3::origin(), Vector3::repeat(1.0), axes);
//! let obb2 = Obb::from_parts(Point3::new(3.0, 0.0, 0.0), Vector3::repeat(1.0), axes);
//!
//! assert_eq!(
//!     obb_obb_find_separating_axis(&obb1, &obb2),
//!     Some(SeparatingAxis::Face1(0))
//! );
//! # }
//! ```

pub use self::sat_obb_obb::{
    obb_obb_compute_separation_wrt_axis, obb_obb_find_separating_axis, SeparatingAxis,
    PARALLEL_EPSILON,
};

mod sat_obb_obb;
