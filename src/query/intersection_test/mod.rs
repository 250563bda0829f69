//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::{intersection_test, intersection_test_typed};
pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_box_capsule::{
    intersection_test_aabb_capsule, intersection_test_obb_capsule,
};
pub use self::intersection_test_box_sphere::{
    intersection_test_aabb_sphere, intersection_test_obb_sphere,
};
pub use self::intersection_test_capsule::{
    intersection_test_capsule_capsule, intersection_test_sphere_capsule,
};
pub use self::intersection_test_obb_obb::{intersection_test_aabb_obb, intersection_test_obb_obb};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;

mod intersection_test_aabb_aabb;
mod intersection_test_box_capsule;
mod intersection_test_box_sphere;
mod intersection_test_capsule;
mod intersection_test_obb_obb;
mod intersection_test_sphere_sphere;
