//! Implementation details of the `enclosure_test` function.
//!
//! Each function has the form `enclosure_test_[container]_[contained]()`.

pub use self::enclosure_test::{enclosure_test, enclosure_test_typed};
pub use self::enclosure_test_box::{
    enclosure_test_aabb_aabb, enclosure_test_aabb_capsule, enclosure_test_aabb_obb,
    enclosure_test_aabb_sphere, enclosure_test_obb_aabb, enclosure_test_obb_capsule,
    enclosure_test_obb_obb, enclosure_test_obb_sphere,
};
pub use self::enclosure_test_capsule::{
    enclosure_test_capsule_aabb, enclosure_test_capsule_capsule, enclosure_test_capsule_obb,
    enclosure_test_capsule_sphere,
};
pub use self::enclosure_test_sphere::{
    enclosure_test_sphere_aabb, enclosure_test_sphere_capsule, enclosure_test_sphere_obb,
    enclosure_test_sphere_sphere,
};

mod enclosure_test_box;
mod enclosure_test_capsule;
mod enclosure_test_sphere;
