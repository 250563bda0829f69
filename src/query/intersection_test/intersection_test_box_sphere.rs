use crate::bounding_volume::{Aabb, BoundingSphere, Obb};

/// Intersection test between an AABB and a sphere.
#[inline]
pub fn intersection_test_aabb_sphere(aabb: &Aabb, sphere: &BoundingSphere) -> bool {
    let r = sphere.radius();
    aabb.squared_distance_to_point(&sphere.center()) <= r * r
}

/// Intersection test between an OBB and a sphere.
#[inline]
pub fn intersection_test_obb_sphere(obb: &Obb, sphere: &BoundingSphere) -> bool {
    let r = sphere.radius();
    obb.squared_distance_to_point(&sphere.center()) <= r * r
}
