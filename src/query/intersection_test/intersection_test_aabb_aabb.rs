use crate::bounding_volume::Aabb;
use crate::math::DIM;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Intersection test between AABBs.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    let delta = aabb2.center() - aabb1.center();
    let h1 = aabb1.half_extents();
    let h2 = aabb2.half_extents();

    (0..DIM).all(|i| delta[i].abs() <= h1[i] + h2[i])
}
