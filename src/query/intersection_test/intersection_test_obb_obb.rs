use crate::bounding_volume::{Aabb, Obb};
use crate::query::sat;

/// Intersection test between OBBs.
///
/// The boxes intersect if none of the 15 SAT axes separates them. The test is run from the
/// frame of each box in turn, so the result is the same for both argument orders.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    sat::obb_obb_find_separating_axis(obb1, obb2).is_none()
        && sat::obb_obb_find_separating_axis(obb2, obb1).is_none()
}

/// Intersection test between an AABB and an OBB.
#[inline]
pub fn intersection_test_aabb_obb(aabb: &Aabb, obb: &Obb) -> bool {
    intersection_test_obb_obb(&aabb.to_obb(), obb)
}
