use crate::bounding_volume::{Aabb, BoundingCapsule, Obb};
use crate::query::details::closest_points_segment_local_box;
use crate::shape::Segment;

/// Intersection test between an AABB and a capsule.
///
/// The capsule segment is expressed relative to the AABB center, then its exact squared distance
/// to the box is compared to the squared capsule radius.
#[inline]
pub fn intersection_test_aabb_capsule(aabb: &Aabb, capsule: &BoundingCapsule) -> bool {
    let center = aabb.center().coords;
    let segment = capsule.segment();
    let local_segment = Segment::new(segment.a - center, segment.b - center);
    let (sq_dist, _) = closest_points_segment_local_box(&local_segment, aabb.half_extents());
    let r = capsule.radius();

    sq_dist <= r * r
}

/// Intersection test between an OBB and a capsule.
///
/// The capsule segment is expressed in the local frame of the OBB, then its exact squared
/// distance to the box is compared to the squared capsule radius.
#[inline]
pub fn intersection_test_obb_capsule(obb: &Obb, capsule: &BoundingCapsule) -> bool {
    let segment = capsule.segment();
    let local_segment = Segment::new(obb.local_point(&segment.a), obb.local_point(&segment.b));
    let (sq_dist, _) = closest_points_segment_local_box(&local_segment, obb.half_extents());
    let r = capsule.radius();

    sq_dist <= r * r
}
