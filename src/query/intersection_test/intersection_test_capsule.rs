use crate::bounding_volume::{BoundingCapsule, BoundingSphere};
use crate::query::details::squared_distance_segment_segment;

/// Intersection test between a sphere and a capsule.
#[inline]
pub fn intersection_test_sphere_capsule(sphere: &BoundingSphere, capsule: &BoundingCapsule) -> bool {
    let distance_squared = capsule.segment().squared_distance_to_point(&sphere.center());
    let sum_radius = sphere.radius() + capsule.radius();
    distance_squared <= sum_radius * sum_radius
}

/// Intersection test between capsules.
#[inline]
pub fn intersection_test_capsule_capsule(
    capsule1: &BoundingCapsule,
    capsule2: &BoundingCapsule,
) -> bool {
    let distance_squared = squared_distance_segment_segment(capsule1.segment(), capsule2.segment());
    let sum_radius = capsule1.radius() + capsule2.radius();
    distance_squared <= sum_radius * sum_radius
}
