use crate::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb};
use crate::math::{Point, Real};

#[inline]
fn capsule_encloses_points(capsule: &BoundingCapsule, pts: &[Point<Real>]) -> bool {
    let sq_radius = capsule.radius() * capsule.radius();
    pts.iter()
        .all(|pt| capsule.segment().squared_distance_to_point(pt) <= sq_radius)
}

#[inline]
fn capsule_encloses_ball(capsule: &BoundingCapsule, center: &Point<Real>, radius: Real) -> bool {
    let closest = capsule.segment().closest_point(center);
    na::distance(&closest, center) + radius <= capsule.radius()
}

/// Enclosure test between a capsule container and an AABB.
#[inline]
pub fn enclosure_test_capsule_aabb(container: &BoundingCapsule, contained: &Aabb) -> bool {
    capsule_encloses_points(container, &contained.vertices())
}

/// Enclosure test between a capsule container and an OBB.
#[inline]
pub fn enclosure_test_capsule_obb(container: &BoundingCapsule, contained: &Obb) -> bool {
    capsule_encloses_points(container, &contained.vertices())
}

/// Enclosure test between a capsule container and a sphere.
#[inline]
pub fn enclosure_test_capsule_sphere(
    container: &BoundingCapsule,
    contained: &BoundingSphere,
) -> bool {
    capsule_encloses_ball(container, &contained.center(), contained.radius())
}

/// Enclosure test between capsules.
///
/// A capsule is the convex hull of the balls at both ends of its segment, so it is enclosed by
/// the convex container if both of these balls are.
#[inline]
pub fn enclosure_test_capsule_capsule(
    container: &BoundingCapsule,
    contained: &BoundingCapsule,
) -> bool {
    let segment = contained.segment();
    capsule_encloses_ball(container, &segment.a, contained.radius())
        && capsule_encloses_ball(container, &segment.b, contained.radius())
}
