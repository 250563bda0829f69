use crate::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb};
use crate::math::{Point, Real, DIM};

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Does `obb` contain the ball with the given center and radius?
#[inline]
fn obb_encloses_ball(obb: &Obb, center: &Point<Real>, radius: Real) -> bool {
    let local = obb.local_point(center);
    let half_extents = obb.half_extents();
    (0..DIM).all(|i| local[i].abs() + radius <= half_extents[i])
}

/// Enclosure test between an OBB container and an OBB.
#[inline]
pub fn enclosure_test_obb_obb(container: &Obb, contained: &Obb) -> bool {
    contained
        .vertices()
        .iter()
        .all(|pt| container.contains_point(pt))
}

/// Enclosure test between an OBB container and an AABB.
#[inline]
pub fn enclosure_test_obb_aabb(container: &Obb, contained: &Aabb) -> bool {
    contained
        .vertices()
        .iter()
        .all(|pt| container.contains_point(pt))
}

/// Enclosure test between an OBB container and a sphere.
///
/// The sphere is enclosed if its center lies at least one radius inside each pair of faces.
#[inline]
pub fn enclosure_test_obb_sphere(container: &Obb, contained: &BoundingSphere) -> bool {
    obb_encloses_ball(container, &contained.center(), contained.radius())
}

/// Enclosure test between an OBB container and a capsule.
///
/// The capsule is enclosed if the balls at both ends of its segment are enclosed.
#[inline]
pub fn enclosure_test_obb_capsule(container: &Obb, contained: &BoundingCapsule) -> bool {
    let segment = contained.segment();
    obb_encloses_ball(container, &segment.a, contained.radius())
        && obb_encloses_ball(container, &segment.b, contained.radius())
}

/// Enclosure test between AABBs.
#[inline]
pub fn enclosure_test_aabb_aabb(container: &Aabb, contained: &Aabb) -> bool {
    na::partial_le(&container.mins(), &contained.mins())
        && na::partial_ge(&container.maxs(), &contained.maxs())
}

/// Enclosure test between an AABB container and an OBB.
#[inline]
pub fn enclosure_test_aabb_obb(container: &Aabb, contained: &Obb) -> bool {
    contained
        .vertices()
        .iter()
        .all(|pt| container.contains_point(pt))
}

/// Enclosure test between an AABB container and a sphere.
#[inline]
pub fn enclosure_test_aabb_sphere(container: &Aabb, contained: &BoundingSphere) -> bool {
    enclosure_test_obb_sphere(&container.to_obb(), contained)
}

/// Enclosure test between an AABB container and a capsule.
#[inline]
pub fn enclosure_test_aabb_capsule(container: &Aabb, contained: &BoundingCapsule) -> bool {
    enclosure_test_obb_capsule(&container.to_obb(), contained)
}
