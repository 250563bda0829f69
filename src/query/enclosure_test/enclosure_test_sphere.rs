use crate::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb};
use crate::math::{Point, Real};

#[inline]
fn sphere_encloses_points(sphere: &BoundingSphere, pts: &[Point<Real>]) -> bool {
    let sq_radius = sphere.radius() * sphere.radius();
    let center = sphere.center();
    pts.iter()
        .all(|pt| na::distance_squared(&center, pt) <= sq_radius)
}

#[inline]
fn sphere_encloses_ball(sphere: &BoundingSphere, center: &Point<Real>, radius: Real) -> bool {
    na::distance(&sphere.center(), center) + radius <= sphere.radius()
}

/// Enclosure test between a sphere container and an AABB.
#[inline]
pub fn enclosure_test_sphere_aabb(container: &BoundingSphere, contained: &Aabb) -> bool {
    sphere_encloses_points(container, &contained.vertices())
}

/// Enclosure test between a sphere container and an OBB.
#[inline]
pub fn enclosure_test_sphere_obb(container: &BoundingSphere, contained: &Obb) -> bool {
    sphere_encloses_points(container, &contained.vertices())
}

/// Enclosure test between spheres.
#[inline]
pub fn enclosure_test_sphere_sphere(container: &BoundingSphere, contained: &BoundingSphere) -> bool {
    sphere_encloses_ball(container, &contained.center(), contained.radius())
}

/// Enclosure test between a sphere container and a capsule.
#[inline]
pub fn enclosure_test_sphere_capsule(
    container: &BoundingSphere,
    contained: &BoundingCapsule,
) -> bool {
    let segment = contained.segment();
    sphere_encloses_ball(container, &segment.a, contained.radius())
        && sphere_encloses_ball(container, &segment.b, contained.radius())
}
