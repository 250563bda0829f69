use crate::bounding_volume::BoundingSphere;

/// Intersection test between spheres.
#[inline]
pub fn intersection_test_sphere_sphere(sphere1: &BoundingSphere, sphere2: &BoundingSphere) -> bool {
    let distance_squared = na::distance_squared(&sphere1.center(), &sphere2.center());
    let sum_radius = sphere1.radius() + sphere2.radius();
    distance_squared <= sum_radius * sum_radius
}
