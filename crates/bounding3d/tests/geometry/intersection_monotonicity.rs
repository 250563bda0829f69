use crate::geometry::random_volumes::{rand_rotation, rand_volume};
use bounding3d::bounding_volume::{BoundingSphere, BoundingVolume};
use bounding3d::math::Real;
use na::Vector3;
use oorandom::Rand32;

#[test]
fn receding_sphere_stops_intersecting_once() {
    let mut rng = Rand32::new(2024);

    for _ in 0..300 {
        let volume = rand_volume(&mut rng, 1.0);
        let dir = rand_rotation(&mut rng) * Vector3::x();
        let mut sphere = BoundingSphere::new(0.25);
        let mut was_intersecting = true;

        for k in 0..200 {
            let center = volume.center() + dir * (k as Real * 0.05);
            sphere.update(&na::Matrix4::new_translation(&center.coords));
            let intersecting = volume.intersects(&sphere) == Ok(true);

            if k == 0 {
                assert!(intersecting);
            }

            // Once the sphere has left the volume, moving farther never brings it back.
            assert!(was_intersecting || !intersecting);
            was_intersecting = intersecting;
        }

        assert!(!was_intersecting);
    }
}
