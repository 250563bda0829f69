use crate::geometry::random_volumes::{rand_local_volume, rand_transform};
use bounding3d::bounding_volume::{BoundingVolume, Volume};
use na::Matrix4;
use oorandom::Rand32;

#[test]
fn identity_update_keeps_initial_dimensions() {
    let mut rng = Rand32::new(3);

    for _ in 0..200 {
        let initial = rand_local_volume(&mut rng, 0.1, 2.0);
        let mut updated = initial;
        updated.update(&Matrix4::identity());

        match (initial, updated) {
            (Volume::Aabb(a), Volume::Aabb(b)) => {
                assert_eq!(a.half_extents(), b.half_extents());
                assert_eq!(b.half_extents(), b.initial_half_extents());
                assert_eq!(a.center(), b.center());
            }
            (Volume::Obb(a), Volume::Obb(b)) => assert_eq!(a, b),
            (Volume::Sphere(a), Volume::Sphere(b)) => assert_eq!(a, b),
            (Volume::Capsule(a), Volume::Capsule(b)) => assert_eq!(a, b),
            _ => unreachable!(),
        }
    }
}

#[test]
fn update_is_idempotent() {
    let mut rng = Rand32::new(5);

    for i in 0..500 {
        let mut volume = rand_local_volume(&mut rng, 0.1, 2.0);
        let transform = rand_transform(&mut rng, 10.0, i % 2 == 0);

        volume.update(&transform);
        let once = volume;
        volume.update(&transform);
        assert_eq!(once, volume);

        // Updating again after another transform does not accumulate anything.
        volume.update(&rand_transform(&mut rng, 10.0, true));
        volume.update(&transform);
        assert_eq!(once, volume);
    }
}
