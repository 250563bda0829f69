use crate::geometry::random_volumes::{rand_local_volume, rand_transform, rand_volume};
use bounding3d::bounding_volume::{BoundingVolume, VolumeType};
use bounding3d::query::{enclosure_test, intersection_test};
use oorandom::Rand32;
use std::collections::HashSet;

#[test]
fn enclosed_volumes_intersect_their_container() {
    let mut rng = Rand32::new(1234);
    let mut enclosing_kinds = HashSet::new();

    for _ in 0..5000 {
        // Large containers around the origin, small volumes close to them.
        let mut container = rand_local_volume(&mut rng, 1.0, 2.5);
        container.update(&rand_transform(&mut rng, 0.3, false));
        let mut contained = rand_local_volume(&mut rng, 0.05, 0.3);
        contained.update(&rand_transform(&mut rng, 0.5, false));

        if container.encloses(&contained) == Ok(true) {
            let _ = enclosing_kinds.insert((container.volume_type(), contained.volume_type()));
            assert_eq!(container.intersects(&contained), Ok(true));
            assert_eq!(contained.is_enclosed_by(&container), Ok(true));
        }
    }

    // Every container kind was exercised.
    for kind in [VolumeType::Aabb, VolumeType::Obb, VolumeType::Sphere, VolumeType::Capsule] {
        assert!(enclosing_kinds.iter().any(|(container, _)| *container == kind));
    }
}

#[test]
fn far_volumes_are_never_enclosed() {
    let mut rng = Rand32::new(99);

    for _ in 0..1000 {
        let v1 = rand_volume(&mut rng, 2.0);
        let v2 = rand_volume(&mut rng, 2.0);

        if intersection_test(&v1, &v2) == Ok(false) {
            assert_eq!(enclosure_test(&v1, &v2), Ok(false));
            assert_eq!(enclosure_test(&v2, &v1), Ok(false));
        }
    }
}
