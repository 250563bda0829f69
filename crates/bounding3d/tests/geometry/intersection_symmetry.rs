use crate::geometry::random_volumes::rand_volume;
use bounding3d::bounding_volume::{BoundingVolume, VolumeType};
use oorandom::Rand32;

#[test]
fn intersection_does_not_depend_on_argument_order() {
    let mut rng = Rand32::new(7);
    let mut hits = 0;

    for _ in 0..5000 {
        let v1 = rand_volume(&mut rng, 2.0);
        let v2 = rand_volume(&mut rng, 2.0);

        let r12 = v1.intersects(&v2);
        let r21 = v2.intersects(&v1);
        assert_eq!(r12, r21, "asymmetric result between {:?} and {:?}", v1, v2);

        if r12 == Ok(true) {
            hits += 1;
        }
    }

    // Make sure both outcomes were exercised.
    assert!(hits > 100 && hits < 4900);
}

#[test]
fn typed_and_dynamic_queries_agree() {
    let mut rng = Rand32::new(11);

    for _ in 0..1000 {
        let v1 = rand_volume(&mut rng, 2.0);
        let v2 = rand_volume(&mut rng, 2.0);
        let (t1, t2) = (v1.as_typed(), v2.as_typed());

        assert_eq!(v1.intersects(&v2), Ok(t1.intersects(&t2)));
        assert_eq!(v1.encloses(&v2), Ok(t1.encloses(&t2)));
        assert_eq!(v1.is_enclosed_by(&v2), Ok(t2.encloses(&t1)));
        assert_eq!(bounding3d::query::intersection_test(&v1, &v2), Ok(t1.intersects(&t2)));
        assert_ne!(v1.volume_type(), VolumeType::Custom);
    }
}
