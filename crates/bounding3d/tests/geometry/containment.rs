use bounding3d::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb, TypedVolume};
use bounding3d::query::{containment_test, Containment};
use na::{Point3, Vector3};

#[test]
fn containment_classification() {
    let big = BoundingSphere::from_center(Point3::origin(), 3.0);
    let small = Aabb::from_half_extents(Point3::new(0.5, 0.0, 0.0), Vector3::repeat(0.5));
    let straddling = Aabb::from_half_extents(Point3::new(3.0, 0.0, 0.0), Vector3::repeat(0.5));
    let far = Aabb::from_half_extents(Point3::new(5.0, 0.0, 0.0), Vector3::repeat(0.5));

    assert_eq!(containment_test(&big, &small), Ok(Containment::Contains));
    assert_eq!(containment_test(&big, &straddling), Ok(Containment::Intersects));
    assert_eq!(containment_test(&big, &far), Ok(Containment::Disjoint));

    // The small box does not contain the big sphere, they only intersect.
    assert_eq!(containment_test(&small, &big), Ok(Containment::Intersects));
}

#[test]
fn typed_containment_for_every_container_kind() {
    let aabb = Aabb::from_half_extents(Point3::origin(), Vector3::new(2.0, 2.0, 2.0));
    let obb = aabb.to_obb();
    let sphere = BoundingSphere::from_center(Point3::origin(), 2.0);
    let capsule = BoundingCapsule::new_y(1.0, 2.0);
    let inner = BoundingCapsule::new_x(0.5, 0.25);

    for container in [
        TypedVolume::from(&aabb),
        TypedVolume::from(&obb),
        TypedVolume::from(&sphere),
        TypedVolume::from(&capsule),
    ] {
        let contained = TypedVolume::from(&inner);
        assert_eq!(container.containment(&contained), Containment::Contains);
        assert!(container.encloses(&contained));
        assert!(contained.is_enclosed_by(&container));
        assert_eq!(contained.containment(&container), Containment::Intersects);
    }
}
