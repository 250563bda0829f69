use bounding3d::bounding_volume::{
    BoundingSphere, BoundingVolume, Obb, TypedVolume, VolumeType,
};
use bounding3d::math::{AffineMatrix, Point, Real};
use bounding3d::query::{
    self, Containment, DefaultQueryDispatcher, QueryDispatcher, Unsupported,
};
use na::{Point3, Vector3};

/// A user-defined volume reduced to a single point.
struct PointVolume(Point<Real>);

impl BoundingVolume for PointVolume {
    fn update(&mut self, transform: &AffineMatrix<Real>) {
        self.0 = Point::from(transform.fixed_view::<3, 1>(0, 3).into_owned());
    }

    fn center(&self) -> Point<Real> {
        self.0
    }

    fn volume_type(&self) -> VolumeType {
        VolumeType::Custom
    }

    fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
        None
    }
}

/// Handles pairs made of at least one `PointVolume` by treating points as zero-radius spheres.
struct PointDispatcher;

impl PointDispatcher {
    fn as_sphere(v: &dyn BoundingVolume) -> Option<BoundingSphere> {
        (v.volume_type() == VolumeType::Custom).then(|| BoundingSphere::from_center(v.center(), 0.0))
    }
}

impl QueryDispatcher for PointDispatcher {
    fn intersection_test(
        &self,
        v1: &dyn BoundingVolume,
        v2: &dyn BoundingVolume,
    ) -> Result<bool, Unsupported> {
        match (Self::as_sphere(v1), Self::as_sphere(v2)) {
            (Some(s1), Some(s2)) => Ok(s1.center() == s2.center()),
            (Some(s1), None) => s1.intersects(v2),
            (None, Some(s2)) => v1.intersects(&s2),
            (None, None) => Err(Unsupported),
        }
    }

    fn enclosure_test(
        &self,
        container: &dyn BoundingVolume,
        contained: &dyn BoundingVolume,
    ) -> Result<bool, Unsupported> {
        match (Self::as_sphere(container), Self::as_sphere(contained)) {
            (Some(s1), Some(s2)) => Ok(s1.center() == s2.center()),
            // A point never encloses a volume with a non-zero extent.
            (Some(_), None) => Ok(false),
            (None, Some(s2)) => container.encloses(&s2),
            (None, None) => Err(Unsupported),
        }
    }
}

#[test]
fn custom_volumes_are_unsupported_by_default() {
    let point = PointVolume(Point3::origin());
    let ball = BoundingSphere::new(1.0);

    assert_eq!(query::intersection_test(&point, &ball), Err(Unsupported));
    assert_eq!(query::intersection_test(&ball, &point), Err(Unsupported));
    assert_eq!(query::enclosure_test(&ball, &point), Err(Unsupported));
    assert_eq!(query::containment_test(&ball, &point), Err(Unsupported));
    assert_eq!(ball.intersects(&point), Err(Unsupported));
    assert_eq!(point.is_enclosed_by(&ball), Err(Unsupported));
    assert_eq!(
        Unsupported.to_string(),
        "query not supported between these bounding volumes"
    );
}

#[test]
fn chained_dispatcher_handles_custom_volumes() {
    let dispatcher = PointDispatcher.chain(DefaultQueryDispatcher);
    let mut point = PointVolume(Point3::origin());
    let ball = BoundingSphere::new(1.0);
    let obb = Obb::from_parts(
        Point3::new(3.0, 0.0, 0.0),
        Vector3::repeat(0.5),
        [Vector3::x_axis(), Vector3::y_axis(), Vector3::z_axis()],
    );

    assert_eq!(dispatcher.intersection_test(&point, &ball), Ok(true));
    assert_eq!(dispatcher.intersection_test(&ball, &point), Ok(true));
    assert_eq!(dispatcher.enclosure_test(&ball, &point), Ok(true));
    assert_eq!(dispatcher.enclosure_test(&point, &ball), Ok(false));
    assert_eq!(dispatcher.intersection_test(&point, &obb), Ok(false));
    assert_eq!(
        dispatcher.containment_test(&ball, &point),
        Ok(Containment::Contains)
    );

    point.update(&na::Matrix4::new_translation(&Vector3::new(3.2, 0.1, -0.4)));
    assert_eq!(dispatcher.intersection_test(&point, &obb), Ok(true));
    assert_eq!(dispatcher.intersection_test(&point, &ball), Ok(false));

    // Built-in pairs fall through to the default dispatcher.
    assert_eq!(dispatcher.intersection_test(&ball, &obb), Ok(false));
    assert_eq!(
        dispatcher.containment_test(&obb, &ball),
        Ok(Containment::Disjoint)
    );
}
