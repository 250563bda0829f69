use bounding3d::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, BoundingVolume, Obb, Volume};
use bounding3d::math::Real;
use na::{Matrix4, Point3, Quaternion, Unit, UnitQuaternion, Vector3};
use oorandom::Rand32;

pub fn rand_in(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

pub fn rand_vector(rng: &mut Rand32, min: Real, max: Real) -> Vector3<Real> {
    Vector3::from_fn(|_, _| rand_in(rng, min, max))
}

pub fn rand_rotation(rng: &mut Rand32) -> UnitQuaternion<Real> {
    Unit::try_new(
        Quaternion::new(
            rand_in(rng, -1.0, 1.0),
            rand_in(rng, -1.0, 1.0),
            rand_in(rng, -1.0, 1.0),
            rand_in(rng, -1.0, 1.0),
        ),
        1.0e-5,
    )
    .unwrap_or(UnitQuaternion::identity())
}

/// A rotation, followed by a translation within `[-extent, extent]³`, optionally preceded by a
/// non-uniform scale.
pub fn rand_transform(rng: &mut Rand32, extent: Real, scaled: bool) -> Matrix4<Real> {
    let translation = Matrix4::new_translation(&rand_vector(rng, -extent, extent));
    let rotation = rand_rotation(rng).to_homogeneous();

    if scaled {
        let scale = Matrix4::new_nonuniform_scaling(&rand_vector(rng, 0.5, 2.0));
        translation * rotation * scale
    } else {
        translation * rotation
    }
}

/// A volume of a random kind with dimensions in `[min, max]`, not yet updated.
pub fn rand_local_volume(rng: &mut Rand32, min: Real, max: Real) -> Volume {
    match rng.rand_range(0..4) {
        0 => Aabb::new(rand_vector(rng, min, max)).into(),
        1 => Obb::new(rand_vector(rng, min, max)).into(),
        2 => BoundingSphere::new(rand_in(rng, min, max)).into(),
        _ => {
            let a = Point3::from(rand_vector(rng, -max, max));
            let b = Point3::from(rand_vector(rng, -max, max));
            BoundingCapsule::new(a, b, rand_in(rng, min, max)).into()
        }
    }
}

/// A volume of a random kind, updated with a random transform.
pub fn rand_volume(rng: &mut Rand32, extent: Real) -> Volume {
    let mut volume = rand_local_volume(rng, 0.1, 1.5);
    let scaled = rng.rand_float() < 0.5;
    volume.update(&rand_transform(rng, extent, scaled));
    volume
}
