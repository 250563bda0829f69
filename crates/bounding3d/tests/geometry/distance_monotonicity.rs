use crate::geometry::random_volumes::{rand_in, rand_transform, rand_vector};
use bounding3d::bounding_volume::{Aabb, BoundingVolume, Obb};
use bounding3d::math::Real;
use na::{Point3, Vector3};
use oorandom::Rand32;

const STEP: Real = 0.05;
// Distance walked past the boundary.
const OVERSHOOT: Real = 2.0;

/// Walks from `start` along `dir` and checks that `sq_dist` is zero until `bound` is crossed,
/// then strictly increases.
///
/// `bound` is the distance along `dir` at which the walk leaves the volume. Samples closer
/// than `margin` to it are skipped.
fn check_walk(
    start: Point3<Real>,
    dir: Vector3<Real>,
    bound: Real,
    margin: Real,
    inside_tolerance: Real,
    sq_dist: impl Fn(&Point3<Real>) -> Real,
) {
    let mut last_outside: Option<Real> = None;
    let num_steps = ((bound + OVERSHOOT) / STEP) as usize + 1;

    for k in 0..num_steps {
        let t = k as Real * STEP;
        let d = sq_dist(&(start + dir * t));

        if t < bound - margin {
            assert!(d <= inside_tolerance, "t = {}, bound = {}, d = {}", t, bound, d);
        } else if t > bound + margin {
            if let Some(last) = last_outside {
                assert!(d > last, "t = {}, bound = {}, {} <= {}", t, bound, d, last);
            }
            last_outside = Some(d);
        }
    }

    assert!(last_outside.is_some());
}

#[test]
fn aabb_distance_grows_away_from_the_box() {
    let mut rng = Rand32::new(21);

    for _ in 0..100 {
        let mut aabb = Aabb::new(rand_vector(&mut rng, 0.1, 1.5));
        let scaled = rng.rand_float() < 0.5;
        aabb.update(&rand_transform(&mut rng, 3.0, scaled));

        let h = *aabb.half_extents();
        let u = rand_vector(&mut rng, -0.95, 0.95);
        let start = aabb.center() + h.component_mul(&u);

        for i in 0..3 {
            for sign in [-1.0, 1.0] {
                let dir = Vector3::ith(i, sign);
                let bound = h[i] - sign * (start[i] - aabb.center()[i]);

                check_walk(start, dir, bound, 1.0e-4, 0.0, |pt| {
                    aabb.squared_distance_to_point(pt)
                });
            }
        }
    }
}

#[test]
fn obb_distance_grows_away_from_the_box() {
    let mut rng = Rand32::new(22);

    for _ in 0..100 {
        let mut obb = Obb::new(rand_vector(&mut rng, 0.1, 1.5));
        let scaled = rng.rand_float() < 0.5;
        obb.update(&rand_transform(&mut rng, 3.0, scaled));

        let h = *obb.half_extents();
        let axes = obb.axes().map(|axis| axis.into_inner());
        let start = obb.center()
            + axes[0] * (h.x * rand_in(&mut rng, -0.95, 0.95))
            + axes[1] * (h.y * rand_in(&mut rng, -0.95, 0.95))
            + axes[2] * (h.z * rand_in(&mut rng, -0.95, 0.95));
        let local = obb.local_point(&start);

        for i in 0..3 {
            for sign in [-1.0, 1.0] {
                let dir = axes[i] * sign;
                let bound = h[i] - sign * local[i];

                check_walk(start, dir, bound, 1.0e-3, 1.0e-8, |pt| {
                    obb.squared_distance_to_point(pt)
                });
            }
        }
    }
}
