use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Segment;
use arrayvec::ArrayVec;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Squared distance between `pt` and the box centered at the origin with the given half-extents.
#[inline]
pub fn squared_distance_local_box_point(half_extents: &Vector<Real>, pt: &Point<Real>) -> Real {
    let mut sq_dist = 0.0;

    for i in 0..DIM {
        let excess = pt[i].abs() - half_extents[i];
        if excess > 0.0 {
            sq_dist += excess * excess;
        }
    }

    sq_dist
}

/// Closest point between a segment and a box centered at the origin with the given half-extents.
///
/// Returns the squared distance between the segment and the box, and the parameter `t` of the
/// point of the segment achieving it (`seg.point_at(t)`). The squared distance is zero if the
/// segment touches or crosses the box.
///
/// The squared distance from the box is a piecewise-quadratic function of `t`: it changes
/// expression only where the segment crosses one of the planes bounding a slab of the box.
/// Each piece is minimized exactly, so the result is the true minimum over the whole segment.
pub fn closest_points_segment_local_box(seg: &Segment, half_extents: &Vector<Real>) -> (Real, Real) {
    let origin = seg.a.coords;
    let dir = seg.scaled_direction();

    // The segment ends and at most two slab crossings per axis.
    let mut breakpoints = ArrayVec::<Real, 8>::new();
    breakpoints.push(0.0);
    breakpoints.push(1.0);

    for i in 0..DIM {
        if dir[i] != 0.0 {
            for bound in [-half_extents[i], half_extents[i]] {
                let t = (bound - origin[i]) / dir[i];
                if t > 0.0 && t < 1.0 {
                    breakpoints.push(t);
                }
            }
        }
    }

    breakpoints.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut best_sq_dist = Real::MAX;
    let mut best_t = 0.0;

    for piece in breakpoints.windows(2) {
        let (t0, t1) = (piece[0], piece[1]);
        let mid = (t0 + t1) * 0.5;

        // Coefficients of `qa * t² + qb * t + qc` on this piece. Only the axes where the
        // segment lies outside of its slab contribute.
        let mut qa = 0.0;
        let mut qb = 0.0;

        for i in 0..DIM {
            let coord = origin[i] + dir[i] * mid;
            let offset = if coord > half_extents[i] {
                origin[i] - half_extents[i]
            } else if coord < -half_extents[i] {
                origin[i] + half_extents[i]
            } else {
                continue;
            };

            qa += dir[i] * dir[i];
            qb += 2.0 * dir[i] * offset;
        }

        let t = if qa > 0.0 {
            na::clamp(-qb / (2.0 * qa), t0, t1)
        } else {
            t0
        };

        let sq_dist = squared_distance_local_box_point(half_extents, &seg.point_at(t));

        if sq_dist < best_sq_dist {
            best_sq_dist = sq_dist;
            best_t = t;
        }
    }

    (best_sq_dist, best_t)
}
