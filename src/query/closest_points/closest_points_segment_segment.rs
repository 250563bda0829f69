use crate::math::{Point, Real};
use crate::shape::Segment;

/// Closest points between two segments.
#[inline]
pub fn closest_points_segment_segment(seg1: &Segment, seg2: &Segment) -> (Point<Real>, Point<Real>) {
    let (s, t) = closest_points_segment_segment_parameters(seg1, seg2);
    (seg1.point_at(s), seg2.point_at(t))
}

/// Squared distance between two segments.
///
/// The result does not depend on the order of the arguments: the closest points are computed
/// in both orders and the smallest distance is kept.
#[inline]
pub fn squared_distance_segment_segment(seg1: &Segment, seg2: &Segment) -> Real {
    let (p1, p2) = closest_points_segment_segment(seg1, seg2);
    let (q2, q1) = closest_points_segment_segment(seg2, seg1);
    na::distance_squared(&p1, &p2).min(na::distance_squared(&q1, &q2))
}

/// Parameters `(s, t)` of the closest points `seg1.point_at(s)` and `seg2.point_at(t)`
/// between two segments.
///
/// Both parameters are in `[0, 1]`. Degenerate segments are handled as points, and parallel
/// segments yield one of their closest pairs.
pub fn closest_points_segment_segment_parameters(seg1: &Segment, seg2: &Segment) -> (Real, Real) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let _eps = crate::math::DEFAULT_EPSILON;
    if a <= _eps && e <= _eps {
        s = 0.0;
        t = 0.0;
    } else if a <= _eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= _eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > _eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (s, t)
}
