use crate::bounding_volume::Obb;
use crate::math::{Matrix, Real, Vector, DIM};

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Tolerance added to the absolute rotation terms of the OBB-OBB SAT.
///
/// When an edge of the first box is nearly parallel to an edge of the second one, their cross
/// product is close to zero and the corresponding axis test may report a spurious separation.
/// Inflating the projected radii by this amount removes these false positives.
pub const PARALLEL_EPSILON: Real = 1.0e-6;

/// A candidate separating axis between two OBBs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeparatingAxis {
    /// The `i`-th axis of the first OBB.
    Face1(usize),
    /// The `j`-th axis of the second OBB.
    Face2(usize),
    /// The cross product of the `i`-th axis of the first OBB and the `j`-th axis of the second.
    Edge(usize, usize),
}

impl SeparatingAxis {
    /// The world-space direction of this axis. Edge axes are not normalized.
    pub fn direction(&self, obb1: &Obb, obb2: &Obb) -> Vector<Real> {
        match *self {
            SeparatingAxis::Face1(i) => obb1.axes()[i].into_inner(),
            SeparatingAxis::Face2(j) => obb2.axes()[j].into_inner(),
            SeparatingAxis::Edge(i, j) => obb1.axes()[i].cross(&obb2.axes()[j].into_inner()),
        }
    }
}

/// Computes the gap between the projections of two OBBs on the line directed by `axis`.
///
/// Positive if the projections are disjoint, negative if they overlap. The result is scaled by
/// the norm of `axis`.
pub fn obb_obb_compute_separation_wrt_axis(obb1: &Obb, obb2: &Obb, axis: &Vector<Real>) -> Real {
    let dist = (obb2.center() - obb1.center()).dot(axis).abs();
    dist - obb1.projected_radius(axis) - obb2.projected_radius(axis)
}

/// Finds the first of the 15 candidate axes separating `obb1` and `obb2`.
///
/// The face axes of `obb1` are tested first, then the face axes of `obb2`, then the nine edge
/// cross products. Returns `None` if the boxes intersect (touching boxes intersect).
///
/// All the computations are done in the local frame of `obb1`. Swapping the arguments may change
/// the rounding of the projected intervals, so symmetric tests should check both orders.
pub fn obb_obb_find_separating_axis(obb1: &Obb, obb2: &Obb) -> Option<SeparatingAxis> {
    let a = obb1.half_extents();
    let b = obb2.half_extents();
    let axes1 = obb1.axes();
    let axes2 = obb2.axes();

    // Rotation expressing the axes of obb2 in the frame of obb1.
    let r = Matrix::from_fn(|i, j| axes1[i].dot(&axes2[j]));
    let abs_r = r.map(|e| e.abs() + PARALLEL_EPSILON);

    let d = obb2.center() - obb1.center();
    let t = Vector::from_fn(|i, _| axes1[i].dot(&d));

    for i in 0..DIM {
        let ra = a[i];
        let rb: Real = (0..DIM).map(|j| b[j] * abs_r[(i, j)]).sum();

        if t[i].abs() > ra + rb {
            return Some(SeparatingAxis::Face1(i));
        }
    }

    for j in 0..DIM {
        let ra: Real = (0..DIM).map(|i| a[i] * abs_r[(i, j)]).sum();
        let rb = b[j];

        if t.dot(&r.column(j)).abs() > ra + rb {
            return Some(SeparatingAxis::Face2(j));
        }
    }

    for i in 0..DIM {
        let (i1, i2) = ((i + 1) % DIM, (i + 2) % DIM);

        for j in 0..DIM {
            let (j1, j2) = ((j + 1) % DIM, (j + 2) % DIM);

            let ra = a[i1] * abs_r[(i2, j)] + a[i2] * abs_r[(i1, j)];
            let rb = b[j1] * abs_r[(i, j2)] + b[j2] * abs_r[(i, j1)];
            let dist = (t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)]).abs();

            if dist > ra + rb {
                return Some(SeparatingAxis::Edge(i, j));
            }
        }
    }

    None
}
