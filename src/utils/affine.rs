//! Helpers for homogeneous affine matrices.

use crate::math::{AffineMatrix, Matrix, Point, Real, Vector};

/// The upper-left 3x3 block (rotation and scale) of an affine matrix.
#[inline]
pub fn linear_part(m: &AffineMatrix<Real>) -> Matrix<Real> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

/// The translation column of an affine matrix.
#[inline]
pub fn translation_part(m: &AffineMatrix<Real>) -> Vector<Real> {
    m.fixed_view::<3, 1>(0, 3).into_owned()
}

/// Applies the affine part of `m` to `pt`. The projective row of `m` is ignored.
#[inline]
pub fn transform_point(m: &AffineMatrix<Real>, pt: &Point<Real>) -> Point<Real> {
    Point::from(linear_part(m) * pt.coords + translation_part(m))
}

/// Builds an affine matrix from its linear block and its translation.
///
/// The projective row of the result is always `[0, 0, 0, 1]`.
pub fn affine_from_parts(linear: &Matrix<Real>, translation: &Vector<Real>) -> AffineMatrix<Real> {
    let mut res = linear.to_homogeneous();
    res.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    res
}

/// The length of each column of the linear block of `m`.
#[inline]
pub fn column_norms(m: &AffineMatrix<Real>) -> Vector<Real> {
    let linear = linear_part(m);
    Vector::from_fn(|i, _| linear.column(i).norm())
}

/// The largest column length of the linear block of `m`.
///
/// Scaling a radius by this factor keeps a round volume conservative under non-uniform scale.
#[inline]
pub fn max_column_norm(m: &AffineMatrix<Real>) -> Real {
    column_norms(m).max()
}
