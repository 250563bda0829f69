/// Error indicating that a query is not supported between two bounding volumes.
///
/// Queries between the built-in volumes always succeed. This error is returned when one of the
/// volumes is a user-defined [`BoundingVolume`](crate::bounding_volume::BoundingVolume) that no
/// [`QueryDispatcher`](crate::query::QueryDispatcher) knows how to handle.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bounding3d::bounding_volume::{BoundingSphere, BoundingVolume, TypedVolume, VolumeType};
/// use bounding3d::math::{AffineMatrix, Point, Real};
/// use bounding3d::query::{intersection_test, Unsupported};
///
/// struct Marker;
///
/// impl BoundingVolume for Marker {
///     fn update(&mut self, _: &AffineMatrix<Real>) {}
///     fn center(&self) -> Point<Real> {
///         Point::origin()
///     }
///     fn volume_type(&self) -> VolumeType {
///         VolumeType::Custom
///     }
///     fn as_typed_volume(&self) -> Option<TypedVolume<'_>> {
///         None
///     }
/// }
///
/// let ball = BoundingSphere::new(1.0);
/// assert_eq!(intersection_test(&ball, &Marker), Err(Unsupported));
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("query not supported between these bounding volumes")]
pub struct Unsupported;
