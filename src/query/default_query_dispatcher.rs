use crate::bounding_volume::{BoundingVolume, TypedVolume};
use crate::query::details::{enclosure_test_typed, intersection_test_typed};
use crate::query::{QueryDispatcher, Unsupported};

/// The default query dispatcher implementation.
///
/// Resolves every pair of built-in volumes with an exhaustive match, and returns
/// `Err(Unsupported)` as soon as one of the two volumes is user-defined.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultQueryDispatcher;

impl QueryDispatcher for DefaultQueryDispatcher {
    fn intersection_test(
        &self,
        v1: &dyn BoundingVolume,
        v2: &dyn BoundingVolume,
    ) -> Result<bool, Unsupported> {
        resolve_typed(v1, v2, intersection_test_typed)
    }

    fn enclosure_test(
        &self,
        container: &dyn BoundingVolume,
        contained: &dyn BoundingVolume,
    ) -> Result<bool, Unsupported> {
        resolve_typed(container, contained, enclosure_test_typed)
    }
}

/// Runs `query` on the built-in views of `v1` and `v2`.
///
/// Returns `Err(Unsupported)` if one of the volumes has no built-in view.
pub fn resolve_typed<'a, 'b, V1, V2, T>(
    v1: &'a V1,
    v2: &'b V2,
    query: impl FnOnce(TypedVolume<'a>, TypedVolume<'b>) -> T,
) -> Result<T, Unsupported>
where
    V1: ?Sized + BoundingVolume,
    V2: ?Sized + BoundingVolume,
{
    match (v1.as_typed_volume(), v2.as_typed_volume()) {
        (Some(t1), Some(t2)) => Ok(query(t1, t2)),
        _ => {
            log::debug!(
                "No built-in query between {:?} and {:?} bounding volumes.",
                v1.volume_type(),
                v2.volume_type()
            );
            Err(Unsupported)
        }
    }
}
