use crate::bounding_volume::{BoundingVolume, TypedVolume};
use crate::query::details::{enclosure_test_typed, intersection_test_typed};
use crate::query::{DefaultQueryDispatcher, QueryDispatcher, Unsupported};

/// How a bounding volume is placed relative to another one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// The volumes are separate.
    Disjoint,
    /// The volumes are intersecting, but the first one does not fully contain the second.
    Intersects,
    /// The first volume fully contains the second.
    Contains,
}

impl Containment {
    /// Combines the results of an enclosure test and of an intersection test.
    #[inline]
    pub fn from_tests(encloses: bool, intersects: bool) -> Self {
        if encloses {
            Containment::Contains
        } else if intersects {
            Containment::Intersects
        } else {
            Containment::Disjoint
        }
    }
}

/// Classifies how `v2` is placed relative to `v1`.
pub fn containment_test(
    v1: &dyn BoundingVolume,
    v2: &dyn BoundingVolume,
) -> Result<Containment, Unsupported> {
    DefaultQueryDispatcher.containment_test(v1, v2)
}

/// Classifies how `v2` is placed relative to `v1`, both being built-in volumes.
pub fn containment_test_typed(v1: TypedVolume<'_>, v2: TypedVolume<'_>) -> Containment {
    let encloses = enclosure_test_typed(v1, v2);
    Containment::from_tests(encloses, encloses || intersection_test_typed(v1, v2))
}
