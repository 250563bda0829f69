//! Query dispatcher system for extensible bounding-volume queries.
//!
//! A query dispatcher knows how to run the queries between pairs of bounding volumes. The free
//! functions of [`crate::query`] use the [`DefaultQueryDispatcher`](crate::query::DefaultQueryDispatcher),
//! which handles every pair of built-in volumes.
//!
//! Applications defining their own [`BoundingVolume`] types implement [`QueryDispatcher`] for
//! the pairs involving them, and chain it with the default dispatcher:
//!
//! ```ignore
//! let dispatcher = MyDispatcher.chain(DefaultQueryDispatcher);
//! // `MyDispatcher` is asked first. Whenever it returns `Unsupported`,
//! // the query is forwarded to the default dispatcher.
//! let hit = dispatcher.intersection_test(&my_volume, &sphere)?;
//! ```

use crate::bounding_volume::BoundingVolume;
use crate::query::{Containment, Unsupported};

/// Dispatcher for pairwise bounding-volume queries.
pub trait QueryDispatcher: Send + Sync {
    /// Tests whether two bounding volumes are intersecting.
    fn intersection_test(
        &self,
        v1: &dyn BoundingVolume,
        v2: &dyn BoundingVolume,
    ) -> Result<bool, Unsupported>;

    /// Tests whether `container` fully contains `contained`.
    fn enclosure_test(
        &self,
        container: &dyn BoundingVolume,
        contained: &dyn BoundingVolume,
    ) -> Result<bool, Unsupported>;

    /// Classifies how `v2` is placed relative to `v1`.
    fn containment_test(
        &self,
        v1: &dyn BoundingVolume,
        v2: &dyn BoundingVolume,
    ) -> Result<Containment, Unsupported> {
        let encloses = self.enclosure_test(v1, v2)?;
        let intersects = encloses || self.intersection_test(v1, v2)?;
        Ok(Containment::from_tests(encloses, intersects))
    }

    /// Construct a `QueryDispatcher` that falls back on `other` for cases not handled by `self`
    fn chain<U: QueryDispatcher>(self, other: U) -> QueryDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        QueryDispatcherChain(self, other)
    }
}

/// The composition of two dispatchers
pub struct QueryDispatcherChain<T, U>(T, U);

macro_rules! chain_method {
    ($name:ident ( $( $arg:ident : $ty:ty,)*) -> $result:ty) => {
        fn $name(&self, $($arg : $ty,)*
        ) -> Result<$result, Unsupported> {
            (self.0).$name($($arg,)*)
                .or_else(|Unsupported| (self.1).$name($($arg,)*))
        }
    }
}

impl<T, U> QueryDispatcher for QueryDispatcherChain<T, U>
where
    T: QueryDispatcher,
    U: QueryDispatcher,
{
    chain_method!(intersection_test(
        v1: &dyn BoundingVolume,
        v2: &dyn BoundingVolume,
    ) -> bool);

    chain_method!(enclosure_test(
        container: &dyn BoundingVolume,
        contained: &dyn BoundingVolume,
    ) -> bool);
}
