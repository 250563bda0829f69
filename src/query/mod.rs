//! Non-persistent queries between bounding volumes.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::intersection_test()`](intersection_test()) to determine if two volumes overlap.
//! * [`query::enclosure_test()`](enclosure_test()) to determine if a volume fully contains another.
//! * [`query::containment_test()`](containment_test()) to classify two volumes as disjoint,
//!   intersecting, or contained.
//!
//! They accept any pair of [`BoundingVolume`](crate::bounding_volume::BoundingVolume) trait
//! objects and go through the [`DefaultQueryDispatcher`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above. For example `intersection_test_sphere_capsule` tests a sphere against a
//! capsule, both known at compile-time. They have the form `[operation]_[volume1]_[volume2]()`
//! where `[operation]` is `intersection_test` or `enclosure_test`, and `[volume1]` and
//! `[volume2]` are one of `aabb`, `obb`, `sphere` or `capsule`.

pub use self::containment::{containment_test, Containment};
pub use self::default_query_dispatcher::DefaultQueryDispatcher;
pub use self::enclosure_test::enclosure_test;
pub use self::error::Unsupported;
pub use self::intersection_test::intersection_test;
pub use self::query_dispatcher::{QueryDispatcher, QueryDispatcherChain};

pub mod closest_points;
mod containment;
mod default_query_dispatcher;
mod enclosure_test;
mod error;
mod intersection_test;
mod query_dispatcher;
pub mod sat;

/// Queries dedicated to specific pairs of bounding volumes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::containment::containment_test_typed;
    pub use super::default_query_dispatcher::resolve_typed;
    pub use super::enclosure_test::*;
    pub use super::intersection_test::*;
    pub use super::sat::*;
}
