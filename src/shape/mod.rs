//! Geometric primitives used by the bounding volumes.

pub use self::segment::Segment;
pub use self::triangle::Triangle;

mod segment;
mod triangle;
