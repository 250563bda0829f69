//! Closest points between segments and boxes, the building blocks of the capsule queries.

pub use self::closest_points_segment_local_box::{
    closest_points_segment_local_box, squared_distance_local_box_point,
};
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_parameters,
    squared_distance_segment_segment,
};

mod closest_points_segment_local_box;
mod closest_points_segment_segment;
