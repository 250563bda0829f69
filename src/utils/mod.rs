//! Various unsorted geometrical and logical operators.

pub use self::affine::{
    affine_from_parts, column_norms, linear_part, max_column_norm, transform_point,
    translation_part,
};

mod affine;
