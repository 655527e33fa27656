pub mod matrix;

pub use matrix::build_distance_matrix;
