pub mod fitness;
pub mod load;
