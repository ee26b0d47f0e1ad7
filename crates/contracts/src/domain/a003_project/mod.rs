pub mod aggregate;
pub mod sample_data;

pub use aggregate::*;
