pub mod fixed_point;
pub mod packer;

pub use fixed_point::*;
pub use packer::*;
