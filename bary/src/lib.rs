pub mod encode;
pub mod error;
pub mod math;
pub mod pipeline;

pub use error::{Error, Result};
