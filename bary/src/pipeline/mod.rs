pub mod config;
pub mod generator;
pub mod mem_file;
pub mod report;
pub mod sampler;
pub mod test_case;

pub use config::*;
pub use generator::*;
pub use mem_file::*;
pub use report::*;
pub use sampler::*;
pub use test_case::*;
