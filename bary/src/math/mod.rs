pub mod barycentric;
pub mod ivec2;
pub mod mat22;

pub use barycentric::*;
pub use ivec2::*;
pub use mat22::*;
