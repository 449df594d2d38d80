pub mod preprocessing;
pub mod edges;
pub mod extraction;
pub mod simplification;
pub mod classification;
pub mod color;

pub use preprocessing::*;
pub use edges::*;
pub use extraction::*;
pub use simplification::*;
pub use classification::*;
pub use color::*;
