pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod tessellation;
pub mod window;

pub use error::{FenestraError, Result};
