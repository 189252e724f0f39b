pub mod exercises;

pub use exercises::*;
