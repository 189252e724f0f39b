pub mod exercise;
pub mod user;

// Re-export all models for easier imports
pub use exercise::*;
pub use user::*;
