// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{GeneratorError, PasswordGenerator};
pub use strength::analyze_strength;
