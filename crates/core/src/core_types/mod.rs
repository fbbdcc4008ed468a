//! Core types and utilities

pub mod color;
pub mod vec3;

pub use color::Rgb;
pub use vec3::Vec3;
