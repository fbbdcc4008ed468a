//! Plasma Tube Core Library
//!
//! Computed core of a generative 3D visualization: a rotating spawner emits
//! a pair of particles whose positions trace a circle derived from
//! spherical-coordinate transforms. This crate holds the vector math
//! (axis rotations, cartesian/spherical conversion), the entity model, the
//! per-frame simulation state, and the configuration constants. Putting
//! pixels on screen is left to an external collaborator behind the
//! [`Renderer`] trait; the demo frontends fill that role.
//!
//! ```
//! use plasma_tube_core::{SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default());
//! sim.update();
//! let position = sim.spawner().spawn_position();
//! assert!(position.magnitude() > 0.0);
//! ```

// Core types and utilities
pub mod core_types;

// Vector math
pub mod spherical;
pub mod transform;

// Scene model
pub mod background;
pub mod config;
pub mod entity;
pub mod render;
pub mod simulation;
pub mod spawner;

// Re-export core types
pub use core_types::{Rgb, Vec3};

// Re-export math helpers
pub use spherical::{angle_between, cartesian_to_spherical, Spherical};
pub use transform::{rotate_x, rotate_y, rotate_z, transform, translate};

// Re-export scene types
pub use background::BackgroundField;
pub use config::SimConfig;
pub use entity::{Particle, Pose};
pub use render::{Renderer, TraceRenderer};
pub use simulation::Simulation;
pub use spawner::Spawner;
