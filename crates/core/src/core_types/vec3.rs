//! Vector type alias for 3D positions and directions.

use nalgebra::Vector3;

/// 3D vector type for positions, orientations, and directions.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, used throughout the
/// visualization for particle positions, spawner orientations, camera and
/// light placement.
pub type Vec3 = Vector3<f32>;
