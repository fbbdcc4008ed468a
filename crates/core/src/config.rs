//! Startup configuration constants.
//!
//! A serializable [`SimConfig`] built once at startup and handed to the
//! simulation. This is not a runtime-reconfigurable surface.

use serde::{Deserialize, Serialize};

use crate::core_types::Rgb;

/// Startup constants for the visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Window size in pixels (width, height).
    pub screen_size: (u32, u32),
    /// Frames per full sweep of the spawner's phase angle. Must be nonzero.
    pub frame_cycles: u32,
    /// Number of ambient particles scattered behind the spawner.
    pub background_particle_count: usize,
    /// Whether the background particles draw. Off by default.
    pub background_active: bool,
    /// Clear color.
    pub background_color: Rgb,
    /// Default particle fill color.
    pub default_fill_color: Rgb,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_size: (320, 200),
            frame_cycles: 360,
            background_particle_count: 100,
            background_active: false,
            background_color: Rgb::BLACK,
            default_fill_color: Rgb::WHITE,
        }
    }
}

impl SimConfig {
    /// Larger screen dimension, the length scale for camera, light, and
    /// spawner placement.
    pub fn max_screen(&self) -> f32 {
        self.screen_size.0.max(self.screen_size.1) as f32
    }
}
