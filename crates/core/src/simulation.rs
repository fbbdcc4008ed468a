//! Per-frame simulation state.
//!
//! One [`Simulation`] value owns the frame counter, the spawner, the
//! background field, and the camera position. The driving loop calls
//! [`Simulation::update`] once per display refresh and may hand any
//! [`Renderer`] to [`Simulation::render`].

use std::f32::consts::TAU;

use tracing::{debug, info};

use crate::background::BackgroundField;
use crate::config::SimConfig;
use crate::core_types::{Rgb, Vec3};
use crate::entity::Pose;
use crate::render::Renderer;
use crate::spawner::Spawner;

/// Complete state of the visualization between frames.
pub struct Simulation {
    config: SimConfig,
    camera_position: Vec3,
    spawner: Spawner,
    background: BackgroundField,
    frame_count: u64,
}

impl Simulation {
    /// Build the scene: spawner anchored on the +Z axis at a tenth of the
    /// screen extent (position and orientation alike), camera at the full
    /// extent, background field scattered around the origin.
    ///
    /// # Panics
    ///
    /// Panics if `config.frame_cycles` is zero.
    pub fn new(config: SimConfig) -> Self {
        assert!(config.frame_cycles > 0, "frame_cycles must be nonzero");

        let extent = config.max_screen();
        let anchor = Vec3::new(0.0, 0.0, extent / 10.0);
        let spawner = Spawner::new(Pose::new(anchor, anchor), config.default_fill_color);
        let background = BackgroundField::scatter(
            config.background_particle_count,
            extent,
            config.default_fill_color,
            config.background_active,
        );
        info!(
            frame_cycles = config.frame_cycles,
            background_particles = config.background_particle_count,
            "simulation initialized"
        );
        Self {
            camera_position: Vec3::new(0.0, 0.0, extent),
            config,
            spawner,
            background,
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn camera_position(&self) -> &Vec3 {
        &self.camera_position
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn background(&self) -> &BackgroundField {
        &self.background
    }

    /// Frames advanced so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one frame: derive the phase angle from the frame counter,
    /// wrapping every `frame_cycles` frames, and move the spawning
    /// particle.
    pub fn update(&mut self) {
        let wrapped = self.frame_count % u64::from(self.config.frame_cycles);
        let phase = TAU * (wrapped as f32) / (self.config.frame_cycles as f32);
        self.spawner.set_phase_angle(phase);
        debug!(
            frame = self.frame_count,
            angle = phase,
            position = ?self.spawner.spawn_position(),
            "frame advanced"
        );
        self.frame_count += 1;
    }

    /// Issue one frame's draw calls: camera, the three axis point lights,
    /// background clear, then the spawner and the background field.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let scale = self.config.max_screen();
        renderer.set_camera(&self.camera_position, &Vec3::zeros(), &Vec3::x());
        renderer.point_light(Rgb::WHITE, &Vec3::new(10.0 * scale, 0.0, 0.0));
        renderer.point_light(Rgb::WHITE, &Vec3::new(0.0, 10.0 * scale, 0.0));
        renderer.point_light(Rgb::WHITE, &Vec3::new(0.0, 0.0, 10.0 * scale));
        renderer.clear_background(self.config.background_color);
        self.spawner.draw(renderer);
        self.background.draw(renderer);
    }
}
