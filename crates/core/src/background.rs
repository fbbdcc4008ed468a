//! Ambient background particle field.

use rand::Rng;

use crate::core_types::{Rgb, Vec3};
use crate::entity::{Particle, Pose};
use crate::render::Renderer;

/// A scatter of ambient particles around the origin.
///
/// Inactive by default; the particles only draw when activated through
/// configuration.
#[derive(Debug, Clone)]
pub struct BackgroundField {
    particles: Vec<Particle>,
}

impl BackgroundField {
    /// Scatter `count` unit-size particles uniformly inside a cube of
    /// half-extent `extent` centered on the origin.
    pub fn scatter(count: usize, extent: f32, fill: Rgb, active: bool) -> Self {
        let mut rng = rand::rng();
        let particles = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    rng.random_range(-extent..=extent),
                    rng.random_range(-extent..=extent),
                    rng.random_range(-extent..=extent),
                );
                Particle::new(Pose::new(position, Vec3::x()), fill, active)
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for particle in &self.particles {
            particle.draw(renderer);
        }
    }
}
