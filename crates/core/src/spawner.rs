//! The spawner: a fixed center particle plus a particle swept around an
//! oriented circle by the phase angle.

use crate::core_types::{Rgb, Vec3};
use crate::entity::{Particle, Pose};
use crate::render::Renderer;
use crate::transform::{rotate_y, rotate_z, translate};

/// Emits a pair of particles: one at the spawner's own position, one on a
/// circle of radius equal to the orientation's magnitude.
#[derive(Debug, Clone)]
pub struct Spawner {
    pose: Pose,
    phase_angle: f32,
    center: Particle,
    spawning: Particle,
}

impl Spawner {
    /// Build a spawner with both particles active: the center at the
    /// spawner's position, the spawning particle at the phase-zero spawn
    /// position.
    pub fn new(pose: Pose, fill: Rgb) -> Self {
        let mut spawner = Self {
            pose,
            phase_angle: 0.0,
            center: Particle::new(pose, fill, true),
            spawning: Particle::new(pose, fill, true),
        };
        spawner.spawning.pose.position = spawner.spawn_position();
        spawner
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Current animation phase in radians.
    pub fn phase_angle(&self) -> f32 {
        self.phase_angle
    }

    /// Circle radius, the orientation's magnitude.
    pub fn size(&self) -> f32 {
        self.pose.size()
    }

    pub fn center(&self) -> &Particle {
        &self.center
    }

    pub fn spawning(&self) -> &Particle {
        &self.spawning
    }

    /// Advance the animation to `phase_angle` radians and move the spawning
    /// particle to the matching spawn position.
    pub fn set_phase_angle(&mut self, phase_angle: f32) {
        self.phase_angle = phase_angle;
        self.spawning.pose.position = self.spawn_position();
    }

    /// Position of the spawning particle at the current phase angle.
    ///
    /// A point at `phase_angle` on a circle of radius [`Spawner::size`] in
    /// the XY plane, rotated to follow the orientation vector (first about
    /// Y by the negated polar angle, then about Z by the azimuth) and
    /// finally translated to the spawner's position.
    ///
    /// A rotation is skipped when its angle is zero or undefined
    /// (zero-magnitude orientation); in both cases the rotation would be
    /// the identity.
    pub fn spawn_position(&self) -> Vec3 {
        let size = self.size();
        let mut circle = Vec3::new(
            size * self.phase_angle.sin(),
            size * self.phase_angle.cos(),
            0.0,
        );

        let orientation = self.pose.orientation_spherical();
        if let Some(polar) = orientation.polar {
            if polar != 0.0 {
                circle = rotate_y(-polar, &circle);
            }
        }
        if orientation.azimuth != 0.0 {
            circle = rotate_z(orientation.azimuth, &circle);
        }
        if self.pose.position != Vec3::zeros() {
            circle = translate(&self.pose.position, &circle);
        }
        circle
    }

    /// Draw the center and spawning particles.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.center.draw(renderer);
        self.spawning.draw(renderer);
    }
}
