//! Scene entities: a shared pose value plus per-variant drawing.
//!
//! Every entity carries a [`Pose`] as plain data; drawing goes through the
//! [`Renderer`] seam so the core stays free of graphics dependencies.

use serde::{Deserialize, Serialize};

use crate::core_types::{Rgb, Vec3};
use crate::render::Renderer;
use crate::spherical::{cartesian_to_spherical, Spherical};

/// Position and orientation of an entity.
///
/// The orientation's magnitude doubles as the entity's size: a particle
/// draws as a sphere of that radius and a spawner sweeps a circle of that
/// radius. Zero-magnitude orientations are tolerated; dependent angle
/// computations return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Vec3) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Entity size: the orientation's magnitude.
    pub fn size(&self) -> f32 {
        self.orientation.magnitude()
    }

    pub fn position_spherical(&self) -> Spherical {
        cartesian_to_spherical(&self.position)
    }

    pub fn orientation_spherical(&self) -> Spherical {
        cartesian_to_spherical(&self.orientation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            orientation: Vec3::x(),
        }
    }
}

/// A point entity rendered as a filled sphere of radius [`Pose::size`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pose: Pose,
    pub fill: Rgb,
    /// Inactive particles are skipped entirely when drawing.
    pub active: bool,
}

impl Particle {
    pub fn new(pose: Pose, fill: Rgb, active: bool) -> Self {
        Self { pose, fill, active }
    }

    pub fn size(&self) -> f32 {
        self.pose.size()
    }

    /// Draw as a filled sphere at the particle's position.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.active {
            return;
        }
        renderer.push_matrix();
        renderer.fill(self.fill);
        renderer.translate(&self.pose.position);
        renderer.draw_sphere(self.size());
        renderer.pop_matrix();
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_pose_is_origin_facing_x() {
        let pose = Pose::default();
        assert_eq!(pose.position, Vec3::zeros());
        assert_eq!(pose.orientation, Vec3::x());
        assert_relative_eq!(pose.size(), 1.0);
    }

    #[test]
    fn size_is_orientation_magnitude() {
        let pose = Pose::new(Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(pose.size(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn spherical_accessors_convert_each_vector() {
        let pose = Pose::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(4.0, 0.0, 0.0));
        let position = pose.position_spherical();
        assert_relative_eq!(position.radius, 2.0, epsilon = 1e-5);
        assert_relative_eq!(position.polar.unwrap(), 0.0, epsilon = 1e-5);

        let orientation = pose.orientation_spherical();
        assert_relative_eq!(orientation.radius, 4.0, epsilon = 1e-5);
        assert_relative_eq!(orientation.polar.unwrap(), FRAC_PI_2, epsilon = 1e-5);
        assert_relative_eq!(orientation.azimuth, FRAC_PI_2, epsilon = 1e-5);
    }
}
