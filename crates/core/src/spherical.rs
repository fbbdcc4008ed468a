//! Cartesian to spherical conversion.
//!
//! The polar angle is measured from the +Z axis, and the azimuth is
//! `atan2(x, y)` - measured from +Y toward +X, not the conventional
//! `atan2(y, x)`.

use crate::core_types::Vec3;

/// Spherical coordinates of a cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Vector magnitude, always >= 0.
    pub radius: f32,
    /// Angle from the +Z axis in `[0, pi]`, or `None` when the source
    /// vector has zero magnitude and no angle is defined.
    pub polar: Option<f32>,
    /// `atan2(x, y)` in `(-pi, pi]`.
    pub azimuth: f32,
}

/// Angle between two vectors in radians.
///
/// Returns `None` when either vector has zero magnitude; a zero vector has
/// no direction, so the angle is undefined rather than an error. The dot
/// product of the normalized vectors is clamped to `[-1, 1]` so
/// floating-point drift cannot push `acos` outside its domain.
pub fn angle_between(a: &Vec3, b: &Vec3) -> Option<f32> {
    if a.magnitude() == 0.0 || b.magnitude() == 0.0 {
        return None;
    }
    let dot = a.normalize().dot(&b.normalize());
    Some(dot.clamp(-1.0, 1.0).acos())
}

/// Convert a cartesian vector to [`Spherical`] coordinates.
pub fn cartesian_to_spherical(vector: &Vec3) -> Spherical {
    Spherical {
        radius: vector.magnitude(),
        polar: angle_between(&Vec3::z(), vector),
        azimuth: vector.x.atan2(vector.y),
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angle_between_orthogonal_axes() {
        let angle = angle_between(&Vec3::x(), &Vec3::y()).unwrap();
        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn angle_between_zero_vector_is_undefined() {
        assert_eq!(angle_between(&Vec3::zeros(), &Vec3::x()), None);
        assert_eq!(angle_between(&Vec3::x(), &Vec3::zeros()), None);
    }

    #[test]
    fn parallel_vectors_survive_rounding() {
        // Without clamping, the dot product of normalized parallel vectors
        // can land slightly above 1.0 and acos returns NaN.
        let v = Vec3::new(0.1, 0.2, 0.3);
        let angle = angle_between(&v, &(v * 3.0)).unwrap();
        assert!(angle.is_finite());
        assert!(angle < 1e-3);
    }

    #[test]
    fn poles_map_to_zero_and_pi() {
        let north = cartesian_to_spherical(&Vec3::z());
        assert_relative_eq!(north.polar.unwrap(), 0.0, epsilon = 1e-6);

        let south = cartesian_to_spherical(&(-Vec3::z()));
        assert_relative_eq!(south.polar.unwrap(), PI, epsilon = 1e-6);
    }
}
