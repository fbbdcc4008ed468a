//! Rotation and translation of 3D vectors.
//!
//! Rotations are the standard right-handed matrices about the coordinate
//! axes, applied through the generic matrix-vector [`transform`]. All
//! functions are pure and return new vectors.

use nalgebra::Matrix3;

use crate::core_types::Vec3;

/// Apply a 3x3 transformation matrix to a vector.
///
/// Dimension agreement is enforced by the types: a `Matrix3` always
/// multiplies a length-3 vector, so a mismatched matrix/vector pair cannot
/// be constructed.
pub fn transform(transformation: &Matrix3<f32>, vector: &Vec3) -> Vec3 {
    transformation * vector
}

/// Rotate `vector` by `theta` radians about the X axis.
///
/// ```text
/// | 1     0          0     |
/// | 0  cos(t)    -sin(t)   |
/// | 0  sin(t)     cos(t)   |
/// ```
pub fn rotate_x(theta: f32, vector: &Vec3) -> Vec3 {
    let (sin, cos) = theta.sin_cos();
    let transformation = Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos, -sin, //
        0.0, sin, cos,
    );
    transform(&transformation, vector)
}

/// Rotate `vector` by `theta` radians about the Y axis.
///
/// ```text
/// |  cos(t)   0   sin(t)   |
/// |    0      1     0      |
/// | -sin(t)   0   cos(t)   |
/// ```
pub fn rotate_y(theta: f32, vector: &Vec3) -> Vec3 {
    let (sin, cos) = theta.sin_cos();
    let transformation = Matrix3::new(
        cos, 0.0, sin, //
        0.0, 1.0, 0.0, //
        -sin, 0.0, cos,
    );
    transform(&transformation, vector)
}

/// Rotate `vector` by `theta` radians about the Z axis.
///
/// ```text
/// | cos(t)   -sin(t)   0 |
/// | sin(t)    cos(t)   0 |
/// |   0         0      1 |
/// ```
pub fn rotate_z(theta: f32, vector: &Vec3) -> Vec3 {
    let (sin, cos) = theta.sin_cos();
    let transformation = Matrix3::new(
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    );
    transform(&transformation, vector)
}

/// Translate `vector` by `offset` (elementwise sum).
pub fn translate(offset: &Vec3, vector: &Vec3) -> Vec3 {
    offset + vector
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    use super::*;

    #[test]
    fn rotation_axes_are_right_handed() {
        assert_relative_eq!(rotate_x(FRAC_PI_2, &Vec3::y()), Vec3::z(), epsilon = 1e-6);
        assert_relative_eq!(rotate_y(FRAC_PI_2, &Vec3::z()), Vec3::x(), epsilon = 1e-6);
        assert_relative_eq!(rotate_z(FRAC_PI_2, &Vec3::x()), Vec3::y(), epsilon = 1e-6);
    }

    #[test]
    fn transform_applies_arbitrary_matrix() {
        let scale = Matrix3::new(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0);
        let out = transform(&scale, &Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(out, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn translate_sums_elementwise() {
        let out = translate(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(10.0, 20.0, 30.0));
        assert_relative_eq!(out, Vec3::new(11.0, 22.0, 33.0));
    }
}
