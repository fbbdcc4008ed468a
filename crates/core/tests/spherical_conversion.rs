//! Spherical conversion behavior, including the `atan2(x, y)` azimuth
//! convention and the round-trip against its inverse.

use std::f32::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use plasma_tube_core::{angle_between, cartesian_to_spherical, Vec3};

#[test]
fn self_angle_is_zero() {
    let vector = Vec3::new(3.0, -4.0, 12.0);
    let angle = angle_between(&vector, &vector).unwrap();
    assert_relative_eq!(angle, 0.0, epsilon = 1e-3);
}

#[test]
fn zero_magnitude_operands_have_no_angle() {
    let nonzero = Vec3::new(1.0, 2.0, 3.0);
    assert!(angle_between(&Vec3::zeros(), &nonzero).is_none());
    assert!(angle_between(&nonzero, &Vec3::zeros()).is_none());
    assert!(cartesian_to_spherical(&Vec3::zeros()).polar.is_none());
}

#[test]
fn azimuth_uses_x_over_y() {
    // atan2(x, y), not the conventional atan2(y, x): +X maps to pi/2 and
    // +Y maps to 0.
    assert_relative_eq!(
        cartesian_to_spherical(&Vec3::x()).azimuth,
        FRAC_PI_2,
        epsilon = 1e-6
    );
    assert_relative_eq!(cartesian_to_spherical(&Vec3::y()).azimuth, 0.0, epsilon = 1e-6);
    assert_relative_eq!(
        cartesian_to_spherical(&Vec3::new(-1.0, 0.0, 0.0)).azimuth,
        -FRAC_PI_2,
        epsilon = 1e-6
    );
}

#[test]
fn radius_is_magnitude() {
    let sph = cartesian_to_spherical(&Vec3::new(3.0, 4.0, 0.0));
    assert_relative_eq!(sph.radius, 5.0, epsilon = 1e-5);
}

#[test]
fn round_trip_recovers_triples() {
    // Inverse of this system's convention: azimuth from +Y toward +X,
    // polar from +Z.
    let triples = [
        (1.0_f32, 0.3_f32, 0.7_f32),
        (10.0, 1.2, -2.0),
        (2.5, FRAC_PI_2, 3.0),
        (0.25, 2.8, -0.4),
    ];
    for (radius, polar, azimuth) in triples {
        let vector = Vec3::new(
            radius * polar.sin() * azimuth.sin(),
            radius * polar.sin() * azimuth.cos(),
            radius * polar.cos(),
        );
        let sph = cartesian_to_spherical(&vector);
        assert_relative_eq!(sph.radius, radius, epsilon = 1e-4);
        assert_relative_eq!(sph.polar.unwrap(), polar, epsilon = 1e-3);
        assert_relative_eq!(sph.azimuth, azimuth, epsilon = 1e-3);
    }
}
