//! Pure conversions between rectangular and polar phasor representations.
//!
//! These functions are total over their mathematical domain and carry no
//! state. Angle-producing conversions normalize into the canonical ranges
//! `[0, 2π)` / `[0, 360)`; the degree↔radian scalings do not renormalize,
//! leaving that to the constructors in [`crate::phasor`].

use std::f64::consts::TAU;

use crate::math::{CScalar, Scalar};

/// Wraps an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` alone can round up to exactly 2π for tiny negative inputs,
/// so that boundary folds back to zero.
#[must_use]
pub fn wrap_radians(angle: Scalar) -> Scalar {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(angle: Scalar) -> Scalar {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Decomposes a rectangular value into `(modulus, angle)` with the angle in
/// radians, normalized to `[0, 2π)`.
#[must_use]
pub fn rectangular_to_polar_radians(z: CScalar) -> (Scalar, Scalar) {
    (z.norm(), wrap_radians(z.arg()))
}

/// Decomposes a rectangular value into `(modulus, angle)` with the angle in
/// degrees, normalized to `[0, 360)`.
#[must_use]
pub fn rectangular_to_polar_degrees(z: CScalar) -> (Scalar, Scalar) {
    (z.norm(), wrap_degrees(z.arg().to_degrees()))
}

/// Scales an angle from degrees to radians.
#[must_use]
pub fn degrees_to_radians(angle: Scalar) -> Scalar {
    angle.to_radians()
}

/// Scales an angle from radians to degrees.
#[must_use]
pub fn radians_to_degrees(angle: Scalar) -> Scalar {
    angle.to_degrees()
}

/// Builds the rectangular value `modulus·cos(angle) + j·modulus·sin(angle)`
/// for an angle in radians.
#[must_use]
pub fn polar_radians_to_rectangular(modulus: Scalar, angle: Scalar) -> CScalar {
    CScalar::new(modulus * angle.cos(), modulus * angle.sin())
}

/// Builds the rectangular value for a polar pair with the angle in degrees.
#[must_use]
pub fn polar_degrees_to_rectangular(modulus: Scalar, angle: Scalar) -> CScalar {
    polar_radians_to_rectangular(modulus, degrees_to_radians(angle))
}

/// Rounds `value` to `digits` decimal digits for presentation.
#[must_use]
pub fn round_to(value: Scalar, digits: usize) -> Scalar {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
