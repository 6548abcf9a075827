//! Shared numerical primitives anchored on `num_complex`.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type backing every phasor's rectangular form.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the unit phasor `e^(j * theta)` for an angle in radians.
#[must_use]
pub fn unit_phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Computes the RMS magnitude of a sinusoidal waveform with peak value `peak`.
#[must_use]
pub fn sinusoid_rms(peak: Scalar) -> Scalar {
    peak / Scalar::sqrt(2.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn unit_phasor_has_unit_modulus() {
        let z = unit_phasor(std::f64::consts::FRAC_PI_3);
        assert_relative_eq!(z.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.arg(), std::f64::consts::FRAC_PI_3, epsilon = 1.0e-12);
    }

    #[test]
    fn rms_of_unit_peak() {
        assert_relative_eq!(sinusoid_rms(1.0), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1.0e-12);
    }
}
