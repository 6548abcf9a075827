//! The immutable [`Phasor`] value and its arithmetic contract.
//!
//! A phasor is one quantity with three interchangeable representations:
//! rectangular, polar with the angle in radians, and polar with the angle in
//! degrees. All three store the same cached rectangular value, so arithmetic
//! is always evaluated on rectangular forms and the result re-expressed in
//! the left operand's representation. Angles are renormalized into
//! `[0, 2π)` / `[0, 360)` after every operation that produces a new angle,
//! including conjugation and exponentiation.

use std::f64::consts::PI;
use std::fmt;

use crate::conversions::{
    degrees_to_radians, polar_degrees_to_rectangular, polar_radians_to_rectangular,
    radians_to_degrees, rectangular_to_polar_degrees, rectangular_to_polar_radians, round_to,
    wrap_degrees, wrap_radians,
};
use crate::errors::PhasorError;
use crate::math::{CScalar, Scalar};

/// Decimal digits used for text rendering when none are specified.
pub const DEFAULT_PRECISION: usize = 2;

/// Representation tag selecting how a [`Phasor`] renders and which angle
/// unit its arithmetic results carry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Complex `real + j·imag` form.
    Rectangular,
    /// `modulus ∠ angle` with the angle in radians.
    PolarRadians,
    /// `modulus ∠ angle` with the angle in degrees.
    PolarDegrees,
}

/// Complex amplitude of a steady-state sinusoidal quantity.
///
/// Immutable once constructed: every arithmetic or conversion operation
/// returns a new `Phasor`. The modulus is non-negative, `degree` lies in
/// `[0, 360)` and `radian` in `[0, 2π)`, and the cached rectangular value is
/// kept consistent with the polar fields at all times.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    rectangular: CScalar,
    modulus: Scalar,
    radian: Scalar,
    degree: Scalar,
    representation: Representation,
    precision: usize,
}

impl Phasor {
    /// Constructs a rectangular-form phasor from a complex value, with the
    /// default display precision.
    #[must_use]
    pub fn rectangular(z: CScalar) -> Self {
        Self::rectangular_with_precision(z, DEFAULT_PRECISION)
    }

    /// Constructs a rectangular-form phasor with an explicit display
    /// precision.
    #[must_use]
    pub fn rectangular_with_precision(z: CScalar, precision: usize) -> Self {
        let (modulus, radian) = rectangular_to_polar_radians(z);
        Self {
            rectangular: z,
            modulus,
            radian,
            degree: wrap_degrees(radians_to_degrees(radian)),
            representation: Representation::Rectangular,
            precision,
        }
    }

    /// Constructs a polar-form phasor from a modulus and an angle in
    /// radians, with the default display precision.
    #[must_use]
    pub fn polar_radians(modulus: Scalar, radian: Scalar) -> Self {
        Self::polar_radians_with_precision(modulus, radian, DEFAULT_PRECISION)
    }

    /// Constructs a polar-radians phasor with an explicit display precision.
    ///
    /// A negative modulus is canonicalized by flipping its sign and rotating
    /// the angle by π, so the stored modulus is always non-negative.
    #[must_use]
    pub fn polar_radians_with_precision(modulus: Scalar, radian: Scalar, precision: usize) -> Self {
        let (modulus, radian) = canonical_polar(modulus, radian, PI);
        let radian = wrap_radians(radian);
        Self {
            rectangular: polar_radians_to_rectangular(modulus, radian),
            modulus,
            radian,
            degree: wrap_degrees(radians_to_degrees(radian)),
            representation: Representation::PolarRadians,
            precision,
        }
    }

    /// Constructs a polar-form phasor from a modulus and an angle in
    /// degrees, with the default display precision.
    #[must_use]
    pub fn polar_degrees(modulus: Scalar, degree: Scalar) -> Self {
        Self::polar_degrees_with_precision(modulus, degree, DEFAULT_PRECISION)
    }

    /// Constructs a polar-degrees phasor with an explicit display precision.
    ///
    /// Canonicalizes a negative modulus the same way as
    /// [`Self::polar_radians_with_precision`].
    #[must_use]
    pub fn polar_degrees_with_precision(modulus: Scalar, degree: Scalar, precision: usize) -> Self {
        let (modulus, degree) = canonical_polar(modulus, degree, 180.0);
        let degree = wrap_degrees(degree);
        Self {
            rectangular: polar_degrees_to_rectangular(modulus, degree),
            modulus,
            radian: wrap_radians(degrees_to_radians(degree)),
            degree,
            representation: Representation::PolarDegrees,
            precision,
        }
    }

    /// Returns a copy of this phasor rendering with `precision` decimal
    /// digits. Stored values are unaffected.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Magnitude of the phasor. Always non-negative.
    #[must_use]
    pub fn modulus(&self) -> Scalar {
        self.modulus
    }

    /// Angle in radians, normalized to `[0, 2π)`.
    #[must_use]
    pub fn radian(&self) -> Scalar {
        self.radian
    }

    /// Angle in degrees, normalized to `[0, 360)`. Available regardless of
    /// representation.
    #[must_use]
    pub fn degree(&self) -> Scalar {
        self.degree
    }

    /// Cached rectangular value.
    #[must_use]
    pub fn rectangular_value(&self) -> CScalar {
        self.rectangular
    }

    /// Representation tag of this phasor.
    #[must_use]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Decimal digits used when rendering to text.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Rendered form of the phasor, for display consumers.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Re-expresses this phasor in rectangular form. The underlying
    /// quantity and precision are unchanged.
    #[must_use]
    pub fn as_rectangular(&self) -> Self {
        Self {
            representation: Representation::Rectangular,
            ..*self
        }
    }

    /// Re-expresses this phasor in polar-radians form.
    #[must_use]
    pub fn as_polar_radians(&self) -> Self {
        Self {
            representation: Representation::PolarRadians,
            ..*self
        }
    }

    /// Re-expresses this phasor in polar-degrees form.
    #[must_use]
    pub fn as_polar_degrees(&self) -> Self {
        Self {
            representation: Representation::PolarDegrees,
            ..*self
        }
    }

    /// Adds another phasor. Scalar operands are rejected with
    /// [`PhasorError::UnsupportedOperand`]. The result carries this
    /// phasor's representation and precision.
    pub fn add(&self, rhs: impl Into<Operand>) -> Result<Self, PhasorError> {
        match rhs.into() {
            Operand::Phasor(p) => Ok(self.rebuild(self.rectangular + p.rectangular)),
            other => Err(PhasorError::UnsupportedOperand {
                operation: "addition",
                kind: other.kind(),
            }),
        }
    }

    /// Subtracts another phasor. Same operand and result rules as
    /// [`Self::add`].
    pub fn subtract(&self, rhs: impl Into<Operand>) -> Result<Self, PhasorError> {
        match rhs.into() {
            Operand::Phasor(p) => Ok(self.rebuild(self.rectangular - p.rectangular)),
            other => Err(PhasorError::UnsupportedOperand {
                operation: "subtraction",
                kind: other.kind(),
            }),
        }
    }

    /// Multiplies by a phasor or a real/complex scalar. The result carries
    /// this phasor's representation and precision.
    pub fn multiply(&self, rhs: impl Into<Operand>) -> Result<Self, PhasorError> {
        Ok(self.rebuild(self.rectangular * rhs.into().complex_value()))
    }

    /// Divides by a phasor or a real/complex scalar.
    ///
    /// A divisor whose rectangular value (or scalar value) is exactly zero
    /// is rejected with [`PhasorError::DivisionByZero`] before any division
    /// happens; arbitrarily small nonzero divisors are accepted.
    pub fn divide(&self, rhs: impl Into<Operand>) -> Result<Self, PhasorError> {
        let rhs = rhs.into();
        let divisor = rhs.complex_value();
        if divisor == CScalar::new(0.0, 0.0) {
            return Err(PhasorError::DivisionByZero {
                subject: rhs.division_subject(),
            });
        }
        Ok(self.rebuild(self.rectangular / divisor))
    }

    /// Raises the phasor to a real (or integer-valued) exponent via polar
    /// exponentiation: `modulus^exponent ∠ angle·exponent`. The result
    /// carries this phasor's representation and precision, with the angle
    /// renormalized.
    #[must_use]
    pub fn power(&self, exponent: Scalar) -> Self {
        let z = polar_radians_to_rectangular(self.modulus.powf(exponent), self.radian * exponent);
        self.rebuild(z)
    }

    /// Complex conjugate: rectangular form negates the imaginary part,
    /// polar forms negate the angle and renormalize into the canonical
    /// range.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        match self.representation {
            Representation::Rectangular => {
                Self::rectangular_with_precision(self.rectangular.conj(), self.precision)
            }
            Representation::PolarRadians => {
                Self::polar_radians_with_precision(self.modulus, -self.radian, self.precision)
            }
            Representation::PolarDegrees => {
                Self::polar_degrees_with_precision(self.modulus, -self.degree, self.precision)
            }
        }
    }

    /// Re-expresses a rectangular result in this phasor's representation,
    /// carrying its precision forward.
    fn rebuild(&self, z: CScalar) -> Self {
        match self.representation {
            Representation::Rectangular => Self::rectangular_with_precision(z, self.precision),
            Representation::PolarRadians => {
                let (modulus, radian) = rectangular_to_polar_radians(z);
                Self::polar_radians_with_precision(modulus, radian, self.precision)
            }
            Representation::PolarDegrees => {
                let (modulus, degree) = rectangular_to_polar_degrees(z);
                Self::polar_degrees_with_precision(modulus, degree, self.precision)
            }
        }
    }
}

/// Flips a negative modulus into the canonical non-negative form by
/// rotating the angle half a turn (`half_turn` is π or 180°).
fn canonical_polar(modulus: Scalar, angle: Scalar, half_turn: Scalar) -> (Scalar, Scalar) {
    if modulus < 0.0 {
        (-modulus, angle + half_turn)
    } else {
        (modulus, angle)
    }
}

impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.representation {
            Representation::Rectangular => {
                let re = round_to(self.rectangular.re, self.precision);
                let im = round_to(self.rectangular.im, self.precision);
                write!(f, "{re}{im:+}j")
            }
            Representation::PolarRadians => {
                let modulus = round_to(self.modulus, self.precision);
                let radian = round_to(self.radian, self.precision);
                write!(f, "{modulus} ∠ {radian} rad")
            }
            Representation::PolarDegrees => {
                let modulus = round_to(self.modulus, self.precision);
                let degree = round_to(self.degree, self.precision);
                write!(f, "{modulus} ∠ {degree}°")
            }
        }
    }
}

/// Closed set of operand kinds accepted at the arithmetic boundary.
///
/// Binary operators take `impl Into<Operand>`, so call sites pass a
/// [`Phasor`], an `f64`/`i32`, or a complex scalar directly; anything else
/// fails to compile, and the kinds an individual operation does not accept
/// are reported as [`PhasorError::UnsupportedOperand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A phasor operand.
    Phasor(Phasor),
    /// A plain real scalar.
    Real(Scalar),
    /// A plain complex scalar.
    Complex(CScalar),
}

impl Operand {
    /// Short operand-kind name used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Phasor(_) => "phasor",
            Self::Real(_) => "real scalar",
            Self::Complex(_) => "complex scalar",
        }
    }

    /// Rectangular value of the operand.
    fn complex_value(self) -> CScalar {
        match self {
            Self::Phasor(p) => p.rectangular,
            Self::Real(x) => CScalar::new(x, 0.0),
            Self::Complex(z) => z,
        }
    }

    /// Error-message subject for a zero divisor of this kind.
    fn division_subject(self) -> &'static str {
        match self {
            Self::Phasor(_) => "phasor",
            Self::Real(_) | Self::Complex(_) => "scalar",
        }
    }
}

impl From<Phasor> for Operand {
    fn from(p: Phasor) -> Self {
        Self::Phasor(p)
    }
}

impl From<&Phasor> for Operand {
    fn from(p: &Phasor) -> Self {
        Self::Phasor(*p)
    }
}

impl From<Scalar> for Operand {
    fn from(x: Scalar) -> Self {
        Self::Real(x)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Self::Real(Scalar::from(x))
    }
}

impl From<CScalar> for Operand {
    fn from(z: CScalar) -> Self {
        Self::Complex(z)
    }
}
