//! Convenience re-exports for phasor analysis.

pub use crate::conversions::{
    degrees_to_radians, polar_degrees_to_rectangular, polar_radians_to_rectangular,
    radians_to_degrees, rectangular_to_polar_degrees, rectangular_to_polar_radians, round_to,
};
pub use crate::errors::PhasorError;
pub use crate::math::{sinusoid_rms, unit_phasor, CScalar, Scalar};
pub use crate::phasor::{Operand, Phasor, Representation, DEFAULT_PRECISION};
pub use crate::symmetrical::{
    inverse_transform_matrix, rotation_operator, transform_matrix, SymmetricalComponents,
    UnbalancedPhases, ROTATION_DEGREES,
};
