//! Fortescue symmetrical-components transform over phasor arithmetic.
//!
//! An unbalanced three-phase set `[A, B, C]` decomposes into zero, positive,
//! and negative sequence components through `T_inv`, and a sequence set
//! reconstructs the phases through `T`, where both matrices are built from
//! the unit rotation operator `a = 1∠120°`:
//!
//! ```text
//! T     = [[1, 1,  1 ],          T_inv = (1/3) · [[1, 1,  1 ],
//!          [1, a², a ],                           [1, a,  a²],
//!          [1, a,  a²]]                           [1, a², a ]]
//! ```
//!
//! The matrices are explicit `[[Phasor; 3]; 3]` values and the products are
//! written out as linear combinations of [`Phasor`] operations, so the left
//! operand's representation rule applies to every element.

use std::fmt;

use crate::errors::PhasorError;
use crate::phasor::{Operand, Phasor, DEFAULT_PRECISION};

/// Angle of the rotation operator `a` in degrees.
pub const ROTATION_DEGREES: f64 = 120.0;

/// The unit rotation operator `a = 1∠120°` in polar-degrees form, rendering
/// with `precision` digits.
#[must_use]
pub fn rotation_operator(precision: usize) -> Phasor {
    Phasor::polar_degrees_with_precision(1.0, ROTATION_DEGREES, precision)
}

/// The forward transform matrix `T` mapping sequence components to phases.
#[must_use]
pub fn transform_matrix(precision: usize) -> [[Phasor; 3]; 3] {
    let one = Phasor::polar_degrees_with_precision(1.0, 0.0, precision);
    let a = rotation_operator(precision);
    let a2 = a.power(2.0);
    [[one, one, one], [one, a2, a], [one, a, a2]]
}

/// The inverse transform matrix `T_inv = (1/3)·[[1,1,1],[1,a,a²],[1,a²,a]]`
/// mapping phases to sequence components.
#[must_use]
pub fn inverse_transform_matrix(precision: usize) -> [[Phasor; 3]; 3] {
    let third = |unit: Phasor| {
        Phasor::polar_degrees_with_precision(unit.modulus() / 3.0, unit.degree(), precision)
    };
    let one = Phasor::polar_degrees_with_precision(1.0, 0.0, precision);
    let a = rotation_operator(precision);
    let a2 = a.power(2.0);
    [
        [third(one), third(one), third(one)],
        [third(one), third(a), third(a2)],
        [third(one), third(a2), third(a)],
    ]
}

/// Multiplies a fixed 3×3 phasor matrix by a 3-vector of phasors, row by
/// row. Every element follows the representation of the matrix entry on the
/// left of each product.
fn mat_vec(matrix: &[[Phasor; 3]; 3], vector: &[Phasor; 3]) -> Result<[Phasor; 3], PhasorError> {
    let mut out = [vector[0]; 3];
    for (row, slot) in matrix.iter().zip(out.iter_mut()) {
        let sum = row[0]
            .multiply(vector[0])?
            .add(row[1].multiply(vector[1])?)?
            .add(row[2].multiply(vector[2])?)?;
        *slot = sum;
    }
    Ok(out)
}

/// Validates that a transform argument is a phasor, naming the offending
/// position otherwise.
fn expect_phasor(arg: Operand, position: &'static str) -> Result<Phasor, PhasorError> {
    match arg {
        Operand::Phasor(p) => Ok(p),
        other => Err(PhasorError::UnsupportedArgumentType {
            argument: position,
            kind: other.kind(),
        }),
    }
}

/// Zero, positive, and negative sequence components of a three-phase set.
///
/// Produced only by the unbalanced→sequence transform. Immutable and owning:
/// it holds the three components `A0, A1, A2` plus their expansion onto the
/// three phases of each sequence system.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricalComponents {
    components: [Phasor; 3],
    zero: [Phasor; 3],
    positive: [Phasor; 3],
    negative: [Phasor; 3],
}

impl SymmetricalComponents {
    /// Decomposes phases `A, B, C` into sequence components with the default
    /// display precision.
    pub fn from_unbalanced(
        a: impl Into<Operand>,
        b: impl Into<Operand>,
        c: impl Into<Operand>,
    ) -> Result<Self, PhasorError> {
        Self::from_unbalanced_with_precision(a, b, c, DEFAULT_PRECISION)
    }

    /// Decomposes phases `A, B, C` into sequence components.
    ///
    /// `precision` applies to every phasor constructed by the transform,
    /// including the matrix entries. Arguments must be phasors; a scalar in
    /// any position fails with [`PhasorError::UnsupportedArgumentType`]
    /// naming that position.
    pub fn from_unbalanced_with_precision(
        a: impl Into<Operand>,
        b: impl Into<Operand>,
        c: impl Into<Operand>,
        precision: usize,
    ) -> Result<Self, PhasorError> {
        let a = expect_phasor(a.into(), "A")?;
        let b = expect_phasor(b.into(), "B")?;
        let c = expect_phasor(c.into(), "C")?;

        let components = mat_vec(&inverse_transform_matrix(precision), &[a, b, c])?;
        let rot = rotation_operator(precision);
        let rot2 = rot.power(2.0);

        // Zero sequence is identical on all three phases; positive sequence
        // lags A by a² on B and a on C; negative sequence is the mirror.
        let zero = [components[0]; 3];
        let positive = [
            components[1],
            components[1].multiply(rot2)?,
            components[1].multiply(rot)?,
        ];
        let negative = [
            components[2],
            components[2].multiply(rot)?,
            components[2].multiply(rot2)?,
        ];

        Ok(Self {
            components,
            zero,
            positive,
            negative,
        })
    }

    /// Zero-sequence component `A0`.
    #[must_use]
    pub fn zero(&self) -> &Phasor {
        &self.components[0]
    }

    /// Positive-sequence component `A1`.
    #[must_use]
    pub fn positive(&self) -> &Phasor {
        &self.components[1]
    }

    /// Negative-sequence component `A2`.
    #[must_use]
    pub fn negative(&self) -> &Phasor {
        &self.components[2]
    }

    /// The three components `[A0, A1, A2]`.
    #[must_use]
    pub fn components(&self) -> &[Phasor; 3] {
        &self.components
    }

    /// Zero-sequence system expressed on phases `[A0, B0, C0]`.
    #[must_use]
    pub fn zero_phases(&self) -> &[Phasor; 3] {
        &self.zero
    }

    /// Positive-sequence system expressed on phases `[A1, B1, C1]`.
    #[must_use]
    pub fn positive_phases(&self) -> &[Phasor; 3] {
        &self.positive
    }

    /// Negative-sequence system expressed on phases `[A2, B2, C2]`.
    #[must_use]
    pub fn negative_phases(&self) -> &[Phasor; 3] {
        &self.negative
    }

    /// Re-expresses every stored phasor in rectangular form.
    #[must_use]
    pub fn as_rectangular(&self) -> Self {
        self.map(|p| p.as_rectangular())
    }

    /// Re-expresses every stored phasor in polar-radians form.
    #[must_use]
    pub fn as_polar_radians(&self) -> Self {
        self.map(|p| p.as_polar_radians())
    }

    /// Re-expresses every stored phasor in polar-degrees form.
    #[must_use]
    pub fn as_polar_degrees(&self) -> Self {
        self.map(|p| p.as_polar_degrees())
    }

    fn map(&self, f: impl Fn(&Phasor) -> Phasor) -> Self {
        let apply = |set: &[Phasor; 3]| [f(&set[0]), f(&set[1]), f(&set[2])];
        Self {
            components: apply(&self.components),
            zero: apply(&self.zero),
            positive: apply(&self.positive),
            negative: apply(&self.negative),
        }
    }
}

impl fmt::Display for SymmetricalComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A0 - {}", self.zero[0])?;
        writeln!(f, "A1 - {}", self.positive[0])?;
        writeln!(f, "A2 - {}", self.negative[0])?;
        writeln!(f)?;
        writeln!(f, "B0 - {}", self.zero[1])?;
        writeln!(f, "B1 - {}", self.positive[1])?;
        writeln!(f, "B2 - {}", self.negative[1])?;
        writeln!(f)?;
        writeln!(f, "C0 - {}", self.zero[2])?;
        writeln!(f, "C1 - {}", self.positive[2])?;
        write!(f, "C2 - {}", self.negative[2])
    }
}

/// Three phase phasors `A, B, C` of an unbalanced system.
///
/// Produced by the sequence→unbalanced transform, or supplied directly as
/// transform input. Immutable and owning.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UnbalancedPhases {
    phases: [Phasor; 3],
}

impl UnbalancedPhases {
    /// Wraps three caller-supplied phase phasors.
    #[must_use]
    pub fn new(a: Phasor, b: Phasor, c: Phasor) -> Self {
        Self { phases: [a, b, c] }
    }

    /// Reconstructs phases from sequence components `A0, A1, A2` with the
    /// default display precision.
    pub fn from_sequence(
        a0: impl Into<Operand>,
        a1: impl Into<Operand>,
        a2: impl Into<Operand>,
    ) -> Result<Self, PhasorError> {
        Self::from_sequence_with_precision(a0, a1, a2, DEFAULT_PRECISION)
    }

    /// Reconstructs phases from sequence components via `T · [A0, A1, A2]`.
    ///
    /// Same argument validation and precision behavior as
    /// [`SymmetricalComponents::from_unbalanced_with_precision`].
    pub fn from_sequence_with_precision(
        a0: impl Into<Operand>,
        a1: impl Into<Operand>,
        a2: impl Into<Operand>,
        precision: usize,
    ) -> Result<Self, PhasorError> {
        let a0 = expect_phasor(a0.into(), "A0")?;
        let a1 = expect_phasor(a1.into(), "A1")?;
        let a2 = expect_phasor(a2.into(), "A2")?;
        let phases = mat_vec(&transform_matrix(precision), &[a0, a1, a2])?;
        Ok(Self { phases })
    }

    /// Decomposes this set into its symmetrical components, carrying phase
    /// A's display precision through the transform.
    pub fn to_sequence(&self) -> Result<SymmetricalComponents, PhasorError> {
        SymmetricalComponents::from_unbalanced_with_precision(
            self.phases[0],
            self.phases[1],
            self.phases[2],
            self.phases[0].precision(),
        )
    }

    /// Phase A.
    #[must_use]
    pub fn a(&self) -> &Phasor {
        &self.phases[0]
    }

    /// Phase B.
    #[must_use]
    pub fn b(&self) -> &Phasor {
        &self.phases[1]
    }

    /// Phase C.
    #[must_use]
    pub fn c(&self) -> &Phasor {
        &self.phases[2]
    }

    /// The three phases `[A, B, C]`.
    #[must_use]
    pub fn phases(&self) -> &[Phasor; 3] {
        &self.phases
    }

    /// Re-expresses every stored phasor in rectangular form.
    #[must_use]
    pub fn as_rectangular(&self) -> Self {
        self.map(|p| p.as_rectangular())
    }

    /// Re-expresses every stored phasor in polar-radians form.
    #[must_use]
    pub fn as_polar_radians(&self) -> Self {
        self.map(|p| p.as_polar_radians())
    }

    /// Re-expresses every stored phasor in polar-degrees form.
    #[must_use]
    pub fn as_polar_degrees(&self) -> Self {
        self.map(|p| p.as_polar_degrees())
    }

    fn map(&self, f: impl Fn(&Phasor) -> Phasor) -> Self {
        Self {
            phases: [f(&self.phases[0]), f(&self.phases[1]), f(&self.phases[2])],
        }
    }
}

impl fmt::Display for UnbalancedPhases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A - {}", self.phases[0])?;
        writeln!(f, "B - {}", self.phases[1])?;
        write!(f, "C - {}", self.phases[2])
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::errors::PhasorError;
    use crate::math::CScalar;
    use crate::phasor::Representation;

    fn assert_phasor_close(actual: &Phasor, expected: &Phasor, epsilon: f64) {
        let a = actual.rectangular_value();
        let e = expected.rectangular_value();
        assert_abs_diff_eq!(a.re, e.re, epsilon = epsilon);
        assert_abs_diff_eq!(a.im, e.im, epsilon = epsilon);
    }

    #[test]
    fn rotation_operator_is_unit_at_120_degrees() {
        let a = rotation_operator(2);
        assert_relative_eq!(a.modulus(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(a.degree(), 120.0, epsilon = 1.0e-12);
        // a³ = 1 and 1 + a + a² = 0.
        let a3 = a.power(3.0);
        assert_abs_diff_eq!(a3.rectangular_value().re, 1.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(a3.rectangular_value().im, 0.0, epsilon = 1.0e-9);
        let unity_sum = Phasor::polar_degrees(1.0, 0.0)
            .add(a)
            .unwrap()
            .add(a.power(2.0))
            .unwrap();
        assert_abs_diff_eq!(unity_sum.modulus(), 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn forward_times_inverse_is_identity() {
        let t = transform_matrix(2);
        let t_inv = inverse_transform_matrix(2);
        // Apply T·T_inv to each basis vector and compare to the identity.
        let zero = Phasor::polar_degrees(0.0, 0.0);
        let one = Phasor::polar_degrees(1.0, 0.0);
        for k in 0..3 {
            let mut basis = [zero; 3];
            basis[k] = one;
            let through = mat_vec(&t, &mat_vec(&t_inv, &basis).unwrap()).unwrap();
            for (i, element) in through.iter().enumerate() {
                let expected = if i == k { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(element.rectangular_value().re, expected, epsilon = 1.0e-9);
                assert_abs_diff_eq!(element.rectangular_value().im, 0.0, epsilon = 1.0e-9);
            }
        }
    }

    #[test]
    fn transform_round_trips_arbitrary_phases() {
        let a = Phasor::polar_degrees(100.0, 45.0);
        let b = Phasor::polar_radians(200.0, 3.14);
        let c = Phasor::rectangular(CScalar::new(-30.0, 55.0));
        let seq = SymmetricalComponents::from_unbalanced(a, b, c).unwrap();
        let rebuilt =
            UnbalancedPhases::from_sequence(*seq.zero(), *seq.positive(), *seq.negative()).unwrap();
        assert_phasor_close(rebuilt.a(), &a, 1.0e-9);
        assert_phasor_close(rebuilt.b(), &b, 1.0e-9);
        assert_phasor_close(rebuilt.c(), &c, 1.0e-9);
    }

    #[test]
    fn balanced_positive_sequence_system_has_no_zero_or_negative_parts() {
        let a = Phasor::polar_degrees(230.0, 0.0);
        let b = Phasor::polar_degrees(230.0, 240.0);
        let c = Phasor::polar_degrees(230.0, 120.0);
        let seq = SymmetricalComponents::from_unbalanced(a, b, c).unwrap();
        assert_abs_diff_eq!(seq.zero().modulus(), 0.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(seq.negative().modulus(), 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(seq.positive().modulus(), 230.0, epsilon = 1.0e-9);
        // A1 sits on the positive real axis (angle ≈ 0, possibly wrapped).
        assert_abs_diff_eq!(seq.positive().rectangular_value().re, 230.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(seq.positive().rectangular_value().im, 0.0, epsilon = 1.0e-6);
    }

    #[test]
    fn identical_phases_are_purely_zero_sequence() {
        let p = Phasor::polar_degrees(100.0, 0.0);
        let seq = SymmetricalComponents::from_unbalanced(p, p, p).unwrap();
        assert_relative_eq!(seq.zero().modulus(), 100.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(seq.positive().modulus(), 0.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(seq.negative().modulus(), 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn sequence_expansion_rotates_each_phase() {
        let a = Phasor::polar_degrees(100.0, 10.0);
        let b = Phasor::polar_degrees(80.0, 250.0);
        let c = Phasor::polar_degrees(95.0, 115.0);
        let seq = SymmetricalComponents::from_unbalanced(a, b, c).unwrap();

        let zero = seq.zero_phases();
        assert_phasor_close(&zero[1], &zero[0], 1.0e-9);
        assert_phasor_close(&zero[2], &zero[0], 1.0e-9);

        // B1 = A1·a², C1 = A1·a.
        let a2 = rotation_operator(2).power(2.0);
        let positive = seq.positive_phases();
        let expected_b1 = seq.positive().multiply(a2).unwrap();
        assert_phasor_close(&positive[1], &expected_b1, 1.0e-9);
        let expected_c1 = seq.positive().multiply(rotation_operator(2)).unwrap();
        assert_phasor_close(&positive[2], &expected_c1, 1.0e-9);

        // B2 = A2·a, C2 = A2·a².
        let negative = seq.negative_phases();
        let expected_b2 = seq.negative().multiply(rotation_operator(2)).unwrap();
        assert_phasor_close(&negative[1], &expected_b2, 1.0e-9);

        // Summing the per-phase expansions reconstructs each input phase.
        let b_sum = zero[1].add(positive[1]).unwrap().add(negative[1]).unwrap();
        assert_phasor_close(&b_sum, &b, 1.0e-9);
        let c_sum = zero[2].add(positive[2]).unwrap().add(negative[2]).unwrap();
        assert_phasor_close(&c_sum, &c, 1.0e-9);
    }

    #[test]
    fn non_phasor_arguments_are_named() {
        let p = Phasor::polar_degrees(1.0, 0.0);
        let err = SymmetricalComponents::from_unbalanced(p, 4.0, p).unwrap_err();
        assert_eq!(
            err,
            PhasorError::UnsupportedArgumentType {
                argument: "B",
                kind: "real scalar"
            }
        );
        let err =
            UnbalancedPhases::from_sequence(p, p, CScalar::new(0.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            PhasorError::UnsupportedArgumentType {
                argument: "A2",
                kind: "complex scalar"
            }
        );
    }

    #[test]
    fn transform_results_are_degree_form_and_honor_precision() {
        let p = Phasor::polar_radians(10.0, 1.0);
        let seq = SymmetricalComponents::from_unbalanced_with_precision(p, p, p, 4).unwrap();
        for component in seq.components() {
            assert_eq!(component.representation(), Representation::PolarDegrees);
            assert_eq!(component.precision(), 4);
        }
        let phases = UnbalancedPhases::from_sequence_with_precision(p, p, p, 3).unwrap();
        for phase in phases.phases() {
            assert_eq!(phase.representation(), Representation::PolarDegrees);
            assert_eq!(phase.precision(), 3);
        }
    }

    #[test]
    fn bulk_reexpression_is_set_wide() {
        let p = Phasor::polar_degrees(5.0, 60.0);
        let seq = SymmetricalComponents::from_unbalanced(p, p, p).unwrap();
        let rect = seq.as_rectangular();
        for phasor in rect.components() {
            assert_eq!(phasor.representation(), Representation::Rectangular);
        }
        for phasor in rect.positive_phases() {
            assert_eq!(phasor.representation(), Representation::Rectangular);
        }
        let radians = UnbalancedPhases::new(p, p, p).as_polar_radians();
        for phasor in radians.phases() {
            assert_eq!(phasor.representation(), Representation::PolarRadians);
        }
        // The underlying quantities are untouched.
        assert_phasor_close(radians.a(), &p, 0.0);
    }

    #[test]
    fn round_trip_through_caller_supplied_set() {
        let set = UnbalancedPhases::new(
            Phasor::polar_degrees_with_precision(120.0, 15.0, 3),
            Phasor::polar_degrees_with_precision(90.0, 230.0, 3),
            Phasor::polar_degrees_with_precision(110.0, 140.0, 3),
        );
        let seq = set.to_sequence().unwrap();
        assert_eq!(seq.zero().precision(), 3);
        let rebuilt =
            UnbalancedPhases::from_sequence(*seq.zero(), *seq.positive(), *seq.negative()).unwrap();
        assert_phasor_close(rebuilt.a(), set.a(), 1.0e-9);
        assert_phasor_close(rebuilt.b(), set.b(), 1.0e-9);
        assert_phasor_close(rebuilt.c(), set.c(), 1.0e-9);
    }

    #[test]
    fn display_lists_every_component() {
        let p = Phasor::polar_degrees(100.0, 0.0);
        let seq = SymmetricalComponents::from_unbalanced(p, p, p).unwrap();
        let listing = seq.to_string();
        for tag in ["A0 -", "A1 -", "A2 -", "B0 -", "B1 -", "B2 -", "C0 -", "C1 -", "C2 -"] {
            assert!(listing.contains(tag), "missing {tag} in {listing}");
        }
        let phases = UnbalancedPhases::new(p, p, p);
        let listing = phases.to_string();
        assert!(listing.contains("A - ") && listing.contains("B - ") && listing.contains("C - "));
    }
}
