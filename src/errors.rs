//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Every failure is raised synchronously at the operation boundary and
/// indicates a caller contract violation; no operation retries or recovers
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhasorError {
    /// Raised when an arithmetic operation receives an operand kind it does
    /// not accept (e.g. adding a plain scalar to a phasor).
    #[error("unsupported operand type for {operation}: {kind}")]
    UnsupportedOperand {
        /// Operation that rejected the operand.
        operation: &'static str,
        /// Kind of the rejected operand.
        kind: &'static str,
    },
    /// Raised when a divisor's rectangular value (or a scalar divisor) is
    /// exactly zero. Checked before dividing, so no infinity or NaN ever
    /// escapes a division.
    #[error("divisor {subject} is zero")]
    DivisionByZero {
        /// Whether the zero divisor was a phasor or a plain scalar.
        subject: &'static str,
    },
    /// Raised when a transform constructor receives a non-phasor argument
    /// in place of a required phase or sequence component.
    #[error("unsupported argument type for {argument}: {kind}")]
    UnsupportedArgumentType {
        /// Position of the offending argument (e.g. `"B"` or `"A2"`).
        argument: &'static str,
        /// Kind of the rejected argument.
        kind: &'static str,
    },
}
