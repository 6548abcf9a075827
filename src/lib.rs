#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared numerical primitives (scalar and complex aliases).
pub mod math;
/// Pure conversions between rectangular and polar representations.
pub mod conversions;
/// The immutable phasor value type and its arithmetic contract.
pub mod phasor;
/// The Fortescue symmetrical-components transform and its result sets.
pub mod symmetrical;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::PhasorError;
pub use phasor::{Operand, Phasor, Representation, DEFAULT_PRECISION};
pub use symmetrical::{SymmetricalComponents, UnbalancedPhases};
