//! Error types with diagnostics using miette
//!
//! Every error here is a caller-triggered misuse of an undefined
//! mathematical operation. The checked methods return them; the operator
//! impls panic with their message instead.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used by the checked geometry operations.
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised by operations that are undefined for their inputs
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Division by an exact zero scalar, a zero vector, or a vector with a
    /// zero component.
    #[error("division by zero is not allowed")]
    #[diagnostic(
        code(geometry_kit::division_by_zero),
        help("check the divisor against zero before dividing")
    )]
    DivisionByZero,

    /// `unit_vector` called on the zero vector.
    #[error("the zero vector cannot be normalized")]
    #[diagnostic(
        code(geometry_kit::undefined_normalization),
        help("only vectors with a non-zero magnitude have a direction")
    )]
    UndefinedNormalization,

    /// `angle_to` with an operand of zero magnitude.
    #[error("angle to or from the zero vector is not defined")]
    #[diagnostic(
        code(geometry_kit::undefined_angle),
        help("both vectors need a non-zero magnitude")
    )]
    UndefinedAngle,
}
