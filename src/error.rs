// src/error.rs
//! Error types for qkron

use thiserror::Error;

/// Result type alias using [`LinalgError`]
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors raised by the matrix composition helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Chained multiplication was given too few matrices
    #[error("chained multiplication needs at least {required} matrices, got {got}")]
    InsufficientOperands {
        /// Minimum number of operands
        required: usize,
        /// Number of operands supplied
        got: usize,
    },

    /// Adjacent operands cannot be multiplied
    #[error("cannot multiply {left:?} by {right:?} (operand {index})")]
    IncompatibleShapes {
        /// Position of the right-hand operand in the chain
        index: usize,
        /// Shape of the accumulated left-hand product
        left: (usize, usize),
        /// Shape of the right-hand operand
        right: (usize, usize),
    },
}
