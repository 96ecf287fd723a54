//! Quantum linear algebra helpers
//!
//! This crate provides the small set of matrix tools quantum-computing code keeps
//! reaching for: an iterated Kronecker product, a chained matrix product, and the
//! standard identity, Pauli and CNOT matrices.

#[macro_use]
mod macros;

pub mod error;
pub mod gate;
pub mod linalg;

pub use error::{LinalgError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{LinalgError, Result};
    pub use crate::gate::{StandardMatrix, CNOT, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z};
    pub use crate::linalg::{
        approx_eq, chained_multiply, dagger, identity, is_unitary, kron, kronecker_product,
        Matrix, DEFAULT_TOLERANCE,
    };
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
