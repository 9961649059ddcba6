//! # Finite field arithmetic for redundant archives
//!
//! This library implements the arithmetic core of a Reed–Solomon style
//! erasure code over GF(2^8) or GF(2^16).
//!
//! ## Core Pipeline
//!
//! 1. **Field tables**: discrete log/exp tables built once per generator
//! 2. **Lagrange coefficients**: solved in log space for (points, wanted)
//! 3. **Multiplication matrix**: one lookup row per coefficient
//! 4. **Block evaluation**: `result[k] = Σ matrix[i][source_i[k]]`
//! 5. **Incremental update**: swap one contributor in O(len)
//!
//! The same machinery computes parity (wanted = parity point) and rebuilds a
//! lost block (wanted = the lost block's point, sources = survivors).
//!
//! ## Usage Example
//!
//! ```
//! use ras_field::{evaluate_to_vec, Gf8, MulMatrix};
//!
//! let field = Gf8::new()?;
//! let d0: &[u8] = &[0, 1, 2, 3];
//! let d1: &[u8] = &[0, 2, 4, 6];
//! let d2: &[u8] = &[0, 3, 6, 9];
//!
//! let encode = MulMatrix::build(&field, &[0, 1, 2], 3)?;
//! let parity = evaluate_to_vec(&encode, &[d0, d1, d2])?;
//!
//! let decode = MulMatrix::build(&field, &[1, 2, 3], 0)?;
//! let restored = evaluate_to_vec(&decode, &[d1, d2, parity.as_slice()])?;
//! assert_eq!(restored, d0);
//! # Ok::<(), ras_field::FieldError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;      // Field width and generator selection
pub mod evaluate;    // Block evaluation and incremental update
pub mod field;       // Log/exp tables and scalar arithmetic
pub mod interpolation; // Lagrange coefficients and multiplication tables
mod validate;        // Precondition checks shared by the solvers

// Re-exports for convenience
pub use config::{FieldBits, FieldConfig};
pub use evaluate::{
    evaluate, evaluate_parallel, evaluate_range, evaluate_to_vec, evaluate_unrolled, partition,
    update, UNROLL,
};
pub use field::{generator_period, Field, FieldSymbol, Gf16, Gf8};
pub use interpolation::{MulMatrix, MulRow};

use thiserror::Error;

/// Errors raised by field construction and by precondition checks.
///
/// Configuration errors are fatal for the field in question; precondition
/// errors mean the inputs would have produced silently corrupted output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Generator is not odd or its top bit is not the field-size bit
    #[error("generator {generator:#x} is not a degree-{bits} polynomial with a constant term")]
    InvalidGenerator {
        /// Offending generator polynomial
        generator: u32,
        /// Symbol width the generator was checked against
        bits: u32,
    },

    /// Generator does not cycle through every nonzero element
    #[error("generator {generator:#x} is not primitive: x returns to 1 after {period} steps")]
    GeneratorNotPrimitive {
        /// Offending generator polynomial
        generator: u32,
        /// Multiplicative order of x modulo the generator
        period: usize,
    },

    /// Configuration width does not match the symbol type
    #[error("configuration describes {config}-bit symbols, field uses {symbol}-bit symbols")]
    WidthMismatch {
        /// Width named by the configuration
        config: u32,
        /// Width of the symbol type
        symbol: u32,
    },

    /// No known points (or no coefficients) supplied
    #[error("at least one evaluation point is required")]
    EmptyPoints,

    /// The same evaluation point appears twice
    #[error("evaluation point {point:#x} appears more than once")]
    DuplicatePoint {
        /// Repeated point
        point: u32,
    },

    /// The wanted point collides with a known point
    #[error("wanted point {point:#x} is also a known point")]
    WantedIsKnownPoint {
        /// Colliding point
        point: u32,
    },

    /// Number of source blocks differs from the matrix row count
    #[error("matrix has {expected} rows but {found} source blocks were supplied")]
    SourceCountMismatch {
        /// Matrix row count
        expected: usize,
        /// Number of source blocks
        found: usize,
    },

    /// A block's length differs from the result length
    #[error("block {index} has length {found}, expected {expected}")]
    LengthMismatch {
        /// Source index (or matrix row for updates)
        index: usize,
        /// Required length
        expected: usize,
        /// Actual length
        found: usize,
    },

    /// Block length is not a multiple of the unroll group
    #[error("length {len} is not a multiple of the unroll group {group}")]
    UnalignedLength {
        /// Block length
        len: usize,
        /// Group size
        group: usize,
    },

    /// Position range falls outside the source blocks
    #[error("positions {start}..{end} out of range for blocks of length {len}")]
    RangeOutOfBounds {
        /// First position
        start: usize,
        /// One past the last position
        end: usize,
        /// Source block length
        len: usize,
    },

    /// Row index beyond the matrix
    #[error("row {row} out of range for matrix with {count} rows")]
    RowOutOfRange {
        /// Requested row
        row: usize,
        /// Matrix row count
        count: usize,
    },

    /// Division or inversion of zero
    #[error("division by zero in the field")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_values() {
        let err = FieldError::GeneratorNotPrimitive {
            generator: 0x11B,
            period: 51,
        };
        assert_eq!(
            err.to_string(),
            "generator 0x11b is not primitive: x returns to 1 after 51 steps"
        );

        let err = FieldError::LengthMismatch {
            index: 2,
            expected: 8,
            found: 7,
        };
        assert!(err.to_string().contains("block 2"));
    }
}
