//! Error types for stream kernel preconditions.
//!
//! The kernel itself does no per-element checking; every failure mode is a
//! precondition violated at the call boundary (buffer too short for the
//! declared count/stride, stride below one vector, or a misaligned buffer
//! handed to an aligned code path). These are caught up front and reported
//! through [`StreamError`] instead of becoming out-of-range access.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`StreamError`] as the error type.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Precondition violations detected before a stream transform runs.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The input slice cannot hold `count` vectors at the configured stride.
    #[error("input of {len} floats too small for {count} vectors at stride {stride}")]
    InputTooSmall {
        /// Input slice length in floats
        len: usize,
        /// Requested vector count
        count: usize,
        /// Configured input stride in floats
        stride: usize,
    },

    /// The output slice cannot hold `count` vectors at the configured stride.
    #[error("output of {len} floats too small for {count} vectors at stride {stride}")]
    OutputTooSmall {
        /// Output slice length in floats
        len: usize,
        /// Requested vector count
        count: usize,
        /// Configured output stride in floats
        stride: usize,
    },

    /// A stride smaller than one 4-float vector would make successive
    /// elements overlap.
    #[error("stride {stride} is less than the 4-float vector width")]
    StrideTooSmall {
        /// Offending stride in floats
        stride: usize,
    },

    /// A buffer handed to an aligned code path does not satisfy the 16-byte
    /// alignment requirement (base address and stride both).
    #[error("buffer at {addr:#x} with stride {stride} violates 16-byte alignment")]
    Misaligned {
        /// Base address of the offending buffer
        addr: usize,
        /// Stride in floats
        stride: usize,
    },

    /// Input and output vector slices differ in length.
    #[error("input has {input} vectors but output has {output}")]
    LengthMismatch {
        /// Input length in vectors
        input: usize,
        /// Output length in vectors
        output: usize,
    },
}
