//! # m3d-stream
//!
//! SIMD batch transform kernel for [`m3d-math`](m3d_math) vector arrays.
//!
//! Transforming N vectors by one matrix dominates the per-frame cost of a
//! software graphics pipeline. This crate keeps the matrix rows resident in
//! 4-wide registers (via [`wide`]) and streams vector components through
//! them, with a portable scalar path that produces bit-identical results and
//! doubles as the differential-testing oracle.
//!
//! # Entry points
//!
//! - [`transform_stream`] / [`transform_stream_scalar`] - the raw kernels
//!   over `f32` slices, configured by [`StreamConfig`] (translate /
//!   perspective divide / alignment / stride).
//! - [`transform_points`], [`transform_coords`], [`transform_normals`] (and
//!   their `_aligned` variants) - convenience wrappers over `[Vec4]` slices
//!   for the common configurations.
//!
//! # Failure modes
//!
//! Preconditions (slice lengths vs. count and stride, 16-byte alignment when
//! promised) are validated once at the call boundary and reported as
//! [`StreamError`]; the hot loop performs no per-element checks. Threading is
//! the caller's concern at the buffer level: the kernel never shares state,
//! so disjoint output ranges may be filled concurrently.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Degrees, Mat4, Vec4};
//! use m3d_stream::transform_coords;
//!
//! let mvp = Mat4::perspective(Degrees(15.0).to_radians(), 1.0, 0.1, 10000.0);
//! let world = vec![Vec4::new(0.0, 0.0, -50.0, 1.0); 64];
//! let mut clip = vec![Vec4::ZERO; 64];
//! transform_coords(&mut clip, &world, &mvp).unwrap();
//! assert!((clip[0].w - 1.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod stream;

pub use error::*;
pub use stream::*;
