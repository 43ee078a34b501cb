//! # m3d-math
//!
//! Math primitives for 3D graphics pipelines.
//!
//! This crate provides the value types a rasterizer or ray tracer chains
//! together to build model-view-projection transforms:
//!
//! - [`Vec4`] - 4-component vector for points, directions, and colors
//! - [`Mat4`] - 4x4 matrix for linear/affine/projective transforms
//! - [`Degrees`], [`Radians`], [`Metres`], [`Feet`] - unit-safe scalar wrappers
//! - [`Rotation`] - per-axis rotation triple composed as Rx * Ry * Rz
//!
//! # Design
//!
//! Every operation is a pure function: inputs are taken by value or shared
//! reference and a newly constructed value is returned, never a mutated
//! argument. This referential transparency makes call chains easy to read and
//! makes every function safe to call from any number of threads without
//! coordination.
//!
//! Degenerate inputs produce degenerate outputs rather than errors:
//! normalizing a zero-length vector yields non-finite components and inverting
//! a singular matrix yields the zero matrix. The `try_*` variants surface
//! these cases as `Option` for callers that want to check.
//!
//! # Convention
//!
//! Matrices are stored **row-major**. Vectors transform through the transposed
//! matrix (`v' = M^T * v`, see [`Mat4::transform`]), i.e. a row-vector
//! convention: translation lives in row 3 and composition order reads
//! left-to-right through [`Mat4::mul`].
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Degrees, Mat4, Radians, Vec4};
//!
//! let mvp = Mat4::perspective(Radians::from(Degrees(60.0)), 16.0 / 9.0, 0.1, 1000.0);
//! let mvp = Mat4::mul(&mvp, &Mat4::from_translation(Vec4::new(0.0, 0.0, -5.0, 1.0)));
//! let mvp = Mat4::mul(&mvp, &Mat4::from_rotation_y(Radians(0.5)));
//!
//! let clip = mvp.transpose().transform(Vec4::new(1.0, 1.0, 1.0, 1.0));
//! # let _ = clip;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod units;
mod vec4;

pub use mat4::*;
pub use units::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec4 as GlamVec4};
}
