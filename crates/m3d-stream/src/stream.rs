//! Streaming batch transform kernel.
//!
//! Transforms an array of vectors through one matrix far faster than
//! per-vector calls to [`Mat4::transform`], by keeping the four matrix rows
//! resident in 4-wide registers and streaming vector components through them.
//!
//! # Algorithm
//!
//! Per vector, only x, y and z are read from the input stream (the input w is
//! never loaded; the output w is whatever the matrix produces). Each component
//! is broadcast across a 4-wide lane and accumulated against a matrix row:
//!
//! ```text
//! acc = z * row2 [+ row3 if translate] + y * row1 + x * row0
//! ```
//!
//! with an optional divide of all four lanes by the accumulated w lane. The
//! scalar path ([`transform_stream_scalar`]) computes the identical formula in
//! the identical order with ordinary arithmetic, so the two paths produce
//! bit-identical results; it is both the portable implementation and the
//! oracle for differential testing.
//!
//! # Configuration
//!
//! [`StreamConfig`] selects the kernel variant: translate on/off, perspective
//! divide on/off, alignment promises, and per-buffer strides (in floats) so a
//! vector field embedded in a larger per-element struct can be transformed in
//! place. The per-element `if`s on these flags are loop-invariant and hoisted
//! by the optimizer.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Degrees, Mat4, Vec4};
//! use m3d_stream::transform_points;
//!
//! let mvp = Mat4::perspective(Degrees(15.0).to_radians(), 1.0, 0.1, 10000.0);
//! let points: Vec<Vec4> = (0..16).map(|i| Vec4::splat(i as f32)).collect();
//! let mut out = vec![Vec4::ZERO; 16];
//! transform_points(&mut out, &points, &mvp).unwrap();
//! ```

use crate::error::{Result, StreamError};
use m3d_math::{Mat4, Vec4};
use wide::f32x4;

/// Floats of lookahead for the input-stream prefetch.
const PREFETCH_DISTANCE: usize = 256;

/// Configuration for the streaming transform kernel.
///
/// The default transforms tightly packed vectors (stride 4) with translation
/// applied, no perspective divide, and no alignment promises.
///
/// # Example
///
/// ```rust
/// use m3d_stream::StreamConfig;
///
/// let cfg = StreamConfig::new().with_divide_by_w(true).with_input_step(8);
/// assert!(cfg.translate);
/// assert_eq!(cfg.output_step, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Add the matrix's translation row (row 3) to each result.
    pub translate: bool,
    /// Divide each result by its own w lane (perspective divide).
    pub divide_by_w: bool,
    /// Promise that the input buffer is 16-byte aligned with a stride that
    /// preserves alignment. Verified before the loop; a broken promise is
    /// reported as [`StreamError::Misaligned`].
    pub input_aligned: bool,
    /// Same promise for the output buffer. On x86_64 this also selects
    /// non-temporal (cache-bypassing) stores.
    pub output_aligned: bool,
    /// Distance between successive input vectors, in floats. Minimum 4.
    pub input_step: usize,
    /// Distance between successive output vectors, in floats. Minimum 4.
    pub output_step: usize,
}

impl StreamConfig {
    /// Creates the default configuration: translate, no divide, packed
    /// unaligned buffers.
    pub const fn new() -> Self {
        Self {
            translate: true,
            divide_by_w: false,
            input_aligned: false,
            output_aligned: false,
            input_step: 4,
            output_step: 4,
        }
    }

    /// Sets whether the translation row is applied.
    pub const fn with_translate(mut self, on: bool) -> Self {
        self.translate = on;
        self
    }

    /// Sets whether results are divided by their w lane.
    pub const fn with_divide_by_w(mut self, on: bool) -> Self {
        self.divide_by_w = on;
        self
    }

    /// Sets the input alignment promise.
    pub const fn with_input_aligned(mut self, on: bool) -> Self {
        self.input_aligned = on;
        self
    }

    /// Sets the output alignment promise.
    pub const fn with_output_aligned(mut self, on: bool) -> Self {
        self.output_aligned = on;
        self
    }

    /// Sets the input stride in floats.
    pub const fn with_input_step(mut self, step: usize) -> Self {
        self.input_step = step;
        self
    }

    /// Sets the output stride in floats.
    pub const fn with_output_step(mut self, step: usize) -> Self {
        self.output_step = step;
        self
    }

    /// Checks slice lengths and strides against a vector count.
    fn validate(&self, input_len: usize, output_len: usize, count: usize) -> Result<()> {
        if self.input_step < 4 {
            return Err(StreamError::StrideTooSmall {
                stride: self.input_step,
            });
        }
        if self.output_step < 4 {
            return Err(StreamError::StrideTooSmall {
                stride: self.output_step,
            });
        }
        if count == 0 {
            return Ok(());
        }
        let needed_in = (count - 1) * self.input_step + 4;
        if input_len < needed_in {
            return Err(StreamError::InputTooSmall {
                len: input_len,
                count,
                stride: self.input_step,
            });
        }
        let needed_out = (count - 1) * self.output_step + 4;
        if output_len < needed_out {
            return Err(StreamError::OutputTooSmall {
                len: output_len,
                count,
                stride: self.output_step,
            });
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Verifies the 16-byte alignment promise for a buffer base and stride.
fn check_alignment(addr: usize, stride: usize) -> Result<()> {
    if addr % 16 != 0 || (stride * size_of::<f32>()) % 16 != 0 {
        return Err(StreamError::Misaligned { addr, stride });
    }
    Ok(())
}

#[inline(always)]
fn prefetch_read(buf: &[f32], index: usize) {
    #[cfg(target_arch = "x86_64")]
    // wrapping_add keeps the lookahead pointer well-defined near the end of
    // the buffer; prefetching an arbitrary address is harmless
    unsafe {
        use core::arch::x86_64::{_MM_HINT_T0, _mm_prefetch};
        _mm_prefetch::<_MM_HINT_T0>(buf.as_ptr().wrapping_add(index) as *const i8);
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let _ = (buf, index);
    }
}

/// Stores four floats without polluting the cache. `dst` must hold exactly
/// four floats at a 16-byte aligned address (checked by the caller before
/// the loop).
#[inline(always)]
fn store_nontemporal(dst: &mut [f32], vals: [f32; 4]) {
    debug_assert_eq!(dst.len(), 4);
    debug_assert_eq!(dst.as_ptr() as usize % 16, 0);
    #[cfg(target_arch = "x86_64")]
    unsafe {
        use core::arch::x86_64::{_mm_loadu_ps, _mm_stream_ps};
        _mm_stream_ps(dst.as_mut_ptr(), _mm_loadu_ps(vals.as_ptr()));
    }
    #[cfg(not(target_arch = "x86_64"))]
    dst.copy_from_slice(&vals);
}

/// Transforms `count` vectors from `input` into `output` using the portable
/// scalar path.
///
/// Strides are in floats; per vector, `input[i*step .. i*step+3]` supplies
/// x, y, z and four floats are written at the output stride. This path
/// ignores the alignment flags (they only select instructions in
/// [`transform_stream`]) and computes exactly the same formula in the same
/// order, so its results are bit-identical to the SIMD path.
pub fn transform_stream_scalar(
    output: &mut [f32],
    input: &[f32],
    count: usize,
    transform: &Mat4,
    config: &StreamConfig,
) -> Result<()> {
    config.validate(input.len(), output.len(), count)?;

    let r0 = transform.row(0).to_array();
    let r1 = transform.row(1).to_array();
    let r2 = transform.row(2).to_array();
    let r3 = transform.row(3).to_array();

    let mut src = 0;
    let mut dst = 0;
    for _ in 0..count {
        let x = input[src];
        let y = input[src + 1];
        let z = input[src + 2];
        let mut acc = [0.0f32; 4];
        for (j, lane) in acc.iter_mut().enumerate() {
            let mut v = z * r2[j];
            if config.translate {
                v += r3[j];
            }
            v += y * r1[j];
            v += x * r0[j];
            *lane = v;
        }
        if config.divide_by_w {
            let w = acc[3];
            for lane in &mut acc {
                *lane /= w;
            }
        }
        output[dst..dst + 4].copy_from_slice(&acc);
        src += config.input_step;
        dst += config.output_step;
    }
    Ok(())
}

/// Transforms `count` vectors from `input` into `output` with the 4-wide
/// SIMD kernel.
///
/// The four matrix rows stay in registers across the loop; per vector, x, y
/// and z are broadcast and accumulated against them. When an `*_aligned` flag
/// is set, the corresponding buffer's base address and stride are verified
/// against the 16-byte requirement up front ([`StreamError::Misaligned`] on
/// violation); an aligned output additionally uses non-temporal stores on
/// x86_64. Results are bit-identical to [`transform_stream_scalar`].
///
/// # Example
///
/// ```rust
/// use m3d_math::{Mat4, Vec4};
/// use m3d_stream::{StreamConfig, transform_stream, transform_stream_scalar};
///
/// let m = Mat4::from_translation(Vec4::new(1.0, 2.0, 3.0, 1.0));
/// let input = [5.0, 6.0, 7.0, 1.0];
/// let mut out = [0.0f32; 4];
/// transform_stream(&mut out, &input, 1, &m, &StreamConfig::new()).unwrap();
/// assert_eq!(out, [6.0, 8.0, 10.0, 1.0]);
/// ```
pub fn transform_stream(
    output: &mut [f32],
    input: &[f32],
    count: usize,
    transform: &Mat4,
    config: &StreamConfig,
) -> Result<()> {
    config.validate(input.len(), output.len(), count)?;
    if config.input_aligned {
        check_alignment(input.as_ptr() as usize, config.input_step)?;
    }
    if config.output_aligned {
        check_alignment(output.as_ptr() as usize, config.output_step)?;
    }

    let r0 = f32x4::from(transform.row(0).to_array());
    let r1 = f32x4::from(transform.row(1).to_array());
    let r2 = f32x4::from(transform.row(2).to_array());
    let r3 = f32x4::from(transform.row(3).to_array());

    let mut src = 0;
    let mut dst = 0;
    for _ in 0..count {
        prefetch_read(input, src + PREFETCH_DISTANCE);
        let x = f32x4::splat(input[src]);
        let y = f32x4::splat(input[src + 1]);
        let z = f32x4::splat(input[src + 2]);

        let mut acc = z * r2;
        if config.translate {
            acc = acc + r3;
        }
        acc = acc + y * r1;
        acc = acc + x * r0;
        if config.divide_by_w {
            acc = acc / f32x4::splat(acc.to_array()[3]);
        }

        if config.output_aligned {
            store_nontemporal(&mut output[dst..dst + 4], acc.to_array());
        } else {
            output[dst..dst + 4].copy_from_slice(&acc.to_array());
        }
        src += config.input_step;
        dst += config.output_step;
    }
    Ok(())
}

fn transform_vec4_slices(
    output: &mut [Vec4],
    input: &[Vec4],
    transform: &Mat4,
    config: &StreamConfig,
) -> Result<()> {
    if output.len() != input.len() {
        return Err(StreamError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    transform_stream(
        bytemuck::cast_slice_mut(output),
        bytemuck::cast_slice(input),
        input.len(),
        transform,
        config,
    )
}

/// Transforms a slice of points: translation applied, no perspective divide.
pub fn transform_points(output: &mut [Vec4], input: &[Vec4], transform: &Mat4) -> Result<()> {
    transform_vec4_slices(output, input, transform, &StreamConfig::new())
}

/// Transforms a slice of coordinates: translation applied, each result
/// divided by its w lane (perspective divide).
pub fn transform_coords(output: &mut [Vec4], input: &[Vec4], transform: &Mat4) -> Result<()> {
    transform_vec4_slices(
        output,
        input,
        transform,
        &StreamConfig::new().with_divide_by_w(true),
    )
}

/// Transforms a slice of normals: no translation, no perspective divide.
pub fn transform_normals(output: &mut [Vec4], input: &[Vec4], transform: &Mat4) -> Result<()> {
    transform_vec4_slices(
        output,
        input,
        transform,
        &StreamConfig::new().with_translate(false),
    )
}

/// [`transform_points`] over buffers promised to be 16-byte aligned.
pub fn transform_points_aligned(
    output: &mut [Vec4],
    input: &[Vec4],
    transform: &Mat4,
) -> Result<()> {
    transform_vec4_slices(
        output,
        input,
        transform,
        &StreamConfig::new()
            .with_input_aligned(true)
            .with_output_aligned(true),
    )
}

/// [`transform_coords`] over buffers promised to be 16-byte aligned.
pub fn transform_coords_aligned(
    output: &mut [Vec4],
    input: &[Vec4],
    transform: &Mat4,
) -> Result<()> {
    transform_vec4_slices(
        output,
        input,
        transform,
        &StreamConfig::new()
            .with_divide_by_w(true)
            .with_input_aligned(true)
            .with_output_aligned(true),
    )
}

/// [`transform_normals`] over buffers promised to be 16-byte aligned.
pub fn transform_normals_aligned(
    output: &mut [Vec4],
    input: &[Vec4],
    transform: &Mat4,
) -> Result<()> {
    transform_vec4_slices(
        output,
        input,
        transform,
        &StreamConfig::new()
            .with_translate(false)
            .with_input_aligned(true)
            .with_output_aligned(true),
    )
}
