//! 4x4 matrix type for graphics transforms.
//!
//! [`Mat4`] represents linear, affine, and projective transforms. Matrices
//! compose via [`Mat4::mul`] to build model-view-projection chains, and
//! vectors pass through [`Mat4::transform`].
//!
//! # Convention
//!
//! Storage is **row-major** and the library uses a row-vector convention:
//! translation lives in row 3 (see [`Mat4::from_translation`]) and
//! [`Mat4::transform`] computes `v' = M^T * v`. The multiply index convention
//!
//! ```text
//! ret[i][j] = sum_k self[k][j] * other[i][k]
//! ```
//!
//! is a fixed contract. It is not the textbook row-times-column rule;
//! substituting the "obvious" convention silently reverses composition order
//! at every call site that chains transforms.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Mat4, Radians, Vec4};
//!
//! let model = Mat4::mul(
//!     &Mat4::from_rotation_y(Radians(0.5)),
//!     &Mat4::from_scale(Vec4::new(2.0, 2.0, 2.0, 1.0)),
//! );
//! let p = model.transform(Vec4::new(1.0, 0.0, 0.0, 1.0));
//! # let _ = p;
//! ```

use crate::{Radians, Rotation, Vec4};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, Mul};

/// Row/column triples left over when one index is struck out.
const STRIKE: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

/// A 4x4 float matrix, stored row-major.
///
/// Access a row as a [`Vec4`] via [`Mat4::row`], an element grid via
/// `m[i][j]`, or the flat 16-element layout via [`Mat4::to_array`] /
/// [`Mat4::from_array`]. All three views address the same sixteen scalars.
///
/// Every operation returns a new matrix; arguments are never mutated.
///
/// # Example
///
/// ```rust
/// use m3d_math::{Mat4, Vec4};
///
/// let t = Mat4::from_translation(Vec4::new(1.0, 2.0, 3.0, 0.0));
/// assert_eq!(t.row(3), Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from Vec4 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a matrix from a flat 16-element array, row-major.
    #[inline]
    pub const fn from_array(v: [f32; 16]) -> Self {
        Self {
            m: [
                [v[0], v[1], v[2], v[3]],
                [v[4], v[5], v[6], v[7]],
                [v[8], v[9], v[10], v[11]],
                [v[12], v[13], v[14], v[15]],
            ],
        }
    }

    /// Converts to a flat 16-element array, row-major.
    #[inline]
    pub const fn to_array(&self) -> [f32; 16] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2], m[0][3], m[1][0], m[1][1], m[1][2], m[1][3], m[2][0],
            m[2][1], m[2][2], m[2][3], m[3][0], m[3][1], m[3][2], m[3][3],
        ]
    }

    /// Returns a row as a Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as a Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Creates a translation matrix.
    ///
    /// The identity with row 3 replaced by `(vec.x, vec.y, vec.z, 1)` —
    /// translation is encoded in the last **row** under this library's
    /// row-vector convention. The input w is ignored.
    #[inline]
    pub fn from_translation(vec: Vec4) -> Self {
        let mut ret = Self::IDENTITY;
        ret.m[3] = vec.with_w(1.0).to_array();
        ret
    }

    /// Creates a scale matrix with `(vec.x, vec.y, vec.z, vec.w)` on the
    /// diagonal.
    ///
    /// Note that `vec.w` feeds the bottom-right element rather than a
    /// constant 1; pass `w = 1` for a standard affine scale.
    #[inline]
    pub fn from_scale(vec: Vec4) -> Self {
        let mut ret = Self::ZERO;
        ret.m[0][0] = vec.x;
        ret.m[1][1] = vec.y;
        ret.m[2][2] = vec.z;
        ret.m[3][3] = vec.w;
        ret
    }

    /// Creates a rotation matrix about the x axis.
    #[inline]
    pub fn from_rotation_x(angle: Radians) -> Self {
        let (s, c) = angle.0.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix about the y axis.
    #[inline]
    pub fn from_rotation_y(angle: Radians) -> Self {
        let (s, c) = angle.0.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix about the z axis.
    #[inline]
    pub fn from_rotation_z(angle: Radians) -> Self {
        let (s, c) = angle.0.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix from per-axis angles, composed in the fixed
    /// order `Rx * Ry * Rz`.
    ///
    /// The order is part of the contract; a different order yields a
    /// different net transform.
    #[inline]
    pub fn from_rotation(rotation: Rotation) -> Self {
        let rx = Self::from_rotation_x(rotation.x.to_radians());
        let ry = Self::from_rotation_y(rotation.y.to_radians());
        Mat4::mul(
            &Mat4::mul(&rx, &ry),
            &Self::from_rotation_z(rotation.z.to_radians()),
        )
    }

    /// Creates a symmetric perspective projection matrix.
    ///
    /// `fov` is the vertical field of view; `aspect` the width/height ratio;
    /// `near` and `far` the clip plane distances. The result maps view space
    /// to clip space through [`Mat4::transform`], carrying the
    /// perspective-divide term into the output w.
    pub fn perspective(fov: Radians, aspect: f32, near: f32, far: f32) -> Self {
        let cot_half_fov = 1.0 / (fov.0 / 2.0).tan();
        let neg_inv_depth = 1.0 / (near - far);

        let mut ret = Self::ZERO;
        ret.m[0][0] = cot_half_fov / aspect;
        ret.m[1][1] = cot_half_fov;
        ret.m[2][2] = (far + near) * neg_inv_depth;
        ret.m[2][3] = -1.0;
        ret.m[3][2] = (2.0 * far * near) * neg_inv_depth;
        ret
    }

    /// Creates an off-center perspective projection matrix from the
    /// frustum's near-plane edges.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let inv_width = 1.0 / (right - left);
        let inv_height = 1.0 / (top - bottom);
        let inv_depth = 1.0 / (far - near);

        let mut ret = Self::ZERO;
        ret.m[0][0] = 2.0 * near * inv_width;
        ret.m[1][1] = 2.0 * near * inv_height;
        ret.m[2][0] = (right + left) * inv_width;
        ret.m[2][1] = (top + bottom) * inv_height;
        ret.m[2][2] = -(far + near) * inv_depth;
        ret.m[2][3] = -1.0;
        ret.m[3][2] = -2.0 * far * near * inv_depth;
        ret
    }

    /// Creates an orthographic projection matrix mapping the given box to
    /// normalized device coordinates. No perspective divide.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let lo = [left, bottom, near];
        let hi = [right, top, far];
        let mut ret = Self::ZERO;
        for i in 0..3 {
            let scale = 1.0 / (hi[i] - lo[i]);
            ret.m[i][3] = -(hi[i] + lo[i]) * scale;
            ret.m[i][i] = 2.0 * scale;
        }
        // z runs into the screen
        ret.m[2][2] = -ret.m[2][2];
        ret
    }

    /// Multiplies two matrices with the library's fixed index convention:
    /// `ret[i][j] = sum_k self[k][j] * other[i][k]`.
    ///
    /// Order matters; `a.mul(b)` and `b.mul(a)` differ for almost all inputs.
    pub fn mul(&self, other: &Self) -> Self {
        let mut ret = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    ret.m[i][j] += self.m[k][j] * other.m[i][k];
                }
            }
        }
        ret
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut ret = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                ret.m[i][j] = self.m[j][i];
            }
        }
        ret
    }

    /// Determinant of the 3x3 submatrix selected by three rows and columns.
    fn det3(&self, rows: [usize; 3], cols: [usize; 3]) -> f32 {
        let m = &self.m;
        let [r0, r1, r2] = rows;
        let [c0, c1, c2] = cols;
        m[r0][c0] * m[r1][c1] * m[r2][c2]
            + m[r0][c1] * m[r1][c2] * m[r2][c0]
            + m[r0][c2] * m[r1][c0] * m[r2][c1]
            - m[r0][c2] * m[r1][c1] * m[r2][c0]
            - m[r0][c1] * m[r1][c0] * m[r2][c2]
            - m[r0][c0] * m[r1][c2] * m[r2][c1]
    }

    /// Computes the determinant by cofactor expansion down the first column.
    ///
    /// A zero determinant means the matrix is singular; check it before
    /// calling [`Mat4::inverse`] when invertibility failure must be detected,
    /// or use [`Mat4::try_inverse`].
    pub fn determinant(&self) -> f32 {
        self.m[0][0] * self.det3(STRIKE[0], STRIKE[0])
            - self.m[1][0] * self.det3(STRIKE[1], STRIKE[0])
            + self.m[2][0] * self.det3(STRIKE[2], STRIKE[0])
            - self.m[3][0] * self.det3(STRIKE[3], STRIKE[0])
    }

    /// Computes the adjugate: the transposed matrix of cofactors.
    ///
    /// Satisfies `m.mul(&m.adjugate()) == m.determinant() * I` for every
    /// matrix, singular or not.
    pub fn adjugate(&self) -> Self {
        let mut ret = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                ret.m[i][j] = sign * self.det3(STRIKE[j], STRIKE[i]);
            }
        }
        ret
    }

    /// Computes the inverse as `adjugate * (1 / determinant)`.
    ///
    /// Returns the **zero matrix** when the determinant is zero - a sentinel,
    /// not an error signal. Callers that need failure reporting should use
    /// [`Mat4::try_inverse`] or test [`Mat4::determinant`] first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_math::Mat4;
    ///
    /// assert_eq!(Mat4::IDENTITY.inverse(), Mat4::IDENTITY);
    /// assert_eq!(Mat4::ZERO.inverse(), Mat4::ZERO);
    /// ```
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det != 0.0 {
            self.adjugate() * (1.0 / det)
        } else {
            Self::ZERO
        }
    }

    /// Computes the inverse, checking for the degenerate case.
    ///
    /// Returns `None` when the matrix is singular.
    #[inline]
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det != 0.0 {
            Some(self.adjugate() * (1.0 / det))
        } else {
            None
        }
    }

    /// Applies this matrix to a vector: `v' = M^T * v`.
    ///
    /// Each component of the result is the dot product of a **transposed**
    /// row with the input. This is the canonical vector transform under the
    /// library's row-major, row-vector convention.
    pub fn transform(&self, vec: Vec4) -> Vec4 {
        let t = self.transpose();
        Vec4::new(
            t.row(0).dot(vec),
            t.row(1).dot(vec),
            t.row(2).dot(vec),
            t.row(3).dot(vec),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4 (column-major), preserving the mathematical
    /// matrix.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        // glam stores column-major, so the transposed rows are its columns
        glam::Mat4::from_cols_array(&self.transpose().to_array())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(m.to_cols_array()).transpose()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Mat4::mul(&self, &rhs)
    }
}

// Mat4 * Vec4 (transform)
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut ret = self;
        for i in 0..4 {
            for j in 0..4 {
                ret.m[i][j] = self.m[i][j] * rhs;
            }
        }
        ret
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(v: [f32; 16]) -> Self {
        Self::from_array(v)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> [f32; 16] {
        m.to_array()
    }
}
