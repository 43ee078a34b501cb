//! Integration tests for the m3d-rs crates.
//!
//! These tests chain the math and stream crates together the way a renderer
//! would: units feed rotation matrices, matrices compose into
//! model-view-projection chains, and the batch kernel consumes the result.

#[cfg(test)]
mod tests {
    use m3d_math::{Degrees, Mat4, Radians, Rotation, Vec4};
    use m3d_stream::{StreamConfig, transform_points, transform_stream, transform_stream_scalar};

    /// Standard row-times-column mat-vec product, written out longhand so it
    /// shares no code with the library under test.
    fn reference_mat_vec(m: &Mat4, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for i in 0..4 {
            for j in 0..4 {
                out[i] += m.m[i][j] * v[j];
            }
        }
        out
    }

    /// The model-view-projection chain used throughout these tests:
    /// Perspective(15 deg, 1, 0.1, 10000) . Translate(0, 0, -100)
    /// . Rz(1) . Ry(1) . Rx(1) . Scale(5, 5, 5).
    fn mvp_chain() -> Mat4 {
        let rotation = Radians(1.0);
        let m = Mat4::perspective(Degrees(15.0).to_radians(), 1.0, 0.1, 10000.0);
        let m = Mat4::mul(&m, &Mat4::from_translation(Vec4::new(0.0, 0.0, -100.0, 1.0)));
        let m = Mat4::mul(&m, &Mat4::from_rotation_z(rotation));
        let m = Mat4::mul(&m, &Mat4::from_rotation_y(rotation));
        let m = Mat4::mul(&m, &Mat4::from_rotation_x(rotation));
        Mat4::mul(&m, &Mat4::from_scale(Vec4::new(5.0, 5.0, 5.0, 1.0)))
    }

    #[test]
    fn test_mvp_chain_against_hand_computation() {
        // Pushing the origin point through the chain stage by stage by hand:
        // the perspective matrix maps (0,0,0,1) to (0,0,-1,0); translation
        // contributes w = 100; the z rotation leaves a z-axis point alone;
        // the y then x rotations tilt it; the scale multiplies by 5. The
        // closed forms are (-5 sin 1, 5 sin 1 cos 1, -5 cos^2 1, 100).
        let (s1, c1) = 1.0f32.sin_cos();
        let expected = [-5.0 * s1, 5.0 * s1 * c1, -5.0 * c1 * c1, 100.0];

        let clip = mvp_chain().transpose().transform(Vec4::W);
        for i in 0..4 {
            assert!(
                (clip[i] - expected[i]).abs() < 1e-3,
                "component {}: {} vs {}",
                i,
                clip[i],
                expected[i]
            );
        }
        // and numerically against hardcoded values of those closed forms
        assert!((clip.x + 4.2073549).abs() < 1e-3);
        assert!((clip.y - 2.2732436).abs() < 1e-3);
        assert!((clip.z + 1.4596329).abs() < 1e-3);
        assert!((clip.w - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_transform_is_transposed_mat_vec() {
        // transform(M, v) must equal the dot-of-transposed-rows definition,
        // i.e. the standard product of M^T with v, for a matrix built from
        // the full chain of constructors.
        let m = mvp_chain();
        let t = m.transpose();
        for v in [
            [0.0, 0.0, 0.0, 1.0],
            [1.0, 2.0, 3.0, 1.0],
            [-7.5, 0.25, 100.0, 0.0],
        ] {
            let got = m.transform(Vec4::from_array(v));
            let want = reference_mat_vec(&t, v);
            for i in 0..4 {
                let scale = want[i].abs().max(1.0);
                assert!((got[i] - want[i]).abs() / scale < 1e-5);
            }
        }
    }

    #[test]
    fn test_stream_kernel_agrees_with_matrix_transform() {
        let m = mvp_chain();
        let input: Vec<Vec4> = (0..64)
            .map(|i| {
                let f = i as f32;
                Vec4::new(f * 0.5 - 16.0, f * 0.25, -f, 1.0)
            })
            .collect();
        let mut out = vec![Vec4::ZERO; 64];
        transform_points(&mut out, &input, &m).unwrap();

        for (v, got) in input.iter().zip(&out) {
            let want = m.transform(v.with_w(1.0));
            for i in 0..4 {
                let scale = want[i].abs().max(1.0);
                assert!((got[i] - want[i]).abs() / scale < 1e-4);
            }
        }
    }

    #[test]
    fn test_scalar_and_simd_paths_agree_on_chain() {
        let m = mvp_chain();
        let input: Vec<f32> = (0..256).map(|i| (i as f32) * 0.37 - 40.0).collect();
        let count = input.len() / 4;
        let mut simd = vec![0.0f32; input.len()];
        let mut scalar = vec![0.0f32; input.len()];
        let cfg = StreamConfig::new().with_divide_by_w(true);

        transform_stream(&mut simd, &input, count, &m, &cfg).unwrap();
        transform_stream_scalar(&mut scalar, &input, count, &m, &cfg).unwrap();
        for (a, b) in simd.iter().zip(&scalar) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_rotation_units_flow_into_matrices() {
        let quarter = Rotation::new(Degrees(90.0), Degrees(0.0), Degrees(0.0));
        let from_degrees = Mat4::from_rotation(quarter);
        let from_radians = Mat4::from_rotation_x(Radians(std::f32::consts::FRAC_PI_2));
        for i in 0..4 {
            for j in 0..4 {
                assert!((from_degrees.m[i][j] - from_radians.m[i][j]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_inverse_undoes_chain() {
        let m = mvp_chain();
        let inv = m.try_inverse().expect("chain is invertible");
        let ident = Mat4::mul(&m, &inv);
        for i in 0..4 {
            for j in 0..4 {
                let want = if i == j { 1.0 } else { 0.0 };
                assert!((ident.m[i][j] - want).abs() < 1e-2);
            }
        }
    }
}
