//! Transform Algebra Tests
//!
//! Tests for:
//! - compose(decompose(T)) round trip over randomized transforms
//! - Component recovery away from gimbal lock
//! - Arbitrary (non-component-built) affine matrices
//! - Composition order (translate applied last)

use glam::{Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use kinema::math::vec3_from_slice;
use kinema::{EulerSkewAlgebra, TransformAlgebra, TransformComponents};

const EPSILON: f32 = 1e-3;

fn random_vec3(rng: &mut StdRng, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(min..max),
        rng.random_range(min..max),
        rng.random_range(min..max),
    )
}

fn random_components(rng: &mut StdRng) -> TransformComponents {
    TransformComponents::new(
        random_vec3(rng, -100.0, 100.0),
        random_vec3(rng, -1.2, 1.2),
        random_vec3(rng, -0.6, 0.6),
        random_vec3(rng, 0.2, 3.0),
    )
}

#[test]
fn round_trip_randomized() {
    let algebra = EulerSkewAlgebra;
    let mut rng = StdRng::seed_from_u64(1234);

    for i in 0..500 {
        let m = algebra.compose(&random_components(&mut rng));
        let back = algebra.compose(&algebra.decompose(&m));
        assert!(back.abs_diff_eq(m, EPSILON), "sample {i}: {m:?} != {back:?}");
    }
}

#[test]
fn components_recovered_randomized() {
    let algebra = EulerSkewAlgebra;
    let mut rng = StdRng::seed_from_u64(99);

    for i in 0..200 {
        let c = random_components(&mut rng);
        let d = algebra.decompose(&algebra.compose(&c));
        assert!(d.translate.abs_diff_eq(c.translate, EPSILON), "sample {i}");
        assert!(d.rotate.abs_diff_eq(c.rotate, EPSILON), "sample {i}");
        assert!(d.skew.abs_diff_eq(c.skew, EPSILON), "sample {i}");
        assert!(d.scale.abs_diff_eq(c.scale, EPSILON), "sample {i}");
    }
}

#[test]
fn round_trip_arbitrary_affine() {
    // Matrices that were never built from components still round-trip.
    let algebra = EulerSkewAlgebra;
    let mut rng = StdRng::seed_from_u64(5);

    for i in 0..200 {
        let m = Mat4::from_cols(
            random_vec3(&mut rng, -2.0, 2.0).extend(0.0),
            random_vec3(&mut rng, -2.0, 2.0).extend(0.0),
            random_vec3(&mut rng, -2.0, 2.0).extend(0.0),
            random_vec3(&mut rng, -10.0, 10.0).extend(1.0),
        );
        if m.determinant().abs() < 0.5 {
            continue;
        }
        let back = algebra.compose(&algebra.decompose(&m));
        assert!(back.abs_diff_eq(m, EPSILON), "sample {i}: {m:?} != {back:?}");
    }
}

#[test]
fn compose_matches_trs_without_skew() {
    let algebra = EulerSkewAlgebra;
    let rotate = Vec3::new(0.2, -0.3, 0.4);
    let c = TransformComponents::new(
        Vec3::new(1.0, 2.0, 3.0),
        rotate,
        Vec3::ZERO,
        Vec3::new(2.0, 1.0, 0.5),
    );

    let expected = Mat4::from_scale_rotation_translation(
        c.scale,
        Quat::from_euler(glam::EulerRot::XYZ, rotate.x, rotate.y, rotate.z),
        c.translate,
    );
    assert!(algebra.compose(&c).abs_diff_eq(expected, 1e-5));
}

#[test]
fn translate_applies_after_linear_part() {
    let algebra = EulerSkewAlgebra;
    let c = TransformComponents::IDENTITY
        .with_translate(Vec3::new(10.0, 0.0, 0.0))
        .with_scale(Vec3::splat(2.0));
    let p = algebra.compose(&c).transform_point3(Vec3::new(1.0, 1.0, 1.0));
    assert!(p.abs_diff_eq(Vec3::new(12.0, 2.0, 2.0), 1e-5));
}

#[test]
fn slice_targets_feed_components() {
    let translate = vec3_from_slice("translate", &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(translate, Vec3::new(1.0, 2.0, 3.0));
    assert!(vec3_from_slice("translate", &[1.0, 2.0, 3.0, 4.0]).is_err());
}
