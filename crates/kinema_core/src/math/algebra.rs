use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

use super::components::TransformComponents;

/// Converts between a composed transform and its animatable components.
///
/// `decompose` is a best-effort inverse of `compose`. Some inputs (gimbal
/// aligned rotations, collapsed axes) have no unique decomposition; callers
/// that only change one component should edit the components directly rather
/// than round-trip through matrix form.
pub trait TransformAlgebra {
    fn compose(&self, components: &TransformComponents) -> Mat4;

    fn decompose(&self, transform: &Mat4) -> TransformComponents;
}

/// Axis lengths below this are treated as collapsed during decomposition.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Default algebra: `M = T · R · K · S`.
///
/// - `R` is built from Euler angles in X, Y, Z order.
/// - `K` is the upper-triangular shear
///   `[[1, tan(skew.z), tan(skew.y)], [0, 1, tan(skew.x)], [0, 0, 1]]`.
/// - `S` is the diagonal scale.
///
/// Decomposition runs a Gram-Schmidt QR factorization of the linear part:
/// `Q` is the rotation and the upper-triangular factor carries skew and scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSkewAlgebra;

impl EulerSkewAlgebra {
    #[must_use]
    pub fn rotation_matrix(rotate: Vec3) -> Mat3 {
        Mat3::from_quat(Quat::from_euler(EulerRot::XYZ, rotate.x, rotate.y, rotate.z))
    }

    #[must_use]
    pub fn skew_matrix(skew: Vec3) -> Mat3 {
        Mat3::from_cols(
            Vec3::X,
            Vec3::new(skew.z.tan(), 1.0, 0.0),
            Vec3::new(skew.y.tan(), skew.x.tan(), 1.0),
        )
    }
}

impl TransformAlgebra for EulerSkewAlgebra {
    fn compose(&self, c: &TransformComponents) -> Mat4 {
        let linear = Self::rotation_matrix(c.rotate)
            * Self::skew_matrix(c.skew)
            * Mat3::from_diagonal(c.scale);

        Mat4::from_cols(
            linear.x_axis.extend(0.0),
            linear.y_axis.extend(0.0),
            linear.z_axis.extend(0.0),
            c.translate.extend(1.0),
        )
    }

    fn decompose(&self, transform: &Mat4) -> TransformComponents {
        let translate = transform.w_axis.truncate();
        let linear = Mat3::from_mat4(*transform);
        let (c0, c1, c2) = (linear.x_axis, linear.y_axis, linear.z_axis);

        // 1. First basis vector
        let mut sx = c0.length();
        let q0 = if sx > DEGENERATE_EPSILON {
            c0 / sx
        } else {
            sx = 0.0;
            Vec3::X
        };

        // 2. Second basis vector, orthogonalized against q0
        let u01 = q0.dot(c1);
        let v1 = c1 - q0 * u01;
        let mut sy = v1.length();
        let q1 = if sy > DEGENERATE_EPSILON {
            v1 / sy
        } else {
            sy = 0.0;
            q0.any_orthonormal_vector()
        };

        // 3. Third basis vector, orthogonalized against q0 and q1
        let u02 = q0.dot(c2);
        let u12 = q1.dot(c2);
        let v2 = c2 - q0 * u02 - q1 * u12;
        let mut sz = v2.length();
        let mut q2 = if sz > DEGENERATE_EPSILON {
            v2 / sz
        } else {
            sz = 0.0;
            q0.cross(q1)
        };

        // 4. Keep Q a proper rotation; a reflection moves into the z scale
        if q0.cross(q1).dot(q2) < 0.0 {
            q2 = -q2;
            sz = -sz;
        }

        let shear = |off_diagonal: f32, axis_scale: f32| {
            if axis_scale.abs() > DEGENERATE_EPSILON {
                (off_diagonal / axis_scale).atan()
            } else {
                0.0
            }
        };
        let skew = Vec3::new(shear(u12, sz), shear(u02, sz), shear(u01, sy));

        let rotation = Quat::from_mat3(&Mat3::from_cols(q0, q1, q2));
        let (rx, ry, rz) = rotation.to_euler(EulerRot::XYZ);

        TransformComponents {
            translate,
            rotate: Vec3::new(rx, ry, rz),
            skew,
            scale: Vec3::new(sx, sy, sz),
        }
    }
}
