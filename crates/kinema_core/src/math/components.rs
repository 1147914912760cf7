use glam::{Mat4, Vec3, Vec4};

use crate::errors::{KinemaError, Result};

/// A transform split into its four animatable component groups.
///
/// `rotate` holds Euler angles (radians) applied in X, Y, Z order and `skew`
/// holds shear angles (radians) for the YZ, XZ and XY planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformComponents {
    pub translate: Vec3,
    pub rotate: Vec3,
    pub skew: Vec3,
    pub scale: Vec3,
}

impl TransformComponents {
    /// Zero translation, rotation and skew with unit scale.
    pub const IDENTITY: Self = Self {
        translate: Vec3::ZERO,
        rotate: Vec3::ZERO,
        skew: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(translate: Vec3, rotate: Vec3, skew: Vec3, scale: Vec3) -> Self {
        Self {
            translate,
            rotate,
            skew,
            scale,
        }
    }

    #[must_use]
    pub fn with_translate(mut self, translate: Vec3) -> Self {
        self.translate = translate;
        self
    }

    #[must_use]
    pub fn with_rotate(mut self, rotate: Vec3) -> Self {
        self.rotate = rotate;
        self
    }

    #[must_use]
    pub fn with_skew(mut self, skew: Vec3) -> Self {
        self.skew = skew;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Fails with [`KinemaError::NonFiniteValue`] naming the first bad group.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("translate", self.translate)?;
        ensure_finite("rotate", self.rotate)?;
        ensure_finite("skew", self.skew)?;
        ensure_finite("scale", self.scale)
    }
}

impl Default for TransformComponents {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Per-axis rotation update. `None` leaves that axis untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerUpdate {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl EulerUpdate {
    #[must_use]
    pub fn new(x: Option<f32>, y: Option<f32>, z: Option<f32>) -> Self {
        Self { x, y, z }
    }

    /// Updates every axis.
    #[must_use]
    pub fn all(angles: Vec3) -> Self {
        Self::new(Some(angles.x), Some(angles.y), Some(angles.z))
    }

    /// Axis slots in X, Y, Z order.
    #[must_use]
    pub fn axes(&self) -> [Option<f32>; 3] {
        [self.x, self.y, self.z]
    }

    /// Number of axes that carry a value.
    #[must_use]
    pub fn touched(&self) -> usize {
        self.axes().iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touched() == 0
    }

    pub fn validate(&self) -> Result<()> {
        if self.axes().iter().flatten().all(|a| a.is_finite()) {
            Ok(())
        } else {
            Err(KinemaError::NonFiniteValue { context: "rotate" })
        }
    }
}

impl From<Vec3> for EulerUpdate {
    fn from(angles: Vec3) -> Self {
        Self::all(angles)
    }
}

impl TryFrom<&[Option<f32>]> for EulerUpdate {
    type Error = KinemaError;

    fn try_from(slots: &[Option<f32>]) -> Result<Self> {
        match slots {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(KinemaError::ArityMismatch {
                context: "rotate",
                expected: 3,
                actual: slots.len(),
            }),
        }
    }
}

/// Builds a finite `Vec3` from a dynamically sized slice.
pub fn vec3_from_slice(context: &'static str, values: &[f32]) -> Result<Vec3> {
    let &[x, y, z] = values else {
        return Err(KinemaError::ArityMismatch {
            context,
            expected: 3,
            actual: values.len(),
        });
    };
    let v = Vec3::new(x, y, z);
    ensure_finite(context, v)?;
    Ok(v)
}

pub fn ensure_finite(context: &'static str, v: Vec3) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(KinemaError::NonFiniteValue { context })
    }
}

/// Rejects matrices whose bottom row is not `(0, 0, 0, 1)`.
pub fn ensure_affine(transform: &Mat4) -> Result<()> {
    let row = transform.row(3);
    if row == Vec4::W {
        Ok(())
    } else {
        Err(KinemaError::NonAffineTransform { row })
    }
}
