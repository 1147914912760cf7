//! Transform math
//!
//! - [`TransformComponents`]: translate / rotate / skew / scale groups
//! - [`TransformAlgebra`]: compose and decompose between components and `Mat4`
//! - [`EulerSkewAlgebra`]: the default `T · R · K · S` algebra

pub mod algebra;
pub mod components;

pub use algebra::{EulerSkewAlgebra, TransformAlgebra};
pub use components::{
    EulerUpdate, TransformComponents, ensure_affine, ensure_finite, vec3_from_slice,
};
