#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # Kinema
//!
//! Animated composite transforms. A transform is split into translate,
//! rotate (three Euler axes), skew and scale; each group is driven by its own
//! channel and the current transform is recomposed on demand.
//!
//! ```rust,ignore
//! use kinema::prelude::*;
//!
//! let mut transform = CompositeTransform::identity();
//! transform.set_translate(Vec3::new(10.0, 0.0, 0.0), Some(TransitionConfig::new(0.5)), None)?;
//!
//! // once per frame
//! transform.update(dt);
//! let matrix = transform.get();
//! ```

pub use kinema_animation as animation;

pub use kinema_core::{errors, fan_in, math};

pub use kinema_animation::{
    CHANNEL_COUNT, Channel, CompositeTransform, Curve, Interpolatable, TransitionConfig,
    Transitionable,
};
pub use kinema_core::{
    Callback, EulerSkewAlgebra, EulerUpdate, FanIn, KinemaError, Result, TransformAlgebra,
    TransformComponents, after_n_calls,
};

pub mod prelude {
    pub use crate::{
        Callback, Channel, CompositeTransform, Curve, EulerUpdate, KinemaError,
        TransformAlgebra, TransformComponents, TransitionConfig,
    };
    pub use glam::{Mat4, Vec3};
}
