#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! Animation channels and the composite transform state built on them.

pub mod channel;
pub mod composite;
pub mod curve;
pub mod transition;
pub mod transitionable;
pub mod values;

pub use channel::Channel;
pub use composite::{CHANNEL_COUNT, CompositeTransform};
pub use curve::Curve;
pub use transition::TransitionConfig;
pub use transitionable::Transitionable;
pub use values::Interpolatable;
