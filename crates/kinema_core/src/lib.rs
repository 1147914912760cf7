#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! Core building blocks shared by the Kinema crates: the error type,
//! transform components and algebra, and fan-in completion.

pub mod errors;
pub mod fan_in;
pub mod math;

pub use errors::{KinemaError, Result};
pub use fan_in::{Callback, FanIn, after_n_calls};
pub use math::{EulerSkewAlgebra, EulerUpdate, TransformAlgebra, TransformComponents};
