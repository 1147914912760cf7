//! Error Types
//!
//! This module defines the error types shared by every Kinema crate.
//!
//! # Overview
//!
//! The main error type [`KinemaError`] covers input validation performed
//! before any animation channel is touched:
//! - Vector or per-axis inputs with the wrong number of components
//! - Non-finite (NaN / infinite) target values
//! - Transforms with a projective bottom row
//! - Malformed transition configurations
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, KinemaError>`.
//!
//! ```rust,ignore
//! use kinema::errors::{KinemaError, Result};
//!
//! fn parse_target(values: &[f32]) -> Result<glam::Vec3> {
//!     kinema::math::vec3_from_slice("translate", values)
//! }
//! ```

use thiserror::Error;

/// The main error type for Kinema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinemaError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// An input had the wrong number of components.
    #[error("{context}: expected {expected} components, got {actual}")]
    ArityMismatch {
        /// Which input was being validated
        context: &'static str,
        /// Required component count
        expected: usize,
        /// Component count actually supplied
        actual: usize,
    },

    /// A target value contained NaN or infinity.
    #[error("{context}: value is not finite")]
    NonFiniteValue {
        /// Which input was being validated
        context: &'static str,
    },

    /// A `Mat4` with a projective bottom row was given where an affine
    /// transform is required.
    #[error("transform is not affine: bottom row is {row}")]
    NonAffineTransform {
        /// The offending bottom row (expected `(0, 0, 0, 1)`)
        row: glam::Vec4,
    },

    // ========================================================================
    // Transition Errors
    // ========================================================================
    /// The transition configuration cannot be used to drive a channel.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
