//! Transition configuration
//!
//! A [`TransitionConfig`] tells a channel how to travel to a new target:
//! how long the trip takes and which easing [`Curve`] shapes it.
//!
//! Configs are plain data and serialize with serde, so presets can live in
//! JSON alongside other scene data:
//!
//! ```rust,ignore
//! let preset: TransitionConfig =
//!     serde_json::from_str(r#"{ "duration": 0.25, "curve": "ease_out" }"#)?;
//! ```
//!
//! A zero duration is an instant transition: the channel jumps to the target
//! and completes synchronously.

use serde::{Deserialize, Serialize};

use kinema_core::{KinemaError, Result};

use crate::curve::Curve;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Duration in seconds.
    pub duration: f32,
    #[serde(default)]
    pub curve: Curve,
}

impl TransitionConfig {
    pub const INSTANT: Self = Self {
        duration: 0.0,
        curve: Curve::Linear,
    };

    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            curve: Curve::Linear,
        }
    }

    #[must_use]
    pub fn instant() -> Self {
        Self::INSTANT
    }

    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() {
            return Err(KinemaError::InvalidTransition(format!(
                "duration must be finite, got {}",
                self.duration
            )));
        }
        if self.duration < 0.0 {
            return Err(KinemaError::InvalidTransition(format!(
                "duration must not be negative, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::INSTANT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(TransitionConfig::new(0.5).validate().is_ok());
        assert!(TransitionConfig::instant().validate().is_ok());
        assert!(TransitionConfig::new(-1.0).validate().is_err());
        assert!(TransitionConfig::new(f32::NAN).validate().is_err());
        assert!(TransitionConfig::new(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_deserialize_preset() {
        let cfg: TransitionConfig =
            serde_json::from_str(r#"{ "duration": 0.25, "curve": "ease_out" }"#).unwrap();
        assert_eq!(cfg, TransitionConfig::new(0.25).with_curve(Curve::EaseOut));

        let cfg: TransitionConfig = serde_json::from_str(r#"{ "duration": 1.0 }"#).unwrap();
        assert_eq!(cfg.curve, Curve::Linear);
    }
}
