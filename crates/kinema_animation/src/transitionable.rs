use std::fmt;

use kinema_core::{Callback, Result};

use crate::channel::Channel;
use crate::transition::TransitionConfig;
use crate::values::Interpolatable;

/// Tick-driven tween channel.
///
/// Each `set` starts a fresh tween from the current value. Time only moves
/// when [`update`](Channel::update) is called, so the owner decides the frame
/// rate and `dt`.
///
/// Retargeting a running tween completes it: its callback runs before the new
/// tween starts. Only [`halt`](Channel::halt) and [`reset`](Self::reset)
/// discard a pending callback.
pub struct Transitionable<T: Interpolatable> {
    start: T,
    current: T,
    target: T,

    elapsed: f32,
    active: bool,

    /// Effective config of the latest `set`.
    transition: Option<TransitionConfig>,
    default_transition: Option<TransitionConfig>,

    on_complete: Option<Callback>,
}

impl<T: Interpolatable> Transitionable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            start: value,
            current: value,
            target: value,
            elapsed: 0.0,
            active: false,
            transition: None,
            default_transition: None,
            on_complete: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, transition: TransitionConfig) -> Self {
        self.default_transition = Some(transition);
        self
    }

    /// Config used by the most recent `set`, after default resolution.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionConfig> {
        self.transition
    }

    #[must_use]
    pub fn default_transition(&self) -> Option<TransitionConfig> {
        self.default_transition
    }

    /// Normalized progress of the running tween, `1.0` when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.transition {
            Some(t) if self.active && t.duration > 0.0 => (self.elapsed / t.duration).min(1.0),
            _ => 1.0,
        }
    }

    /// Jumps to `value` without a transition. Pending completion is dropped.
    pub fn reset(&mut self, value: T) {
        self.halt();
        self.start = value;
        self.current = value;
        self.target = value;
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.active = false;
        if let Some(on_complete) = self.on_complete.take() {
            log::trace!("Transitionable: transition complete");
            on_complete();
        }
    }
}

impl<T: Interpolatable> Channel for Transitionable<T> {
    type Value = T;

    fn set(
        &mut self,
        target: T,
        transition: Option<TransitionConfig>,
        on_complete: Option<Callback>,
    ) -> Result<()> {
        let transition = transition
            .or(self.default_transition)
            .unwrap_or(TransitionConfig::INSTANT);
        transition.validate()?;

        // The superseded transition is over once retargeted.
        if let Some(superseded) = self.on_complete.take() {
            log::trace!("Transitionable: retargeted mid-transition, completing previous target");
            superseded();
        }

        self.transition = Some(transition);
        self.target = target;
        self.elapsed = 0.0;
        self.on_complete = on_complete;

        if transition.is_instant() || target == self.current {
            self.finish();
        } else {
            self.start = self.current;
            self.active = true;
        }
        Ok(())
    }

    #[inline]
    fn get(&self) -> T {
        self.current
    }

    #[inline]
    fn target(&self) -> T {
        self.target
    }

    #[inline]
    fn is_active(&self) -> bool {
        self.active
    }

    fn halt(&mut self) {
        self.target = self.current;
        self.start = self.current;
        self.elapsed = 0.0;
        self.active = false;
        self.on_complete = None;
    }

    fn set_default(&mut self, transition: TransitionConfig) {
        self.default_transition = Some(transition);
    }

    fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        let Some(transition) = self.transition else {
            return;
        };

        self.elapsed += dt.max(0.0);
        if self.elapsed >= transition.duration {
            self.finish();
        } else {
            let t = transition.curve.apply(self.elapsed / transition.duration);
            self.current = T::interpolate_linear(self.start, self.target, t);
        }
    }
}

impl<T: Interpolatable + Default> Default for Transitionable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Interpolatable + fmt::Debug> fmt::Debug for Transitionable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transitionable")
            .field("start", &self.start)
            .field("current", &self.current)
            .field("target", &self.target)
            .field("elapsed", &self.elapsed)
            .field("active", &self.active)
            .field("transition", &self.transition)
            .field("default_transition", &self.default_transition)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}
