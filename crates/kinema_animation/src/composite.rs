//! Composite Transform State
//!
//! [`CompositeTransform`] animates a full spatial transform by splitting it
//! into independent channels instead of interpolating the matrix directly:
//!
//! | channel          | value  |
//! |------------------|--------|
//! | translate        | `Vec3` |
//! | rotate X / Y / Z | `f32` each |
//! | skew             | `Vec3` |
//! | scale            | `Vec3` |
//!
//! Setters update the cached final (target) components and forward the new
//! targets to the affected channels. The render loop ticks the channels with
//! [`update`](CompositeTransform::update) and reads the recomposed value with
//! [`get`](CompositeTransform::get).
//!
//! # Final state
//!
//! The final components are the single source of truth for where the
//! transform is headed; the final `Mat4` is recomposed from them in one
//! place whenever they change. Partial setters (`set_translate`,
//! `set_rotate`, ...) never decompose a matrix. Only [`set`] decomposes,
//! because it receives an arbitrary external transform.
//!
//! # Channels finish independently
//!
//! All affected channels receive their targets before a setter returns, but
//! they reach them at their own pace. While transitioning, `get()` may show
//! some axes finished and others still moving.
//!
//! # Errors
//!
//! Targets and the explicit transition config are validated before any
//! channel is touched. A channel that still fails while targets are being
//! forwarded returns its error to the caller, and channels forwarded before
//! it keep their new targets.
//!
//! [`set`]: CompositeTransform::set

use glam::{Mat4, Vec3};

use kinema_core::math::{ensure_affine, ensure_finite};
use kinema_core::{
    Callback, EulerSkewAlgebra, EulerUpdate, FanIn, Result, TransformAlgebra,
    TransformComponents, after_n_calls,
};

use crate::channel::Channel;
use crate::transition::TransitionConfig;
use crate::transitionable::Transitionable;

/// Translate, rotate X, rotate Y, rotate Z, skew, scale.
pub const CHANNEL_COUNT: usize = 6;

#[derive(Debug)]
pub struct CompositeTransform<
    A = EulerSkewAlgebra,
    V = Transitionable<Vec3>,
    S = Transitionable<f32>,
> {
    algebra: A,

    final_components: TransformComponents,
    final_transform: Mat4,

    translate: V,
    rotate: [S; 3],
    skew: V,
    scale: V,
}

impl CompositeTransform {
    /// Starts at `initial`, decomposed once with the default algebra.
    ///
    /// Only the affine part of `initial` is kept.
    #[must_use]
    pub fn new(initial: Mat4) -> Self {
        Self::with_channels(initial, EulerSkewAlgebra, Transitionable::new, Transitionable::new)
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::from_components(
            TransformComponents::IDENTITY,
            EulerSkewAlgebra,
            Transitionable::new,
            Transitionable::new,
        )
    }
}

impl Default for CompositeTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl<A, V, S> CompositeTransform<A, V, S>
where
    A: TransformAlgebra,
    V: Channel<Value = Vec3>,
    S: Channel<Value = f32>,
{
    /// Builds the six channels through the given constructors, seeded with
    /// the decomposition of `initial`.
    pub fn with_channels(
        initial: Mat4,
        algebra: A,
        vector: impl FnMut(Vec3) -> V,
        scalar: impl FnMut(f32) -> S,
    ) -> Self {
        let components = algebra.decompose(&initial);
        Self::from_components(components, algebra, vector, scalar)
    }

    pub fn from_components(
        components: TransformComponents,
        algebra: A,
        mut vector: impl FnMut(Vec3) -> V,
        mut scalar: impl FnMut(f32) -> S,
    ) -> Self {
        let final_transform = algebra.compose(&components);
        Self {
            translate: vector(components.translate),
            rotate: [
                scalar(components.rotate.x),
                scalar(components.rotate.y),
                scalar(components.rotate.z),
            ],
            skew: vector(components.skew),
            scale: vector(components.scale),
            algebra,
            final_components: components,
            final_transform,
        }
    }

    // ========================================================================
    // Partial setters
    // ========================================================================

    /// Retargets translation only. Other channels keep running untouched.
    pub fn set_translate(
        &mut self,
        translate: Vec3,
        transition: Option<TransitionConfig>,
        callback: Option<Callback>,
    ) -> Result<()> {
        ensure_finite("translate", translate)?;
        validate_transition(transition.as_ref())?;

        self.final_components.translate = translate;
        self.refresh_final();
        self.translate.set(translate, transition, callback)
    }

    /// Retargets scale only.
    pub fn set_scale(
        &mut self,
        scale: Vec3,
        transition: Option<TransitionConfig>,
        callback: Option<Callback>,
    ) -> Result<()> {
        ensure_finite("scale", scale)?;
        validate_transition(transition.as_ref())?;

        self.final_components.scale = scale;
        self.refresh_final();
        self.scale.set(scale, transition, callback)
    }

    /// Retargets skew only.
    pub fn set_skew(
        &mut self,
        skew: Vec3,
        transition: Option<TransitionConfig>,
        callback: Option<Callback>,
    ) -> Result<()> {
        ensure_finite("skew", skew)?;
        validate_transition(transition.as_ref())?;

        self.final_components.skew = skew;
        self.refresh_final();
        self.skew.set(skew, transition, callback)
    }

    /// Retargets the rotation axes present in `rotate`.
    ///
    /// Axes set to `None` keep their target and their in-flight transition.
    /// `callback` runs once every touched axis has completed; with no axis
    /// touched nothing changes and it runs immediately.
    pub fn set_rotate(
        &mut self,
        rotate: impl Into<EulerUpdate>,
        transition: Option<TransitionConfig>,
        callback: Option<Callback>,
    ) -> Result<()> {
        let rotate = rotate.into();
        rotate.validate()?;
        validate_transition(transition.as_ref())?;

        if rotate.is_empty() {
            if let Some(callback) = callback {
                callback();
            }
            return Ok(());
        }

        let axes = rotate.axes();
        for (axis, angle) in axes.iter().enumerate() {
            if let Some(angle) = *angle {
                self.final_components.rotate[axis] = angle;
            }
        }
        self.refresh_final();

        let fan_in = callback.map(|cb| after_n_calls(rotate.touched(), cb));
        for (channel, angle) in self.rotate.iter_mut().zip(axes) {
            if let Some(angle) = angle {
                channel.set(angle, transition, fan_in.as_ref().map(FanIn::completion))?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Full setters
    // ========================================================================

    /// Retargets every channel to the decomposition of `transform`.
    ///
    /// `callback` runs exactly once, after all six channels have completed.
    /// The new final transform is `compose(decompose(transform))`, equal to
    /// `transform` within float tolerance.
    ///
    /// Fails with [`KinemaError::NonAffineTransform`] if the bottom row of
    /// `transform` is not `(0, 0, 0, 1)`; nothing is touched in that case.
    ///
    /// [`KinemaError::NonAffineTransform`]: kinema_core::KinemaError::NonAffineTransform
    pub fn set(
        &mut self,
        transform: Mat4,
        transition: Option<TransitionConfig>,
        callback: Option<Callback>,
    ) -> Result<()> {
        ensure_affine(&transform)?;
        let components = self.algebra.decompose(&transform);
        self.set_components(components, transition, callback)
    }

    /// Same as [`set`](Self::set) without the decomposition step.
    pub fn set_components(
        &mut self,
        components: TransformComponents,
        transition: Option<TransitionConfig>,
        callback: Option<Callback>,
    ) -> Result<()> {
        components.validate()?;
        validate_transition(transition.as_ref())?;

        log::debug!("CompositeTransform: retargeting all channels to {components:?}");

        self.final_components = components;
        self.refresh_final();

        let fan_in = callback.map(|cb| after_n_calls(CHANNEL_COUNT, cb));
        let completion = || fan_in.as_ref().map(FanIn::completion);

        self.translate.set(components.translate, transition, completion())?;
        for (channel, angle) in self.rotate.iter_mut().zip(components.rotate.to_array()) {
            channel.set(angle, transition, completion())?;
        }
        self.skew.set(components.skew, transition, completion())?;
        self.scale.set(components.scale, transition, completion())
    }

    /// Sets the fallback config on all six channels.
    pub fn set_default_transition(&mut self, transition: TransitionConfig) -> Result<()> {
        transition.validate()?;

        self.translate.set_default(transition);
        for channel in &mut self.rotate {
            channel.set_default(transition);
        }
        self.skew.set_default(transition);
        self.scale.set_default(transition);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The transform as of the current frame.
    ///
    /// Recomposes from in-flight channel values while transitioning, returns
    /// the cached final transform when idle.
    #[must_use]
    pub fn get(&self) -> Mat4 {
        if self.is_active() {
            self.algebra.compose(&self.current_components())
        } else {
            self.final_transform
        }
    }

    #[inline]
    #[must_use]
    pub fn get_final(&self) -> Mat4 {
        self.final_transform
    }

    #[inline]
    #[must_use]
    pub fn final_components(&self) -> TransformComponents {
        self.final_components
    }

    /// Current (in-flight) value of every channel.
    #[must_use]
    pub fn current_components(&self) -> TransformComponents {
        TransformComponents {
            translate: self.translate.get(),
            rotate: Vec3::new(self.rotate[0].get(), self.rotate[1].get(), self.rotate[2].get()),
            skew: self.skew.get(),
            scale: self.scale.get(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.translate.is_active()
            || self.rotate.iter().any(|c| c.is_active())
            || self.skew.is_active()
            || self.scale.is_active()
    }

    // ========================================================================
    // Frame tick & cancellation
    // ========================================================================

    /// Advances every channel by one frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.translate.update(dt);
        for channel in &mut self.rotate {
            channel.update(dt);
        }
        self.skew.update(dt);
        self.scale.update(dt);
    }

    /// Freezes the transform where it is right now.
    ///
    /// The current value becomes the final value and every channel stops.
    /// Pending completion callbacks are dropped.
    pub fn halt(&mut self) {
        let current = self.get();
        let was_active = self.is_active();

        self.final_components = self.current_components();
        self.final_transform = current;

        self.translate.halt();
        for channel in &mut self.rotate {
            channel.halt();
        }
        self.skew.halt();
        self.scale.halt();

        if was_active {
            log::debug!("CompositeTransform: halted mid-transition");
        }
    }

    // ========================================================================
    // Channel access
    // ========================================================================

    #[must_use]
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    #[must_use]
    pub fn translate_channel(&self) -> &V {
        &self.translate
    }

    /// Rotation channels in X, Y, Z order.
    #[must_use]
    pub fn rotate_channels(&self) -> &[S; 3] {
        &self.rotate
    }

    #[must_use]
    pub fn skew_channel(&self) -> &V {
        &self.skew
    }

    #[must_use]
    pub fn scale_channel(&self) -> &V {
        &self.scale
    }

    fn refresh_final(&mut self) {
        self.final_transform = self.algebra.compose(&self.final_components);
    }
}

fn validate_transition(transition: Option<&TransitionConfig>) -> Result<()> {
    transition.map_or(Ok(()), TransitionConfig::validate)
}
