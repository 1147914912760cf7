use kinema_core::{Callback, Result};

use crate::transition::TransitionConfig;

/// One animatable degree of freedom (a scalar or a vector).
///
/// A channel holds a current value and a target, and advances toward the
/// target once per [`update`](Channel::update) tick.
///
/// # Completion
///
/// `on_complete` passed to [`set`](Channel::set) runs exactly once when the
/// channel reaches its target. If no interpolation is needed (instant config,
/// or target equal to the current value) it runs before `set` returns.
/// A superseding `set` completes the previous transition, so its callback
/// runs at that point. Only [`halt`](Channel::halt) discards it.
pub trait Channel {
    type Value: Copy + PartialEq;

    fn set(
        &mut self,
        target: Self::Value,
        transition: Option<TransitionConfig>,
        on_complete: Option<Callback>,
    ) -> Result<()>;

    fn get(&self) -> Self::Value;

    fn target(&self) -> Self::Value;

    fn is_active(&self) -> bool;

    /// Stops at the current value and drops any pending completion.
    fn halt(&mut self);

    /// Fallback config used when `set` is called without one.
    fn set_default(&mut self, transition: TransitionConfig);

    /// Advances one frame by `dt` seconds.
    fn update(&mut self, dt: f32);
}
