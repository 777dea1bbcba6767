//! Property bag contracts shared by the lifecycle and the adapters.

use std::sync::Arc;

/// Callback used to request a close or acknowledge a finished transition.
pub type CloseFn = Arc<dyn Fn() + Send + Sync>;

/// Caller-supplied confirm callback carrying a result value.
pub type ConfirmFn<V> = Arc<dyn Fn(V) + Send + Sync>;

/// Contract for caller-authored property bags consumed by the built-in
/// adapters.
///
/// Bags that carry a confirm callback override [`wrap_confirm`] to replace
/// their slot with [`confirm_then_close`], so confirming automatically
/// requests a close. Bags that expose an outside-click dismissal preference
/// override [`scrim_dismiss`]; `None` keeps the adapter's default (blocked).
///
/// [`wrap_confirm`]: OverlayProps::wrap_confirm
/// [`scrim_dismiss`]: OverlayProps::scrim_dismiss
pub trait OverlayProps: Clone + Send + Sync + 'static {
    /// Wrap the bag's confirm slot so the given close callback runs after
    /// the caller's own confirm logic.
    ///
    /// ```ignore
    /// fn wrap_confirm(&mut self, close: CloseFn) {
    ///     if let Some(confirm) = self.on_confirm.take() {
    ///         self.on_confirm = Some(confirm_then_close(confirm, close));
    ///     }
    /// }
    /// ```
    fn wrap_confirm(&mut self, close: CloseFn) {
        let _ = close;
    }

    /// Explicit caller override for outside-click dismissal.
    fn scrim_dismiss(&self) -> Option<bool> {
        None
    }
}

/// Wrap a confirm callback so each invocation forwards the value to the
/// original callback exactly once and then requests close exactly once.
pub fn confirm_then_close<V: 'static>(confirm: ConfirmFn<V>, close: CloseFn) -> ConfirmFn<V> {
    Arc::new(move |value| {
        confirm(value);
        close();
    })
}

/// Internal lifecycle state handed to a property adapter on every render.
///
/// This triple is the only thing the generic lifecycle exposes to adapters;
/// everything kit-specific lives on the adapter side.
#[derive(Clone)]
pub struct SurfaceContext {
    /// Logical open flag. `false` while a closing animation plays.
    pub open: bool,
    /// Request a close (two-phase when the lifecycle is animated).
    pub request_close: CloseFn,
    /// Report that the closing transition finished. Adapters must only
    /// invoke this for a *closing* transition, never an opening one.
    pub notify_closed: CloseFn,
}

/// Pure translation from caller properties plus lifecycle state to the
/// property shape a concrete overlay component expects.
pub type PropertyAdapter<P, C> = Arc<dyn Fn(&P, &SurfaceContext) -> C + Send + Sync>;
