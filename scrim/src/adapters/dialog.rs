//! Dialog adapter.
//!
//! Dialog-kind kits report animation completion only when the *closing*
//! transition finishes, so `after_close` forwards straight to the
//! lifecycle's completion signal with no guard.

use std::sync::Arc;

use crate::lifecycle::{Overlay, OverlayConfig};
use crate::props::{CloseFn, OverlayProps, PropertyAdapter};

/// Property shape handed to a dialog-kind kit component.
pub struct DialogProps<P> {
    /// Logical visibility flag.
    pub open: bool,
    /// User-initiated dismissal (escape, close button, scrim click).
    pub on_dismiss: CloseFn,
    /// Fired by the kit once the closing animation finished; unmounts the
    /// surface.
    pub after_close: CloseFn,
    /// Whether clicking the scrim dismisses the dialog. Blocked unless the
    /// caller's bag overrides it.
    pub scrim_dismiss: bool,
    /// Caller-authored properties, confirm already wrapped.
    pub body: P,
}

/// Adapter for dialog-kind kits.
pub fn dialog_adapter<P: OverlayProps>() -> PropertyAdapter<P, DialogProps<P>> {
    Arc::new(|props, cx| {
        let mut body = props.clone();
        body.wrap_confirm(cx.request_close.clone());
        DialogProps {
            open: cx.open,
            on_dismiss: cx.request_close.clone(),
            after_close: cx.notify_closed.clone(),
            scrim_dismiss: props.scrim_dismiss().unwrap_or(false),
            body,
        }
    })
}

/// Dialog lifecycle. Only `animated` is configurable per kind; the adapter
/// and key namespace are fixed.
pub fn dialog<P: OverlayProps>(animated: bool) -> Overlay<P, DialogProps<P>> {
    Overlay::new(
        dialog_adapter(),
        OverlayConfig {
            animated,
            key_prefix: "dialog",
        },
    )
}
