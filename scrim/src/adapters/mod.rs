//! Surface adapters.
//!
//! Adapters translate the lifecycle's fixed `{open, request_close,
//! notify_closed}` triple into the property shape one concrete overlay kind
//! expects. The generic core stays agnostic of kit-specific completion
//! semantics; each adapter encodes which guard its kit's
//! animation-completion signal needs.
//!
//! All built-in adapters inject the open flag and the dismissal-request
//! callback, block outside-click dismissal unless the caller's bag
//! overrides it, and wrap the caller's confirm callback so confirming
//! auto-closes.

mod dialog;
mod panel;

pub use dialog::{DialogProps, dialog, dialog_adapter};
pub use panel::{OpenChangeFn, PanelProps, panel, panel_adapter};

use std::sync::Arc;

use crate::lifecycle::{Overlay, OverlayConfig};
use crate::props::{CloseFn, OverlayProps, PropertyAdapter};

/// Properties produced by the default identity-like adapter.
pub struct SurfaceProps<P> {
    /// Logical visibility flag.
    pub open: bool,
    /// User-initiated dismissal.
    pub on_dismiss: CloseFn,
    /// Caller-authored properties, confirm already wrapped.
    pub body: P,
}

/// The default adapter: injects `open` and the close callback and wraps the
/// caller's confirm callback. No completion signal is mapped, so it suits
/// non-animated lifecycles and kits whose completion wiring the caller does
/// by hand.
pub fn surface_adapter<P: OverlayProps>() -> PropertyAdapter<P, SurfaceProps<P>> {
    Arc::new(|props, cx| {
        let mut body = props.clone();
        body.wrap_confirm(cx.request_close.clone());
        SurfaceProps {
            open: cx.open,
            on_dismiss: cx.request_close.clone(),
            body,
        }
    })
}

/// Lifecycle using the default adapter.
pub fn surface<P: OverlayProps>(animated: bool) -> Overlay<P, SurfaceProps<P>> {
    Overlay::new(
        surface_adapter(),
        OverlayConfig {
            animated,
            ..OverlayConfig::default()
        },
    )
}
