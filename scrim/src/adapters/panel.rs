//! Side-panel adapter.
//!
//! Panel-kind kits report animation completion for *both* transitions
//! through a single callback carrying a "now open" flag. The adapter guards
//! on that flag and forwards to the lifecycle's completion signal only when
//! a closing transition finished; an opening completion must never unmount
//! the surface.

use std::sync::Arc;

use crate::lifecycle::{Overlay, OverlayConfig};
use crate::props::{CloseFn, OverlayProps, PropertyAdapter};

/// Kit callback invoked after either transition, with the resulting
/// visibility.
pub type OpenChangeFn = Arc<dyn Fn(bool) + Send + Sync>;

/// Property shape handed to a panel-kind kit component.
pub struct PanelProps<P> {
    /// Logical visibility flag.
    pub open: bool,
    /// User-initiated dismissal.
    pub on_dismiss: CloseFn,
    /// Fired by the kit after each open/close transition finishes, with the
    /// new visibility. Only the `false` case advances the lifecycle.
    pub after_open_change: OpenChangeFn,
    /// Whether clicking the scrim dismisses the panel. Blocked unless the
    /// caller's bag overrides it.
    pub scrim_dismiss: bool,
    /// Caller-authored properties, confirm already wrapped.
    pub body: P,
}

/// Adapter for panel-kind kits.
pub fn panel_adapter<P: OverlayProps>() -> PropertyAdapter<P, PanelProps<P>> {
    Arc::new(|props, cx| {
        let mut body = props.clone();
        body.wrap_confirm(cx.request_close.clone());
        let after_open_change: OpenChangeFn = {
            let done = cx.notify_closed.clone();
            Arc::new(move |now_open: bool| {
                if !now_open {
                    done();
                }
            })
        };
        PanelProps {
            open: cx.open,
            on_dismiss: cx.request_close.clone(),
            after_open_change,
            scrim_dismiss: props.scrim_dismiss().unwrap_or(false),
            body,
        }
    })
}

/// Panel lifecycle. Only `animated` is configurable per kind; the adapter
/// and key namespace are fixed.
pub fn panel<P: OverlayProps>(animated: bool) -> Overlay<P, PanelProps<P>> {
    Overlay::new(
        panel_adapter(),
        OverlayConfig {
            animated,
            key_prefix: "panel",
        },
    )
}
