//! Imperative overlay lifecycle management.
//!
//! `scrim` lets a call site open transient overlay surfaces (dialogs, side
//! panels and the like) without maintaining open/closed state by hand,
//! while still letting the surface's closing animation finish before it is
//! unmounted. An optional boundary-scoped host renders every pending
//! overlay at one shared location, so call sites using the global variant
//! render nothing themselves.
//!
//! The crate is host-framework agnostic: the lifecycle is generic over the
//! caller property bag and the adapted concrete property shape, and the
//! host is generic over the application's node type.
//!
//! ```
//! use scrim::prelude::*;
//!
//! #[derive(Clone, Default)]
//! struct Props {
//!     message: String,
//! }
//! impl OverlayProps for Props {}
//!
//! let overlay = scrim::adapters::dialog::<Props>(true);
//! let controller = overlay.open(Props { message: "hello".into() });
//! assert!(overlay.is_open());
//!
//! controller.close(); // two-phase: the surface stays mounted...
//! assert!(overlay.is_mounted());
//! overlay.notify_closed(); // ...until the kit reports the close finished
//! assert!(!overlay.is_mounted());
//! ```

pub mod adapters;
pub mod error;
pub mod host;
pub mod key;
pub mod lifecycle;
pub mod props;
pub mod state;

pub use error::OverlayError;
pub use host::OverlayHost;
pub use lifecycle::Overlay;

pub mod prelude {
    pub use crate::adapters::{
        DialogProps, PanelProps, SurfaceProps, dialog, panel, surface,
    };
    pub use crate::error::OverlayError;
    pub use crate::host::{GlobalOverlay, HostHandle, OverlayHost, Registration};
    pub use crate::key::SurfaceKey;
    pub use crate::lifecycle::{Overlay, OverlayConfig, OverlayController, Placeholder};
    pub use crate::props::{
        CloseFn, ConfirmFn, OverlayProps, PropertyAdapter, SurfaceContext, confirm_then_close,
    };
    pub use crate::state::State;
}
