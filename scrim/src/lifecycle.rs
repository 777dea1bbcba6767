//! Overlay lifecycle state machine.
//!
//! An [`Overlay`] owns the mount/open/close/update cycle for exactly one
//! overlay call site. Opening returns an [`OverlayController`] bound to that
//! session, and [`Overlay::placeholder`] produces the current render output:
//! an identity-stable empty node while unmounted, or the surface's adapted
//! properties while mounted.
//!
//! Closing is two-phase when the lifecycle is animated: `request_close`
//! flips the logical open flag while the component stays mounted so its
//! closing animation can play, and the component's completion signal
//! (`notify_closed`) performs the actual unmount. Non-animated lifecycles
//! unmount in the same transition as the close request.

use std::sync::{Arc, Weak};

use crate::key::{DEFAULT_KEY_PREFIX, SurfaceKey};
use crate::props::{CloseFn, PropertyAdapter, SurfaceContext};
use crate::state::State;

/// Configuration for an overlay lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct OverlayConfig {
    /// Whether closing waits for the component's completion signal before
    /// unmounting. Defaults to `true`.
    pub animated: bool,
    /// Namespace for the lifecycle's [`SurfaceKey`].
    pub key_prefix: &'static str,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            animated: true,
            key_prefix: DEFAULT_KEY_PREFIX,
        }
    }
}

/// Mutable lifecycle state, guarded by the shared [`State`] cell.
struct LifecycleState<P> {
    mounted: bool,
    open: bool,
    props: Option<P>,
    /// Session generation. Bumped on every open so controllers from a
    /// superseded session degrade to no-ops.
    session: u64,
}

impl<P> Default for LifecycleState<P> {
    fn default() -> Self {
        Self {
            mounted: false,
            open: false,
            props: None,
            session: 0,
        }
    }
}

struct Shared<P, C> {
    key: SurfaceKey,
    animated: bool,
    adapter: PropertyAdapter<P, C>,
    state: State<LifecycleState<P>>,
}

impl<P, C> Shared<P, C> {
    fn request_close(&self) {
        let changed = self.state.update(|s| {
            if !s.mounted || !s.open {
                return false;
            }
            s.open = false;
            if !self.animated {
                s.mounted = false;
                s.props = None;
            }
            true
        });
        if changed {
            log::debug!(
                "overlay {}: close requested (animated={})",
                self.key,
                self.animated
            );
        }
    }

    fn notify_closed(&self) {
        if !self.animated {
            return;
        }
        let unmounted = self.state.update(|s| {
            // Only a pending close may unmount; a completion signal that
            // arrives while still open belongs to an opening transition.
            if !s.mounted || s.open {
                return false;
            }
            s.mounted = false;
            s.props = None;
            true
        });
        if unmounted {
            log::debug!("overlay {}: close transition finished, unmounted", self.key);
        }
    }
}

/// Per-call-site overlay lifecycle manager.
///
/// Cheap to clone; all clones share the same lifecycle instance and key.
/// `P` is the caller-supplied property bag, `C` the adapted property shape
/// handed to the concrete component.
pub struct Overlay<P, C> {
    shared: Arc<Shared<P, C>>,
}

impl<P, C> Clone for Overlay<P, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P, C> Overlay<P, C>
where
    P: Send + Sync + 'static,
    C: 'static,
{
    /// Create a lifecycle with the given property adapter.
    ///
    /// See [`crate::adapters`] for the built-in adapters and their
    /// per-kind constructors.
    pub fn new(adapter: PropertyAdapter<P, C>, config: OverlayConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                key: SurfaceKey::new(config.key_prefix),
                animated: config.animated,
                adapter,
                state: State::default(),
            }),
        }
    }

    /// The lifecycle's stable identity token.
    pub fn key(&self) -> SurfaceKey {
        self.shared.key
    }

    /// Whether the concrete component is currently part of the render output.
    pub fn is_mounted(&self) -> bool {
        self.shared.state.with(|s| s.mounted)
    }

    /// The logical open flag handed to the concrete component.
    pub fn is_open(&self) -> bool {
        self.shared.state.with(|s| s.open)
    }

    /// Open the overlay, starting a fresh session with exactly the given
    /// properties. Mounts and opens in one transition.
    ///
    /// Re-opening an already-open overlay starts a new session: the previous
    /// session's properties are discarded and its controllers become inert,
    /// while the key is unchanged.
    pub fn open(&self, props: P) -> OverlayController<P, C> {
        let session = self.shared.state.update(|s| {
            s.session += 1;
            s.mounted = true;
            s.open = true;
            s.props = Some(props);
            s.session
        });
        log::debug!("overlay {}: session {} opened", self.shared.key, session);
        OverlayController {
            shared: Arc::downgrade(&self.shared),
            session,
        }
    }

    /// Request a close. Idempotent; has no effect while already closed or
    /// closing.
    pub fn request_close(&self) {
        self.shared.request_close();
    }

    /// Report that the component's closing transition finished, unmounting
    /// it. Only meaningful on animated lifecycles with a close pending;
    /// spurious calls are ignored.
    pub fn notify_closed(&self) {
        self.shared.notify_closed();
    }

    /// Whether a transition happened since the host last cleared the flag.
    pub fn is_dirty(&self) -> bool {
        self.shared.state.is_dirty()
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.shared.state.clear_dirty();
    }

    /// The current render output.
    ///
    /// While unmounted this is an empty node under the lifecycle's key, so
    /// the surrounding tree performs no structural work. While mounted it
    /// carries the adapter's output for the current properties and state,
    /// under the same key.
    pub fn placeholder(&self) -> Placeholder<C>
    where
        P: Clone,
    {
        let snapshot = self.shared.state.with(|s| {
            if s.mounted {
                s.props.clone().map(|props| (props, s.open))
            } else {
                None
            }
        });
        match snapshot {
            Some((props, open)) => {
                let ctx = SurfaceContext {
                    open,
                    request_close: self.close_fn(),
                    notify_closed: self.done_fn(),
                };
                Placeholder::Surface {
                    key: self.shared.key,
                    props: (self.shared.adapter)(&props, &ctx),
                }
            }
            None => Placeholder::Empty {
                key: self.shared.key,
            },
        }
    }

    fn close_fn(&self) -> CloseFn {
        let weak = Arc::downgrade(&self.shared);
        Arc::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.request_close();
            }
        })
    }

    fn done_fn(&self) -> CloseFn {
        let weak = Arc::downgrade(&self.shared);
        Arc::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.notify_closed();
            }
        })
    }
}

/// Handle to one open session, returned by [`Overlay::open`].
///
/// Controllers are stamped with their session: once the session is
/// superseded by a later `open`, or the overlay has unmounted, both
/// operations become no-ops. A stale controller never panics.
pub struct OverlayController<P, C> {
    shared: Weak<Shared<P, C>>,
    session: u64,
}

impl<P, C> Clone for OverlayController<P, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
            session: self.session,
        }
    }
}

impl<P, C> OverlayController<P, C> {
    /// Replace the session's properties wholesale (no merging).
    pub fn update(&self, props: P) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        shared.state.update(|s| {
            if s.session != self.session || !s.mounted {
                return;
            }
            s.props = Some(props);
        });
    }

    /// Request a close of this session. Same transition as
    /// [`Overlay::request_close`], gated on the session still being current.
    pub fn close(&self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let current = shared.state.with(|s| s.session == self.session);
        if current {
            shared.request_close();
        }
    }
}

/// Render output of an overlay lifecycle, tagged with its stable key.
pub enum Placeholder<C> {
    /// Nothing to render; the component is unmounted.
    Empty {
        /// The lifecycle's key, identical to the mounted arm's.
        key: SurfaceKey,
    },
    /// The surface component should be instantiated with these properties.
    Surface {
        /// The lifecycle's key.
        key: SurfaceKey,
        /// Adapted concrete properties for the component.
        props: C,
    },
}

impl<C> Placeholder<C> {
    /// The stable key, present in both arms.
    pub fn key(&self) -> SurfaceKey {
        match self {
            Placeholder::Empty { key } | Placeholder::Surface { key, .. } => *key,
        }
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        matches!(self, Placeholder::Empty { .. })
    }

    /// The adapted properties, if mounted.
    pub fn props(&self) -> Option<&C> {
        match self {
            Placeholder::Surface { props, .. } => Some(props),
            Placeholder::Empty { .. } => None,
        }
    }

    /// Consume the placeholder, returning the adapted properties if mounted.
    pub fn into_props(self) -> Option<C> {
        match self {
            Placeholder::Surface { props, .. } => Some(props),
            Placeholder::Empty { .. } => None,
        }
    }
}
