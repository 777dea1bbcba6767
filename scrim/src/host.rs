//! Boundary-owned placeholder registry.
//!
//! An [`OverlayHost`] is the single mounting point for overlays opened
//! through the global variant. Call sites register a placeholder view once
//! on genuine mount (not per render, and not per overlay open/close) and the
//! returned [`Registration`] guard removes the entry when the call site is
//! torn down. The boundary renders its own children first, then every
//! registered view in registration order, so later registrations paint on
//! top.
//!
//! Hosts are ordinary values, one per boundary instance. There is no static
//! registry, so independent boundaries never interfere with each other.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use crate::error::OverlayError;
use crate::key::SurfaceKey;
use crate::lifecycle::{Overlay, OverlayController, Placeholder};
use crate::state::State;

/// Registered placeholder view: produces the call site's current render
/// output each time the boundary renders.
pub type PlaceholderFn<N> = Arc<dyn Fn() -> N + Send + Sync>;

struct HostEntry<N> {
    key: SurfaceKey,
    view: PlaceholderFn<N>,
}

struct HostInner<N> {
    entries: State<Vec<HostEntry<N>>>,
    defaults: Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl<N> HostInner<N> {
    fn remove(&self, key: SurfaceKey) {
        self.entries.update(|entries| entries.retain(|e| e.key != key));
    }

    fn default_props<P: Clone + 'static>(&self) -> Option<P> {
        let defaults = self.defaults.lock().unwrap_or_else(|e| e.into_inner());
        defaults
            .get(&TypeId::of::<P>())
            .and_then(|bag| bag.downcast_ref::<P>())
            .cloned()
    }
}

/// The boundary component's registry of pending overlay placeholders.
///
/// `N` is the host application's node type; this crate never inspects it.
pub struct OverlayHost<N> {
    inner: Arc<HostInner<N>>,
}

impl<N: 'static> OverlayHost<N> {
    /// Create an empty boundary registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HostInner {
                entries: State::default(),
                defaults: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Weak handle for call sites. Resolving it fails once the boundary is
    /// dropped.
    pub fn handle(&self) -> HostHandle<N> {
        HostHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Append a placeholder view, keyed by the call site's identity.
    ///
    /// Dropping the returned guard (or calling [`deregister`]) removes the
    /// entry; the overlay's own open/closed state is irrelevant here.
    ///
    /// [`deregister`]: OverlayHost::deregister
    pub fn register(
        &self,
        key: SurfaceKey,
        view: impl Fn() -> N + Send + Sync + 'static,
    ) -> Registration<N> {
        push_entry(&self.inner, key, Arc::new(view))
    }

    /// Remove the entry with the given identity. No-op if absent.
    pub fn deregister(&self, key: SurfaceKey) {
        self.inner.remove(key);
        log::debug!("overlay host: deregistered placeholder {key}");
    }

    /// Evaluate every registered view, in registration order.
    pub fn placeholders(&self) -> Vec<N> {
        self.inner
            .entries
            .with(|entries| entries.iter().map(|e| (e.view)()).collect())
    }

    /// The boundary render rule: children first, registered placeholders
    /// after, so overlays paint on top of the primary content.
    pub fn render(&self, children: Vec<N>) -> Vec<N> {
        let mut nodes = children;
        nodes.extend(self.placeholders());
        nodes
    }

    /// Set the boundary-wide default property bag for one overlay kind.
    ///
    /// Used by [`GlobalOverlay::open_default`] when the caller supplies no
    /// properties; caller-supplied bags always win wholesale.
    pub fn set_default_props<P: Clone + Send + Sync + 'static>(&self, props: P) {
        let mut defaults = self.inner.defaults.lock().unwrap_or_else(|e| e.into_inner());
        defaults.insert(TypeId::of::<P>(), Box::new(props));
    }

    /// The boundary-wide default bag for one overlay kind, if set.
    pub fn default_props<P: Clone + Send + Sync + 'static>(&self) -> Option<P> {
        self.inner.default_props::<P>()
    }

    /// Whether the entry set changed since the flag was last cleared.
    pub fn is_dirty(&self) -> bool {
        self.inner.entries.is_dirty()
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.inner.entries.clear_dirty();
    }
}

impl<N: 'static> Default for OverlayHost<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn push_entry<N>(inner: &Arc<HostInner<N>>, key: SurfaceKey, view: PlaceholderFn<N>) -> Registration<N> {
    inner.entries.update(|entries| entries.push(HostEntry { key, view }));
    log::debug!("overlay host: registered placeholder {key}");
    Registration {
        host: Arc::downgrade(inner),
        key,
    }
}

/// RAII guard for one registry entry.
///
/// Tied to the call site's own lifetime: dropping it deregisters the
/// placeholder. Harmless if the boundary was torn down first.
pub struct Registration<N> {
    host: Weak<HostInner<N>>,
    key: SurfaceKey,
}

impl<N> Registration<N> {
    /// Identity of the registered entry.
    pub fn key(&self) -> SurfaceKey {
        self.key
    }
}

impl<N> Drop for Registration<N> {
    fn drop(&mut self) {
        if let Some(host) = self.host.upgrade() {
            host.remove(self.key);
            log::debug!("overlay host: deregistered placeholder {}", self.key);
        }
    }
}

/// Weak reference to a boundary, passed down to call sites.
pub struct HostHandle<N> {
    inner: Weak<HostInner<N>>,
}

impl<N> Clone for HostHandle<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<N: 'static> HostHandle<N> {
    /// The global opener variant: register an overlay's placeholder with the
    /// boundary so the call site renders nothing itself.
    ///
    /// `surface` applies the surface component, mapping the overlay's
    /// current [`Placeholder`] to a host node; the boundary re-evaluates it
    /// on every render. Fails fast with [`OverlayError::MissingBoundary`]
    /// before any state is touched if the boundary is gone.
    pub fn attach<P, C>(
        &self,
        overlay: Overlay<P, C>,
        surface: impl Fn(Placeholder<C>) -> N + Send + Sync + 'static,
    ) -> Result<GlobalOverlay<P, C, N>, OverlayError>
    where
        P: Clone + Send + Sync + 'static,
        C: 'static,
    {
        let Some(inner) = self.inner.upgrade() else {
            return Err(OverlayError::MissingBoundary);
        };
        let view = {
            let overlay = overlay.clone();
            move || surface(overlay.placeholder())
        };
        let registration = push_entry(&inner, overlay.key(), Arc::new(view));
        Ok(GlobalOverlay {
            overlay,
            registration,
        })
    }
}

/// An overlay mounted at the boundary instead of at its call site.
///
/// Owns the lifecycle plus its registry entry; dropping it deregisters the
/// placeholder (call-site teardown), independent of the overlay being open.
pub struct GlobalOverlay<P, C, N> {
    overlay: Overlay<P, C>,
    registration: Registration<N>,
}

impl<P, C, N> GlobalOverlay<P, C, N>
where
    P: Send + Sync + 'static,
    C: 'static,
{
    /// Open with the given properties. See [`Overlay::open`].
    pub fn open(&self, props: P) -> OverlayController<P, C> {
        self.overlay.open(props)
    }

    /// Open with the boundary's default bag for `P`, falling back to
    /// `P::default()` when the boundary set none (or is gone).
    pub fn open_default(&self) -> OverlayController<P, C>
    where
        P: Clone + Default,
    {
        let props = self
            .registration
            .host
            .upgrade()
            .and_then(|host| host.default_props::<P>())
            .unwrap_or_default();
        self.overlay.open(props)
    }

    /// See [`Overlay::request_close`].
    pub fn request_close(&self) {
        self.overlay.request_close();
    }

    /// See [`Overlay::notify_closed`].
    pub fn notify_closed(&self) {
        self.overlay.notify_closed();
    }

    /// The lifecycle's stable identity token.
    pub fn key(&self) -> SurfaceKey {
        self.overlay.key()
    }

    /// The underlying lifecycle manager.
    pub fn overlay(&self) -> &Overlay<P, C> {
        &self.overlay
    }
}
