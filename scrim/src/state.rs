use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` is the storage cell behind every mutable piece of this crate.
/// It uses `Arc<RwLock<T>>` internally, making it cheap to clone and safe to
/// share between an overlay handle, its controllers, and the callbacks handed
/// to concrete components. A dirty flag records that a transition happened so
/// hosts can decide whether a re-render is needed.
///
/// # Example
///
/// ```ignore
/// let visible = State::new(false);
/// visible.set(true);
/// assert!(visible.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    /// Set a new value.
    pub fn set(&self, value: T) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = value;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Update the value using a closure, returning the closure's result.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let out = f(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
        out
    }

    /// Check if the state has been modified since last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
