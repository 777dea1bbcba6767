//! Stable identity tokens for placeholders and registry entries.

use std::fmt;

use uuid::Uuid;

/// Prefix used by lifecycles created without an adapter-specific one.
pub const DEFAULT_KEY_PREFIX: &str = "surface";

/// Stable identity for one overlay call site.
///
/// A key is assigned once when the lifecycle is created and never changes,
/// so the placeholder it tags keeps its identity across renders and across
/// open/close sessions. The prefix namespaces keys per adapter kind so
/// different overlay kinds cannot collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SurfaceKey {
    prefix: &'static str,
    id: Uuid,
}

impl SurfaceKey {
    /// Create a new unique key under the given prefix.
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            id: Uuid::new_v4(),
        }
    }

    /// The adapter-kind prefix.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.id)
    }
}
