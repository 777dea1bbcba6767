//! Error types.

/// Errors surfaced by the overlay host.
///
/// Caller misuse (stale controllers, repeated close requests, spurious
/// completion signals) is inert by contract and never an error; the only
/// intrinsic failure is a missing boundary, which must be fixed by
/// restructuring the tree.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OverlayError {
    /// The global opener variant was used without a live boundary.
    #[error(
        "no overlay boundary is mounted; create an OverlayHost above this call site and pass its handle down"
    )]
    MissingBoundary,
}
