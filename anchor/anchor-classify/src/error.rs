//! Error types for search parameter validation.

/// Errors reported when search parameters are unusable.
///
/// Note that a query finding no face is *not* an error; it is the normal
/// negative result, reported as `None`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The anchor cutoff distance must be positive and finite.
    #[error("anchor cutoff distance must be positive and finite, got {0}")]
    InvalidCutoff(f32),

    /// The acceptance radius must be positive and finite.
    #[error("acceptance radius must be positive and finite, got {0}")]
    InvalidAcceptanceRadius(f32),
}
