//! Base trait for slice state.

/// Marker trait for state owned by one domain.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the views of that domain read)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
