//! Marker types.

/// Marker type describing a property visit.
#[derive(Clone, Copy, Debug)]
pub struct Visit;
