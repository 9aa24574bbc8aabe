//! Grab gesture classification.
//!
//! The host classifies each grab when it begins and hands the tag to
//! [`WindowEffect::from_grab`](crate::WindowEffect::from_grab). Resize grabs
//! carry the dragged edge or corner, which selects the deformation formula.

/// Edge or corner being dragged during a resize grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    West,
    East,
    South,
    North,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

/// Gesture classification delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabOp {
    /// Window is being dragged around.
    Move,
    /// Window just snapped into its maximized frame.
    Maximized,
    /// Window just left its maximized frame.
    Unmaximized,
    /// Window is being resized by the given edge or corner.
    Resize(ResizeEdge),
}
