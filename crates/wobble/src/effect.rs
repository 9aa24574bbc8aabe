//! Host-facing effect dispatch.
//!
//! One [`WindowEffect`] exists per active gesture on a surface. A new grab
//! on the same surface must destroy the previous effect before constructing
//! the next one - two effects must never deform the same surface at once.

use glam::Vec2;

use crate::op::GrabOp;
use crate::resize::ResizeEffect;
use crate::settings::{Settings, SettingsError};
use crate::wobbly::WobblyEffect;

/// Outcome of one frame; the host keeps scheduling ticks while
/// `still_animating` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameResult {
    pub still_animating: bool,
}

impl FrameResult {
    pub const ANIMATING: Self = Self {
        still_animating: true,
    };
    pub const FINISHED: Self = Self {
        still_animating: false,
    };
}

/// Either deformation mode, selected from the gesture classification.
pub enum WindowEffect {
    Wobbly(WobblyEffect),
    Resize(ResizeEffect),
}

impl WindowEffect {
    /// Build the effect for a classified grab, or `Ok(None)` when the
    /// relevant enable toggle is off.
    ///
    /// Move grabs always wobble. Resize grabs require `resize_effect`; the
    /// maximize snap requires `maximize_effect`. The unmaximize wobble is
    /// unconditional.
    pub fn from_grab(
        op: GrabOp,
        size: Vec2,
        position: Vec2,
        pointer: Vec2,
        settings: &Settings,
    ) -> Result<Option<Self>, SettingsError> {
        settings.validate()?;

        let effect = match op {
            GrabOp::Resize(edge) => {
                if !settings.resize_effect {
                    return Ok(None);
                }
                Self::Resize(ResizeEffect::new(edge, position, pointer, settings)?)
            }
            GrabOp::Maximized if !settings.maximize_effect => return Ok(None),
            _ => Self::Wobbly(WobblyEffect::new(op, size, position, pointer, settings)?),
        };

        Ok(Some(effect))
    }

    /// Advance to `elapsed` on the host's monotonic frame clock.
    pub fn advance(&mut self, elapsed: f32) -> FrameResult {
        match self {
            Self::Wobbly(effect) => effect.advance(elapsed),
            Self::Resize(effect) => effect.advance(elapsed),
        }
    }

    /// The window's actor moved. Drives the wobble's pinned anchor; resize
    /// ignores it (its delta is pointer-driven).
    pub fn notify_moved(&mut self, position: Vec2) {
        if let Self::Wobbly(effect) = self {
            effect.notify_moved(position);
        }
    }

    /// New pointer sample. Drives the resize delta; the wobble ignores it
    /// (its anchor follows the actor, not the pointer).
    pub fn notify_pointer(&mut self, pointer: Vec2) {
        if let Self::Resize(effect) = self {
            effect.notify_pointer(pointer);
        }
    }

    /// The grab was released.
    pub fn end_gesture(&mut self) {
        match self {
            Self::Wobbly(effect) => effect.end_gesture(),
            Self::Resize(effect) => effect.end_gesture(),
        }
    }

    /// Displaced position for normalized coordinates `(u, v)` at the current
    /// paint size; the renderer calls this once per mesh vertex per paint.
    pub fn deform_vertex(&self, u: f32, v: f32, paint_size: Vec2) -> Vec2 {
        match self {
            Self::Wobbly(effect) => effect.deform_vertex(u, v, paint_size),
            Self::Resize(effect) => effect.deform_vertex(u, v, paint_size),
        }
    }

    /// Idempotent teardown; must run before a superseding effect is built.
    pub fn destroy(&mut self) {
        match self {
            Self::Wobbly(effect) => effect.destroy(),
            Self::Resize(effect) => effect.destroy(),
        }
    }

    /// False once destroyed.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Wobbly(effect) => effect.is_active(),
            Self::Resize(effect) => effect.is_active(),
        }
    }
}
