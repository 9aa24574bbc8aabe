//! Elastic resize effect: closed-form bow keyed by the dragged edge.
//!
//! No simulation here - each vertex offset is a polynomial of the vertex
//! position, the accumulated pointer delta and the pick-up point. Straight
//! edges bow away from the pick-up line; corners apply the same shape on
//! both axes, softened and windowed from the opposite corner. After release
//! a fixed-length settle phase replaces the pointer-driven delta with a
//! decaying oscillation, then the effect tears itself down.

use glam::Vec2;

use crate::effect::FrameResult;
use crate::op::ResizeEdge;
use crate::settings::{Settings, SettingsError};

/// Corner formulas soften the bow by this factor.
const CORNER_DIVIDER: f32 = 6.0;

/// Settle phase length in host clock units.
const SETTLE_DURATION: f32 = 1000.0;

/// Overshoot applied to the captured delta when the grab ends.
const SETTLE_OVERSHOOT: f32 = 1.5;

#[inline]
fn pow2(x: f32) -> f32 {
    x * x
}

struct Settle {
    /// Delta at release, overshot; the oscillation envelope peaks at it.
    stop_delta: Vec2,
    /// Clock value of the first settle frame, captured lazily.
    start: Option<f32>,
}

struct State {
    edge: ResizeEdge,
    /// Grab point relative to the window's top-left corner at activation.
    pickup: Vec2,
    /// Previous pointer sample; deltas accumulate against it.
    pointer_old: Vec2,
    delta: Vec2,
    /// Pointer motion to delta scale, derived from the spring constant.
    multiplier: f32,
    /// Oscillation speed of the settle phase; scales with friction.
    settle_oscillation: f32,
    settle: Option<Settle>,
}

/// Elastic bow deformation for one resize grab.
pub struct ResizeEffect {
    state: Option<State>,
}

impl ResizeEffect {
    /// Activate for a resize grab of `edge` on a window at `position`, with
    /// the pointer at `pointer`. Fails fast on out-of-range settings.
    pub fn new(
        edge: ResizeEdge,
        position: Vec2,
        pointer: Vec2,
        settings: &Settings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;

        log::debug!("resize effect activated: {:?}", edge);

        Ok(Self {
            state: Some(State {
                edge,
                pickup: pointer - position,
                pointer_old: pointer,
                delta: Vec2::ZERO,
                multiplier: settings.spring_k * 2.0 / 10.0,
                settle_oscillation: settings.friction * 10.0 + 10.0,
                settle: None,
            }),
        })
    }

    /// New pointer sample; accumulates the resize-speed delta.
    pub fn notify_pointer(&mut self, pointer: Vec2) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.delta += (state.pointer_old - pointer) * state.multiplier;
        state.pointer_old = pointer;
    }

    /// The grab was released; capture the overshot delta and start the
    /// settle phase. Subsequent calls are ignored.
    pub fn end_gesture(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.settle.is_some() {
            return;
        }

        state.settle = Some(Settle {
            stop_delta: state.delta * SETTLE_OVERSHOOT,
            start: None,
        });
    }

    /// Advance to `elapsed` (monotonic host clock).
    ///
    /// While the grab is live the delta is pointer-driven and there is
    /// nothing time-based to do. During settle, normalized progress `p`
    /// yields `delta = trunc(stop_delta * (1 - (1-p)^3) * sin(p * speed))`.
    /// The truncation toward zero gives the settle its stair-step at low
    /// amplitude. Finishes exactly when the settle clock reaches its
    /// duration.
    pub fn advance(&mut self, elapsed: f32) -> FrameResult {
        let Some(state) = self.state.as_mut() else {
            return FrameResult::FINISHED;
        };
        let Some(settle) = state.settle.as_mut() else {
            return FrameResult::ANIMATING;
        };

        let start = *settle.start.get_or_insert(elapsed);
        let progress = ((elapsed - start) / SETTLE_DURATION).clamp(0.0, 1.0);

        let eased = 1.0 - (1.0 - progress).powi(3);
        let oscillation = progress * state.settle_oscillation;
        let swing = eased * oscillation.sin();

        state.delta = Vec2::new(
            (settle.stop_delta.x * swing).trunc(),
            (settle.stop_delta.y * swing).trunc(),
        );

        if progress >= 1.0 {
            self.destroy();
            return FrameResult::FINISHED;
        }

        FrameResult::ANIMATING
    }

    /// Displaced position for normalized coordinates `(u, v)` on a window
    /// currently painted at `paint_size`.
    ///
    /// Corner variants deform the x axis first and feed the bowed x into the
    /// y window, matching the in-place vertex update of the original effect.
    /// A destroyed effect deforms to identity.
    pub fn deform_vertex(&self, u: f32, v: f32, paint_size: Vec2) -> Vec2 {
        let mut p = Vec2::new(u, v) * paint_size;
        let Some(state) = self.state.as_ref() else {
            return p;
        };

        let (w, h) = (paint_size.x, paint_size.y);
        let d = state.delta;
        let pickup = state.pickup;

        match state.edge {
            ResizeEdge::West => {
                p.x += d.x * (w - p.x) * pow2(p.y - pickup.y) / (h * h * w);
            }
            ResizeEdge::East => {
                p.x += d.x * p.x * pow2(p.y - pickup.y) / (h * h * w);
            }
            ResizeEdge::South => {
                p.y += d.y * p.y * pow2(p.x - pickup.x) / (w * w * h);
            }
            ResizeEdge::North => {
                p.y += d.y * (h - p.y) * pow2(p.x - pickup.x) / (w * w * h);
            }
            ResizeEdge::NorthWest => {
                p.x += d.x / CORNER_DIVIDER * (w - p.x) * pow2(p.y) / (h * h * w);
                p.y += d.y / CORNER_DIVIDER * (h - p.y) * pow2(p.x) / (w * w * h);
            }
            ResizeEdge::NorthEast => {
                p.x += d.x / CORNER_DIVIDER * p.x * pow2(p.y) / (h * h * w);
                p.y += d.y / CORNER_DIVIDER * (h - p.y) * pow2(w - p.x) / (w * w * h);
            }
            ResizeEdge::SouthEast => {
                p.x += d.x / CORNER_DIVIDER * p.x * pow2(h - p.y) / (h * h * w);
                p.y += d.y / CORNER_DIVIDER * p.y * pow2(w - p.x) / (w * w * h);
            }
            ResizeEdge::SouthWest => {
                p.x += d.x / CORNER_DIVIDER * (w - p.x) * pow2(p.y - h) / (h * h * w);
                p.y += d.y / CORNER_DIVIDER * p.y * pow2(p.x) / (w * w * h);
            }
        }

        p
    }

    /// Current accumulated delta (pointer-driven, or oscillating during
    /// settle).
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.state.as_ref().map_or(Vec2::ZERO, |s| s.delta)
    }

    /// Release the effect state. Safe to call any number of times.
    pub fn destroy(&mut self) {
        if self.state.take().is_some() {
            log::debug!("resize effect destroyed");
        }
    }

    /// False once destroyed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }
}
