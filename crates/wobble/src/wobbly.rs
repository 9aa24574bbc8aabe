//! Wobbly window effect: spring-mass grid sampled through the Bezier surface.
//!
//! Covers the move, maximize and unmaximize gestures. The host constructs
//! one effect per activation, forwards actor-movement notifications, drives
//! [`advance`](WobblyEffect::advance) from its frame clock and samples
//! [`deform_vertex`](WobblyEffect::deform_vertex) per mesh vertex; the
//! effect reports itself finished once motion subsides.

use glam::Vec2;

use crate::effect::FrameResult;
use crate::model::WobblyModel;
use crate::op::GrabOp;
use crate::settings::{Settings, SettingsError};
use crate::surface::BezierSurface;

/// Hard stop for the whole effect, in host clock units.
const TIMELINE_DURATION: f32 = 1000.0 * 1000.0;

/// Tile counts forced for the maximize snap; the configured density is only
/// used for the longer-lived move wobble.
const MAXIMIZE_TILES: usize = 10;

struct State {
    model: WobblyModel,
    surface: BezierSurface,
    speedup_factor: f32,
    /// Last known actor position; movement notifications diff against it.
    position: Vec2,
    /// Paint offset compensating actor movement, so the lagging mesh stays
    /// put in screen space while the actor slides under it.
    delta: Vec2,
    /// Clock value of the previous advance.
    last_tick: f32,
    /// Gesture released (or was instantaneous, as for maximize); the effect
    /// may tear down once movement subsides.
    ended: bool,
}

/// Wobbly deformation for one window activation.
pub struct WobblyEffect {
    state: Option<State>,
}

impl WobblyEffect {
    /// Activate the effect for a window of `size` at `position`.
    ///
    /// `pointer` is the pointer position at activation; it selects the grab
    /// anchor for the move gesture and is ignored by the snap gestures.
    /// Fails fast on out-of-range settings.
    pub fn new(
        op: GrabOp,
        size: Vec2,
        position: Vec2,
        pointer: Vec2,
        settings: &Settings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;

        let (tiles_x, tiles_y) = if op == GrabOp::Maximized {
            (MAXIMIZE_TILES, MAXIMIZE_TILES)
        } else {
            (settings.tiles_x as usize, settings.tiles_y as usize)
        };

        let mut model = WobblyModel::new(
            size.x,
            size.y,
            settings.friction,
            settings.spring_k,
            settings.mass,
        );
        let surface = BezierSurface::new(tiles_x, tiles_y, size.x, size.y);

        let ended = match op {
            GrabOp::Maximized => {
                model.maximize();
                true
            }
            GrabOp::Unmaximized => {
                model.unmaximize();
                true
            }
            _ => {
                let local = pointer - position;
                model.grab(local.x, local.y);
                false
            }
        };

        log::debug!("wobbly effect activated: {:?}, {}x{}", op, size.x, size.y);

        Ok(Self {
            state: Some(State {
                model,
                surface,
                speedup_factor: settings.speedup_factor,
                position,
                delta: Vec2::ZERO,
                last_tick: 0.0,
                ended,
            }),
        })
    }

    /// The window moved; drag the pinned anchor through the simulation and
    /// let the rest of the mesh lag behind.
    pub fn notify_moved(&mut self, position: Vec2) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let delta = position - state.position;
        state.position = position;
        state.delta -= delta;
        state.model.move_pinned(delta);
    }

    /// The grab was released; tear down once motion subsides.
    pub fn end_gesture(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.ended = true;
        }
    }

    /// Advance to `elapsed` (monotonic host clock, same units as the settle
    /// timer and `speedup_factor`; milliseconds in practice).
    ///
    /// Steps the model with `(elapsed - last) / speedup_factor` sub-steps and
    /// refreshes the displaced-position table. Terminates once the gesture
    /// has ended and the grid is at rest, or when the timeline expires.
    pub fn advance(&mut self, elapsed: f32) -> FrameResult {
        let Some(state) = self.state.as_mut() else {
            return FrameResult::FINISHED;
        };

        if elapsed >= TIMELINE_DURATION || (state.ended && !state.model.movement()) {
            self.destroy();
            return FrameResult::FINISHED;
        }

        let sub_steps = ((elapsed - state.last_tick) / state.speedup_factor).max(0.0) as u32;
        state.last_tick = elapsed;

        state.model.step(sub_steps);
        state.surface.evaluate(state.model.points());

        FrameResult::ANIMATING
    }

    /// Displaced position for normalized coordinates `(u, v)` on a window
    /// currently painted at `paint_size`.
    ///
    /// Scaling by the paint/simulation size ratio keeps the lookup correct
    /// when the window is resized while the wobble is still running. A
    /// destroyed effect deforms to identity.
    pub fn deform_vertex(&self, u: f32, v: f32, paint_size: Vec2) -> Vec2 {
        let Some(state) = self.state.as_ref() else {
            return Vec2::new(u, v) * paint_size;
        };

        (state.surface.sample(u, v) + state.delta) * paint_size / state.surface.size()
    }

    /// Whether the last step saw motion above threshold.
    pub fn movement(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.model.movement())
    }

    /// Release the simulation. Safe to call any number of times; a destroyed
    /// effect ignores notifications and reports finished from `advance`.
    pub fn destroy(&mut self) {
        if self.state.take().is_some() {
            log::debug!("wobbly effect destroyed");
        }
    }

    /// False once destroyed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }
}
