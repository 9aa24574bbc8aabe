//! Window deformation effects: wobbly move/maximize and elastic resize.
//!
//! Two independent deformation modes:
//! - **Wobbly**: a 4×4 spring-mass grid stepped every frame, sampled through
//!   a bicubic Bezier surface (move, maximize and unmaximize gestures)
//! - **Resize**: a closed-form bow keyed by the dragged edge or corner, with
//!   a decaying-oscillation settle once the grab ends
//!
//! This crate is framework-agnostic - it computes deformation only. The
//! compositor-side host recognizes gestures, stores settings, schedules the
//! per-frame clock and renders; it feeds positions in and samples
//! [`WindowEffect::deform_vertex`] once per mesh vertex per paint.

pub mod effect;
pub mod maximize;
pub mod model;
pub mod op;
pub mod resize;
pub mod settings;
pub mod surface;
pub mod wobbly;

pub use effect::{FrameResult, WindowEffect};
pub use maximize::{maximize_should_wobble, MaximizeFlags, Rect};
pub use model::WobblyModel;
pub use op::{GrabOp, ResizeEdge};
pub use resize::ResizeEffect;
pub use settings::{Settings, SettingsError};
pub use surface::BezierSurface;
pub use wobbly::WobblyEffect;
