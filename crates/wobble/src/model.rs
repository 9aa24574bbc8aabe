//! Spring-mass model driving the wobbly deformation.
//!
//! A fixed 4x4 grid of point masses spans the window surface, connected by
//! axis-aligned springs (horizontal and vertical neighbors only, no shear).
//! Gestures pin points as immobile anchors and inject velocity impulses;
//! every frame the host steps the model with semi-implicit Euler and reads
//! the 16 control positions back through the Bezier surface.
//!
//! Spring model after the Compiz wobbly plugin (Kristian Hogsberg).

use glam::Vec2;

/// Control net columns.
pub const GRID_WIDTH: usize = 4;
/// Control net rows.
pub const GRID_HEIGHT: usize = 4;
/// Total control points.
pub const GRID_POINTS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Velocity impulse scale for the maximize/unmaximize snap.
const INTENSITY: f32 = 0.8;

/// Per-axis force above which the grid counts as still in motion.
const MOVEMENT_THRESHOLD: f32 = 1.0;

/// One mass-bearing node of the control net.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Accumulated spring force, reset at the end of every sub-step.
    pub force: Vec2,
    /// Pinned anchor: receives spring forces but never integrates.
    pub immobile: bool,
}

/// Axis-aligned rest-offset constraint between two points, by arena index.
#[derive(Clone, Copy, Debug)]
struct Spring {
    a: usize,
    b: usize,
    /// Undeformed offset of `b` relative to `a`; exactly one axis is nonzero.
    rest: Vec2,
}

/// 4x4 point grid plus its 24 springs.
///
/// Coordinates are window-local pixels, +Y down. `spring_k` is stored
/// pre-scaled (configured value halved) and `mass` is the effective
/// integration mass (`100 - configured`), mirroring the settings-to-model
/// derivation of the original spring model.
pub struct WobblyModel {
    points: [GridPoint; GRID_POINTS],
    springs: Vec<Spring>,
    width: f32,
    height: f32,
    friction: f32,
    spring_k: f32,
    mass: f32,
    movement: bool,
    pinned: Option<usize>,
}

impl WobblyModel {
    /// Build the rest-state grid for a `width` x `height` surface.
    ///
    /// `friction`, `spring_k` and `mass` are the configured settings values;
    /// range checking is the caller's job (see [`Settings::validate`]).
    ///
    /// [`Settings::validate`]: crate::Settings::validate
    pub fn new(width: f32, height: f32, friction: f32, spring_k: f32, mass: f32) -> Self {
        let mut model = Self {
            points: [GridPoint::default(); GRID_POINTS],
            springs: Vec::with_capacity(2 * GRID_WIDTH * GRID_HEIGHT - GRID_WIDTH - GRID_HEIGHT),
            width,
            height,
            friction,
            spring_k: spring_k * 0.5,
            mass: 100.0 - mass,
            movement: false,
            pinned: None,
        };
        model.init_positions();
        model.init_springs();
        model
    }

    /// Lay the points out uniformly over the surface, row-major.
    fn init_positions(&mut self) {
        let gw = (GRID_WIDTH - 1) as f32;
        let gh = (GRID_HEIGHT - 1) as f32;

        for gy in 0..GRID_HEIGHT {
            for gx in 0..GRID_WIDTH {
                self.points[gy * GRID_WIDTH + gx].position = Vec2::new(
                    gx as f32 * self.width / gw,
                    gy as f32 * self.height / gh,
                );
            }
        }
    }

    /// One spring to the left neighbor and one to the upper neighbor per
    /// point: 12 horizontal + 12 vertical for the 4x4 grid.
    fn init_springs(&mut self) {
        let hpad = self.width / (GRID_WIDTH - 1) as f32;
        let vpad = self.height / (GRID_HEIGHT - 1) as f32;

        for gy in 0..GRID_HEIGHT {
            for gx in 0..GRID_WIDTH {
                let i = gy * GRID_WIDTH + gx;
                if gx > 0 {
                    self.springs.push(Spring {
                        a: i - 1,
                        b: i,
                        rest: Vec2::new(hpad, 0.0),
                    });
                }
                if gy > 0 {
                    self.springs.push(Spring {
                        a: i - GRID_WIDTH,
                        b: i,
                        rest: Vec2::new(0.0, vpad),
                    });
                }
            }
        }
    }

    /// Nearest point by Manhattan distance.
    ///
    /// Ties keep the first minimum in row-major scan order; callers rely on
    /// this being reproducible, so the comparison stays strict.
    fn nearest_point(&self, target: Vec2) -> usize {
        let mut min_distance = f32::INFINITY;
        let mut nearest = 0;

        for (i, point) in self.points.iter().enumerate() {
            let d = (point.position - target).abs();
            let distance = d.x + d.y;
            if distance < min_distance {
                min_distance = distance;
                nearest = i;
            }
        }

        nearest
    }

    /// Pin the point nearest to `(x, y)` and remember it as the drag anchor.
    ///
    /// No step is taken; motion starts once [`move_pinned`](Self::move_pinned)
    /// drags the anchor away from rest.
    pub fn grab(&mut self, x: f32, y: f32) {
        let i = self.nearest_point(Vec2::new(x, y));
        self.points[i].immobile = true;
        self.pinned = Some(i);
    }

    /// Pin the four extremal points and kick the rest of the grid inward.
    ///
    /// Every spring touching a corner point injects `-rest * INTENSITY` into
    /// its other endpoint, then a single zero-extra sub-step seeds the
    /// movement flag so the host keeps animating.
    pub fn maximize(&mut self) {
        self.pinned = None;

        let corners = [
            self.nearest_point(Vec2::ZERO),
            self.nearest_point(Vec2::new(self.width, 0.0)),
            self.nearest_point(Vec2::new(0.0, self.height)),
            self.nearest_point(Vec2::new(self.width, self.height)),
        ];
        for &i in &corners {
            self.points[i].immobile = true;
        }

        for si in 0..self.springs.len() {
            let spring = self.springs[si];
            if corners.contains(&spring.a) {
                self.points[spring.b].velocity -= spring.rest * INTENSITY;
            } else if corners.contains(&spring.b) {
                self.points[spring.a].velocity -= spring.rest * INTENSITY;
            }
        }

        self.step(0);
    }

    /// Pin the center point and kick its neighbors, for the un-snap wobble.
    pub fn unmaximize(&mut self) {
        let center = self.nearest_point(Vec2::new(self.width / 2.0, self.height / 2.0));
        self.points[center].immobile = true;
        self.pinned = Some(center);

        for si in 0..self.springs.len() {
            let spring = self.springs[si];
            if spring.a == center {
                self.points[spring.b].velocity -= spring.rest * INTENSITY;
            } else if spring.b == center {
                self.points[spring.a].velocity -= spring.rest * INTENSITY;
            }
        }

        self.step(0);
    }

    /// Drag the pinned anchor directly; the rest of the mesh lags behind
    /// elastically. No-op when nothing is pinned.
    pub fn move_pinned(&mut self, delta: Vec2) {
        if let Some(i) = self.pinned {
            self.points[i].position += delta;
        }
    }

    /// Advance the simulation `sub_steps + 1` passes.
    ///
    /// The count is inclusive: `step(0)` still performs exactly one pass,
    /// which the gesture entry points rely on to seed visible motion.
    pub fn step(&mut self, sub_steps: u32) {
        let mut movement = false;

        for _ in 0..=sub_steps {
            // Hooke's law on the rest-offset violation, per axis.
            for si in 0..self.springs.len() {
                let spring = self.springs[si];
                let f = self.spring_k
                    * (self.points[spring.b].position
                        - self.points[spring.a].position
                        - spring.rest);
                self.points[spring.a].force += f;
                self.points[spring.b].force -= f;
            }

            for point in &mut self.points {
                if point.immobile {
                    continue;
                }

                point.force -= self.friction * point.velocity;
                point.velocity += point.force / self.mass;
                point.position += point.velocity;

                if point.force.x.abs() > MOVEMENT_THRESHOLD
                    || point.force.y.abs() > MOVEMENT_THRESHOLD
                {
                    movement = true;
                }

                point.force = Vec2::ZERO;
            }
        }

        self.movement = movement;
    }

    /// Whether the last [`step`](Self::step) call saw force above threshold
    /// on any mobile point. Hosts poll this to decide when to tear down.
    #[inline]
    pub fn movement(&self) -> bool {
        self.movement
    }

    /// Live control points in row-major order.
    #[inline]
    pub fn points(&self) -> &[GridPoint; GRID_POINTS] {
        &self.points
    }

    /// Arena index of the drag anchor, if one is pinned.
    #[inline]
    pub fn pinned(&self) -> Option<usize> {
        self.pinned
    }
}
