//! Bicubic Bezier surface over the 4x4 control net.
//!
//! The weight table is built once per effect activation: for every vertex of
//! the fine tessellation it holds the 16 Bernstein basis coefficients of the
//! control grid. Each animation tick recombines the live control positions
//! through the table; the renderer then samples the result once per mesh
//! vertex with a nearest-vertex lookup.

use glam::Vec2;

use crate::model::{GridPoint, GRID_POINTS};

/// Cubic Bernstein basis vector at parameter `t`.
///
/// Weights stay in f64: the partition-of-unity guarantee is held to 1e-9,
/// tighter than f32 products can keep over 16 terms.
#[inline]
fn bernstein(t: f64) -> [f64; 4] {
    let u = 1.0 - t;
    [u * u * u, 3.0 * t * u * u, 3.0 * t * t * u, t * t * t]
}

/// Precomputed basis weights plus the current displaced tile vertices.
///
/// Tables are `(tiles_y + 1) x (tiles_x + 1)`, stored flat row-major.
pub struct BezierSurface {
    tiles_x: usize,
    tiles_y: usize,
    width: f32,
    height: f32,
    /// Per tile vertex: 16 weights in control-point row-major order.
    weights: Vec<[f64; GRID_POINTS]>,
    /// Current displaced position of every tile vertex.
    deformed: Vec<Vec2>,
}

impl BezierSurface {
    /// Build the weight table for a `width` x `height` surface tessellated
    /// into `tiles_x` x `tiles_y` tiles. The displaced table starts at the
    /// undeformed layout, so sampling is valid before the first evaluation.
    pub fn new(tiles_x: usize, tiles_y: usize, width: f32, height: f32) -> Self {
        let count = (tiles_x + 1) * (tiles_y + 1);
        let mut weights = Vec::with_capacity(count);
        let mut deformed = Vec::with_capacity(count);

        for y in 0..=tiles_y {
            let ty = y as f64 / tiles_y as f64;
            let by = bernstein(ty);

            for x in 0..=tiles_x {
                let tx = x as f64 / tiles_x as f64;
                let bx = bernstein(tx);

                let mut w = [0.0f64; GRID_POINTS];
                for i in 0..4 {
                    for j in 0..4 {
                        w[i * 4 + j] = by[i] * bx[j];
                    }
                }
                weights.push(w);
                deformed.push(Vec2::new(tx as f32 * width, ty as f32 * height));
            }
        }

        Self {
            tiles_x,
            tiles_y,
            width,
            height,
            weights,
            deformed,
        }
    }

    #[inline]
    fn vertex_index(&self, x: usize, y: usize) -> usize {
        y * (self.tiles_x + 1) + x
    }

    /// Recombine the live control points into the displaced-position table.
    /// Called once per animation tick, after the model step.
    pub fn evaluate(&mut self, points: &[GridPoint; GRID_POINTS]) {
        for (vertex, weights) in self.deformed.iter_mut().zip(&self.weights) {
            let mut x = 0.0f64;
            let mut y = 0.0f64;
            for (w, point) in weights.iter().zip(points) {
                x += w * point.position.x as f64;
                y += w * point.position.y as f64;
            }
            *vertex = Vec2::new(x as f32, y as f32);
        }
    }

    /// Displaced position for normalized surface coordinates `(u, v)`.
    ///
    /// Nearest-vertex lookup, not interpolation: the tessellation is assumed
    /// fine enough that rounding to a tile vertex is invisible.
    pub fn sample(&self, u: f32, v: f32) -> Vec2 {
        let ix = ((u * self.tiles_x as f32).round()).clamp(0.0, self.tiles_x as f32) as usize;
        let iy = ((v * self.tiles_y as f32).round()).clamp(0.0, self.tiles_y as f32) as usize;
        self.deformed[self.vertex_index(ix, iy)]
    }

    /// Basis weights at one tile vertex, in control-point row-major order.
    #[inline]
    pub fn weights_at(&self, x: usize, y: usize) -> &[f64; GRID_POINTS] {
        &self.weights[self.vertex_index(x, y)]
    }

    /// Original (undeformed) surface size the table was built for.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    #[inline]
    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }
}
