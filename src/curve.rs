/*
 * Curve Module
 *
 * This module defines the cubic Bezier curve that forms the wing's bone.
 * The curve is sampled into a polyline at a fixed subdivision count and
 * the samples are what feathers attach to.
 */

use nannou::prelude::*;

// Below this the region fractions collapse into empty or overlapping ranges
pub const MIN_SUBDIVISIONS: usize = 4;

// Samples per unit of the "distribution" parameter
pub const SUBDIVISIONS_PER_DISTRIBUTION: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub points: [Vec3; 4],
}

impl CubicBezier {
    pub fn new(points: [Vec3; 4]) -> Self {
        Self { points }
    }

    // Evaluate the curve at parameter t in [0, 1]
    pub fn point_at(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        p0 * (mt2 * mt) + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * (t2 * t)
    }

    /// Sample the curve at `subdivisions + 1` evenly spaced parameter values.
    ///
    /// The first sample is the first control point and the last sample is the
    /// last control point. A subdivision count of zero is treated as one.
    pub fn sample(&self, subdivisions: usize) -> Vec<Vec3> {
        let n = subdivisions.max(1);
        let mut samples = Vec::with_capacity(n + 1);
        samples.push(self.points[0]);
        for i in 1..n {
            samples.push(self.point_at(i as f32 / n as f32));
        }
        samples.push(self.points[3]);
        samples
    }
}

// Number of curve subdivisions for a given distribution setting
pub fn subdivisions_for(distribution: u32) -> usize {
    (distribution as usize * SUBDIVISIONS_PER_DISTRIBUTION).max(MIN_SUBDIVISIONS)
}
